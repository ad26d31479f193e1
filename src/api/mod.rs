//! REST API module

pub mod classify;
pub mod server;

pub use classify::{ApiResponse, AppState};
pub use server::ApiServer;
