//! Persistence module
//!
//! SQLite storage for classification records and the keyword list.

pub mod manager;

pub use manager::{ClassificationStore, StoreStats};
