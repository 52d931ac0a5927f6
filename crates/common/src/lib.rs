//! OpenPress Common Library
//!
//! Shared code for the OpenPress administration tools including:
//! - Database models and repository pattern
//! - Error types and handling
//! - Configuration management

pub mod config;
pub mod db;
pub mod errors;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
