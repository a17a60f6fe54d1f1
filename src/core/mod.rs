//! Core utilities: configuration, errors, logging and the control server

pub mod config;
pub mod error;
pub mod logging;
pub mod web_server;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use logging::init_logger;
