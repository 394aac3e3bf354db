//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;

pub use config::SyncConfig;
pub use diagnostic::Diagnostic;
