//! # formforge-core
//!
//! Core types for the formforge form builder. This crate has no dependency
//! on the rest of the workspace and provides the foundation for all other
//! crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Application settings and global configuration
//! - [`logging`] - Tracing-based logging integration
//! - [`ids`] - Element id and share token generation

pub mod error;
pub mod ids;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{FormForgeError, FormForgeResult, ValidationError};
pub use settings::{Settings, SETTINGS};
