//! Scenepack Core Library
//!
//! This crate provides the common types, path utilities, and error handling
//! shared across the scenepack export components.

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result, ResultExt};
    pub use crate::types::*;
}
