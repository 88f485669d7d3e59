//! Question Difficulty Analyzer Core
//!
//! Types and error handling shared by the classification pipeline and the
//! web front-end.
//!
//! This crate provides:
//! - The workspace-wide error type and `Result` alias
//! - Difficulty levels, text statistics, and the prediction record

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{is_blank, is_separator, Difficulty, Prediction, TextStatistics};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Difficulty, Prediction, TextStatistics};
}
