//! # Error Types
//!
//! This module defines error types used throughout the brasa library.

use thiserror::Error;

/// Main error type for brasa operations
#[derive(Debug, Error)]
pub enum BrasaError {
    /// Transport-level errors (device open, TTY configuration)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image does not match the printer's raster constraints
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper (failed writes to the sink propagate here)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
