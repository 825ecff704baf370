//! Error types for the Capsim simulator.
//!
//! This module provides a unified error type [`CapsimError`] covering the
//! error conditions that can occur while emitting the trace. A negative
//! discriminant during the solve is *not* an error: it is normal operating
//! behavior handled inside the simulation loop by switching the load off.

use thiserror::Error;

/// Result type alias using [`CapsimError`].
pub type Result<T> = std::result::Result<T, CapsimError>;

/// Unified error type for all Capsim operations.
#[derive(Error, Debug)]
pub enum CapsimError {
    /// Error writing the trace CSV
    #[error("Failed to write trace to '{path}': {source}")]
    TraceWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CapsimError {
    /// Create a trace-write error.
    pub fn trace_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::TraceWrite {
            path: path.into(),
            source,
        }
    }
}
