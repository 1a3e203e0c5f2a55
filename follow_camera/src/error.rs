//! Error types for the follow camera rig
//!
//! The rig is fail-soft by design: a missing target at bind time degrades
//! the rig to a no-op and is reported through the logging system, not as
//! an error. Only configuration problems propagate to the host.

use std::fmt;

/// Result type for follow camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Follow camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration rejected at bind time (non-finite or out-of-range value)
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
