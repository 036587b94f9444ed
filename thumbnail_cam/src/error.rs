//! Error types for thumbnail camera alignment
//!
//! None of these errors is fatal to the host: every failure degrades to
//! "skip this tick, try again later".

use std::fmt;

/// Result type for thumbnail camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Thumbnail camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Target surface is not a flat x-z plane, or has no usable size
    InvalidSurfaceGeometry(String),

    /// Cropped region collapsed below the minimum visible size
    DegenerateZoom(String),

    /// Camera or surface could not be located this tick
    MissingTarget(String),

    /// Another session already owns the placement target
    DuplicateOwnership(String),

    /// Parameter outside its valid domain (NaN zoom, FOV of 0°, etc.)
    InvalidParameter(String),

    /// Runtime or one of its subsystems not initialized
    InitializationFailed(String),

    /// A shared lock was poisoned by a panicking holder
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSurfaceGeometry(msg) => write!(f, "Invalid surface geometry: {}", msg),
            Error::DegenerateZoom(msg) => write!(f, "Degenerate zoom: {}", msg),
            Error::MissingTarget(msg) => write!(f, "Missing target: {}", msg),
            Error::DuplicateOwnership(msg) => write!(f, "Duplicate ownership: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Whether the same call may succeed on a later tick without any
    /// change to the inputs (the host may simply not be ready yet).
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::MissingTarget(_) | Error::DuplicateOwnership(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
