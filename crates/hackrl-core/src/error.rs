//! Error types for hackrl

use thiserror::Error;

/// Result type for hackrl operations
pub type Result<T> = std::result::Result<T, HackRlError>;

/// hackrl error types
#[derive(Debug, Error)]
pub enum HackRlError {
    /// Window handle has no live shadow slot
    #[error("Unknown window: {0}")]
    UnknownWindow(i32),

    /// Window handle already has a live shadow slot
    #[error("Window already exists: {0}")]
    WindowExists(i32),

    /// Channel bind or socket I/O failure
    #[error("IPC error: {0}")]
    IpcError(String),

    /// Frame length exceeds the wire limit
    #[error("Frame too large: {0} bytes")]
    FrameTooLarge(usize),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<rmp_serde::encode::Error> for HackRlError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        HackRlError::SerializationError(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for HackRlError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        HackRlError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for HackRlError {
    fn from(err: std::io::Error) -> Self {
        HackRlError::IpcError(err.to_string())
    }
}
