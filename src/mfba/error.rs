//! Custom error types for the mfba-reader crate.

use thiserror::Error;

use super::models::MfbaVersion;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MfbaError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A read past the end of the file, or the file is empty.
    #[error("Read out of range: {0}")]
    OutOfRange(String),

    /// The file does not start with the MFBA signature.
    #[error("Invalid MFBA signature (expected \"FFF\")")]
    InvalidSignature,

    /// The container version is not supported.
    #[error("MFBA version is not 1.0.0 (found {0})")]
    UnsupportedVersion(MfbaVersion),

    /// A frame index past the end of the frame table.
    #[error("Image frame out of range, file includes {frames} frames (requested index {index})")]
    FrameOutOfRange { index: usize, frames: usize },

    /// The metadata block does not hold the expected JSON shape.
    #[error("Metadata parse failed: {0}")]
    MetadataParse(String),

    /// The orientation code has no known pixel layout.
    #[error("Unsupported orientation value: {0}")]
    UnsupportedOrientation(i64),

    /// The pixel block is shorter than the frame dimensions require.
    #[error("Corrupt frame: pixel block holds {actual} bytes, expected {required}")]
    CorruptFrame { required: usize, actual: usize },
}

impl From<serde_json::Error> for MfbaError {
    fn from(err: serde_json::Error) -> Self {
        MfbaError::MetadataParse(err.to_string())
    }
}

/// A convenience `Result` type alias using the crate's `MfbaError` type.
pub type Result<T> = std::result::Result<T, MfbaError>;
