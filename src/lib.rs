//! # mfba-reader
//!
//! A reader for MFBA multi-frame capture containers (.mfba files).
//!
//! An MFBA file stores a sequence of camera frames back to back. Each frame
//! carries an obfuscated JSON metadata block followed by an obfuscated raw
//! pixel block; frames are variable length, so their boundaries are
//! discovered by chasing offset fields at the start of each frame. The whole
//! file is indexed once at open time and frames are decoded on demand.
//!
//! **Note:** Writing MFBA files is not supported.
pub mod mfba;

// Re-export the main types for convenience
pub use mfba::{
    MfbaReader,
    error::{MfbaError, Result},
    models::{FrameMetadata, FrameRecord, MfbaVersion, Orientation, SUPPORTED_VERSION},
};
