//! Data structures representing MFBA container components.

use std::collections::HashMap;
use std::fmt;

use super::error::{MfbaError, Result};

/// Container format version, a `{major}.{minor}.{patch}` byte triplet
/// stored at file bytes 3..6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MfbaVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

/// The only container version this reader understands.
pub const SUPPORTED_VERSION: MfbaVersion = MfbaVersion {
    major: 1,
    minor: 0,
    patch: 0,
};

impl fmt::Display for MfbaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Per-frame metadata: metadata source name -> key/value pairs.
///
/// Typical sources are "Orientation", "CameraCharacteristics" and
/// "CaptureResult". Sources are expected to be unique within a frame; if a
/// frame repeats one, the last occurrence wins.
pub type FrameMetadata = HashMap<String, HashMap<String, String>>;

/// Location of a single frame inside the container file.
///
/// Frames are variable length. The next frame starts
/// `header_offset + image_offset + image_size` bytes after this one.
#[derive(Debug, Clone, Copy)]
pub struct FrameRecord {
    /// Absolute byte offset where the frame starts.
    pub frame_start: u64,
    /// Bytes from the frame start to the metadata block. Covers the three
    /// offset fields at the head of the frame.
    pub header_offset: u32,
    /// Bytes from the metadata block to the pixel block, i.e. the length
    /// of the metadata block.
    pub image_offset: u32,
    /// Byte length of the pixel block.
    pub image_size: u32,
}

impl FrameRecord {
    /// Absolute offset of the frame's metadata block.
    pub fn metadata_start(&self) -> u64 {
        self.frame_start + u64::from(self.header_offset)
    }

    /// Length of the metadata block in bytes.
    pub fn metadata_len(&self) -> u64 {
        u64::from(self.image_offset)
    }

    /// Absolute offset of the frame's pixel block.
    pub fn pixels_start(&self) -> u64 {
        self.metadata_start() + u64::from(self.image_offset)
    }

    /// Total frame length; the next frame starts this many bytes after
    /// `frame_start`.
    pub fn byte_len(&self) -> u64 {
        u64::from(self.header_offset) + u64::from(self.image_offset) + u64::from(self.image_size)
    }
}

/// Fixed capture dimensions. The sensor always delivers 1080x1920;
/// orientation decides which axis ends up as the buffer width.
pub const PORTRAIT_WIDTH: u32 = 1080;
pub const PORTRAIT_HEIGHT: u32 = 1920;

/// Physical device rotation at capture time, reduced to the two pixel
/// layouts the capture hardware produces.
///
/// The stored value follows Android's `ExifInterface` orientation codes.
/// The capture app writes the same dimension fields for every rotation,
/// so the code is the only way to tell which axis is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Codes 6 (rotate-90) and 7 (transverse): upright portrait capture.
    Portrait,
    /// Codes 1 (normal) and 3 (rotate-180): the phone held sideways.
    Landscape,
}

impl Orientation {
    /// Pixel buffer dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Orientation::Portrait => (PORTRAIT_WIDTH, PORTRAIT_HEIGHT),
            Orientation::Landscape => (PORTRAIT_HEIGHT, PORTRAIT_WIDTH),
        }
    }
}

impl TryFrom<i64> for Orientation {
    type Error = MfbaError;
    fn try_from(value: i64) -> Result<Self> {
        match value {
            6 | 7 => Ok(Self::Portrait),
            1 | 3 => Ok(Self::Landscape),
            other => Err(MfbaError::UnsupportedOrientation(other)),
        }
    }
}
