//! Core MFBA reader module.

pub mod error;
pub mod header;
pub mod io;
pub mod models;
pub mod obfuscation;
pub mod utils;
mod frames;
mod metadata;
mod pixels;

use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use models::*;
pub use error::{MfbaError, Result};

/// The main reader for MFBA capture containers.
///
/// Validates the file header and builds the frame table once at open time;
/// frames are then decoded on demand, in any order, any number of times.
/// The reader never mutates after construction and every per-frame read
/// opens its own file handle, so a shared reference can be used from
/// multiple threads without synchronization.
#[derive(Debug)]
pub struct MfbaReader {
    file_path: PathBuf,
    version: MfbaVersion,
    frame_table: Vec<FrameRecord>,
}

impl MfbaReader {
    /// Open an MFBA file from the given path.
    ///
    /// Construction performs a single sequential pass over the file to
    /// locate every frame, so a truncated or corrupt file is rejected here
    /// rather than on first frame access.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or is empty
    /// - The signature is not `FFF`
    /// - The version is not 1.0.0
    /// - The frame table walk runs past the end of the file
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening MFBA file: {}", path.display());

        let version = header::validate(path)?;
        if version != SUPPORTED_VERSION {
            return Err(MfbaError::UnsupportedVersion(version));
        }

        let num_frames = frames::read_frame_count(path)?;
        let frame_table = frames::build_table(path, num_frames as usize)?;

        info!("MFBA file opened: version {}, {} frames", version, frame_table.len());

        Ok(Self {
            file_path: path.to_path_buf(),
            version,
            frame_table,
        })
    }

    /// Returns the container version.
    pub fn version(&self) -> MfbaVersion {
        self.version
    }

    /// Returns the number of frames in the container.
    pub fn frame_count(&self) -> usize {
        self.frame_table.len()
    }

    /// Returns the frame location table, in file (= chronological) order.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frame_table
    }

    /// Read and decode the metadata block of the frame at `index`.
    ///
    /// The block is read and parsed fresh on every call.
    pub fn metadata(&self, index: usize) -> Result<FrameMetadata> {
        let record = self.record(index)?;
        metadata::extract(&self.file_path, record)
    }

    /// Read and decode the pixel data of the frame at `index`.
    ///
    /// The frame's metadata is read first to pick the pixel layout from the
    /// recorded orientation.
    pub fn image(&self, index: usize) -> Result<RgbImage> {
        let record = self.record(index)?;
        let metadata = metadata::extract(&self.file_path, record)?;
        pixels::extract(&self.file_path, record, &metadata)
    }

    /// Bounds-check a frame index before any I/O happens for it.
    fn record(&self, index: usize) -> Result<&FrameRecord> {
        self.frame_table
            .get(index)
            .ok_or(MfbaError::FrameOutOfRange {
                index,
                frames: self.frame_table.len(),
            })
    }
}
