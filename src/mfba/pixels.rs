//! Frame pixel extraction and buffer layout.

use std::path::Path;

use image::RgbImage;
use log::debug;

use super::error::{MfbaError, Result};
use super::models::{FrameMetadata, FrameRecord, Orientation};
use super::{io, obfuscation};

/// Metadata source holding the EXIF-style orientation code.
const ORIENTATION_SOURCE: &str = "Orientation";
/// Key of the orientation code within that source.
const ORIENTATION_KEY: &str = "Orientation";

/// Read and decode the pixel block of a frame.
///
/// The decoded stream is consumed sequentially into a row-major buffer,
/// three bytes per pixel. Channel bytes stay in on-disk order; the capture
/// pipeline already stores them in the order consumers expect.
pub(crate) fn extract(
    path: &Path,
    record: &FrameRecord,
    metadata: &FrameMetadata,
) -> Result<RgbImage> {
    let raw = io::read_range(path, record.pixels_start(), u64::from(record.image_size))?;
    let mut pixels = obfuscation::decode(&raw);

    let orientation = orientation_of(metadata)?;
    let (width, height) = orientation.dimensions();
    let required = width as usize * height as usize * 3;
    let actual = pixels.len();
    if actual < required {
        return Err(MfbaError::CorruptFrame { required, actual });
    }
    debug!(
        "Decoding {}x{} frame ({:?}, {} pixel bytes)",
        width, height, orientation, required
    );

    pixels.truncate(required);
    RgbImage::from_raw(width, height, pixels).ok_or(MfbaError::CorruptFrame { required, actual })
}

/// Look up the orientation code recorded in the frame metadata.
fn orientation_of(metadata: &FrameMetadata) -> Result<Orientation> {
    let value = metadata
        .get(ORIENTATION_SOURCE)
        .and_then(|entries| entries.get(ORIENTATION_KEY))
        .ok_or_else(|| {
            MfbaError::MetadataParse("no Orientation entry in frame metadata".to_string())
        })?;
    let code: i64 = value.trim().parse().map_err(|_| {
        MfbaError::MetadataParse(format!("orientation value is not an integer: {:?}", value))
    })?;
    Orientation::try_from(code)
}
