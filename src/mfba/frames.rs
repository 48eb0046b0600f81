//! Frame table construction.
//!
//! Frames are variable length, so the container carries no stride. Each
//! frame starts with three big-endian u32 fields giving the metadata block
//! offset, the metadata block length and the pixel block length; the next
//! frame begins immediately after the pixel data. The table is built in one
//! sequential pass at open time.

use std::path::Path;

use log::{debug, info};

use super::error::Result;
use super::models::FrameRecord;
use super::{io, utils};

/// Fixed file header length: 3 signature bytes + 3 version bytes + 2 frame
/// count bytes.
pub(crate) const FILE_HEADER_LEN: u64 = 8;

/// Byte offset of the frame count field.
const FRAME_COUNT_OFFSET: u64 = 6;

/// Combined length of the three per-frame offset fields.
const FRAME_FIELDS_LEN: u64 = 12;

/// Read the declared number of frames from the file header.
///
/// The declared count is authoritative; a count larger than the file can
/// hold surfaces as an out-of-range read during the table walk.
pub(crate) fn read_frame_count(path: &Path) -> Result<u16> {
    let bytes = io::read_range(path, FRAME_COUNT_OFFSET, 2)?;
    Ok(utils::read_u16_be(&bytes))
}

/// Walk the file once and record where every frame lives.
///
/// Each record's `frame_start` is the running sum of all previous frame
/// lengths, so a truncated or corrupt file fails here rather than on the
/// first per-frame access.
pub(crate) fn build_table(path: &Path, num_frames: usize) -> Result<Vec<FrameRecord>> {
    debug!("Building frame table for {} frames", num_frames);

    let mut records = Vec::with_capacity(num_frames);
    let mut cursor = FILE_HEADER_LEN;
    for _ in 0..num_frames {
        let fields = io::read_range(path, cursor, FRAME_FIELDS_LEN)?;
        let record = FrameRecord {
            frame_start: cursor,
            header_offset: utils::read_u32_be(&fields[0..4]),
            image_offset: utils::read_u32_be(&fields[4..8]),
            image_size: utils::read_u32_be(&fields[8..12]),
        };
        cursor += record.byte_len();
        records.push(record);
    }

    info!(
        "Frame table built: {} frames, {} bytes of frame data",
        records.len(),
        cursor - FILE_HEADER_LEN
    );
    Ok(records)
}
