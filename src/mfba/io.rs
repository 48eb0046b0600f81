//! Random-access byte-range reads from the container file.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use log::trace;

use super::error::{MfbaError, Result};

/// Read exactly `len` bytes starting at byte `start` of the file at `path`.
///
/// Every call opens its own file handle, so concurrent readers never share
/// seek position. Reading up to the exact end of the file is allowed;
/// anything past it is rejected before the read happens. Either the full
/// range is returned or an error is raised, never a partial read.
pub fn read_range(path: &Path, start: u64, len: u64) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();

    if size == 0 {
        return Err(MfbaError::OutOfRange("size == 0".to_string()));
    }
    if start > size {
        return Err(MfbaError::OutOfRange(format!(
            "start_byte {} > size {}",
            start, size
        )));
    }
    let end = start.checked_add(len).ok_or_else(|| {
        MfbaError::OutOfRange(format!("start_byte {} + {} bytes overflows", start, len))
    })?;
    if end > size {
        return Err(MfbaError::OutOfRange(format!(
            "end_byte {} > size {}",
            end, size
        )));
    }

    trace!("Reading {} bytes at offset {}", len, start);
    let mut buffer = vec![0u8; len as usize];
    file.seek(SeekFrom::Start(start))?;
    file.read_exact(&mut buffer)?;
    Ok(buffer)
}
