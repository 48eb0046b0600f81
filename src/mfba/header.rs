//! MFBA file header validation.

use std::path::Path;

use log::{debug, trace};

use super::error::{MfbaError, Result};
use super::io;
use super::models::MfbaVersion;

/// Three ASCII bytes every MFBA file starts with.
pub const SIGNATURE: &[u8; 3] = b"FFF";

/// Validate the file signature and read the container version.
///
/// Header structure:
/// - 3 bytes: signature, must equal `FFF`
/// - 3 bytes: version `{major, minor, patch}`
///
/// Only the signature is checked here; whether the returned version is
/// supported is decided by the caller, so the two failures stay distinct.
pub fn validate(path: &Path) -> Result<MfbaVersion> {
    debug!("Validating MFBA header");

    let signature = io::read_range(path, 0, SIGNATURE.len() as u64)?;
    if signature != *SIGNATURE {
        return Err(MfbaError::InvalidSignature);
    }

    let version_bytes = io::read_range(path, 3, 3)?;
    let version = MfbaVersion {
        major: version_bytes[0],
        minor: version_bytes[1],
        patch: version_bytes[2],
    };
    trace!("Container version: {}", version);
    Ok(version)
}
