//! Frame metadata extraction and JSON decoding.

use std::collections::HashMap;
use std::path::Path;

use log::trace;
use serde::Deserialize;

use super::error::Result;
use super::models::{FrameMetadata, FrameRecord};
use super::{io, obfuscation};

/// One top-level element of the frame metadata JSON array.
#[derive(Debug, Deserialize)]
struct MetadataEntry {
    #[serde(rename = "metadataSource")]
    metadata_source: String,
    contents: Vec<KeyValue>,
}

#[derive(Debug, Deserialize)]
struct KeyValue {
    key: String,
    value: String,
}

/// Read and decode the metadata block of a frame.
///
/// The block holds XOR-obfuscated ASCII JSON: an array of objects, each
/// naming a metadata source and carrying a list of key/value pairs. The
/// result maps each source name to its pairs; a repeated source name is
/// overwritten by its later occurrence.
pub(crate) fn extract(path: &Path, record: &FrameRecord) -> Result<FrameMetadata> {
    let raw = io::read_range(path, record.metadata_start(), record.metadata_len())?;
    let decoded = obfuscation::decode(&raw);
    // The stored text is plain ASCII; lossy conversion leaves any stray
    // bytes for the JSON parser to reject with a position.
    let text = String::from_utf8_lossy(&decoded);
    trace!("Parsing {} bytes of frame metadata", text.len());

    let entries: Vec<MetadataEntry> = serde_json::from_str(&text)?;

    let mut sources = HashMap::with_capacity(entries.len());
    for entry in entries {
        let contents = entry
            .contents
            .into_iter()
            .map(|kv| (kv.key, kv.value))
            .collect();
        sources.insert(entry.metadata_source, contents);
    }
    Ok(sources)
}
