//! NDJSON pack writer.
//!
//! One compact JSON object per line, one newline after every record. The
//! destination is truncated if it exists; its directory must already exist.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::PackError;

/// Encode a record as a single compact JSON line, without the newline.
pub fn encode_line<T: Serialize>(record: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}

/// Write `records` to `path` in order. Returns the number of lines written.
pub fn write_pack<T: Serialize>(path: &Path, records: &[T]) -> Result<usize, PackError> {
    let file = File::create(path).map_err(|e| PackError::io(path, e))?;
    let mut out = BufWriter::new(file);

    for record in records {
        let line = encode_line(record).map_err(|e| PackError::encode(path, e))?;
        out.write_all(line.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| PackError::io(path, e))?;
    }
    out.flush().map_err(|e| PackError::io(path, e))?;

    tracing::debug!(path = %path.display(), lines = records.len(), "Wrote pack file");
    Ok(records.len())
}
