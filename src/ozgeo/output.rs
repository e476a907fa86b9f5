use crate::ozgeo::error::Error;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Serialize `value` as compact JSON to `target`.
///
/// Bytes go to a temp file next to the target which is renamed over it
/// once fully written and synced, so a failed run never leaves a
/// truncated file at `target`.
pub fn write_compact_json<T: Serialize>(target: &Path, value: &T) -> Result<(), Error> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    debug!(tmp = %tmp.path().display(), target = %target.display(), "persisting output");
    tmp.persist(target)?;
    if let Some(parent) = target.parent() {
        let _ = File::open(parent).and_then(|f| f.sync_all());
    }
    Ok(())
}
