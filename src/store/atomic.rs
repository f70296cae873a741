use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::error::{Result, TodoError};

/// Replace `path` with `contents` by writing a staging file next to it and
/// renaming it into place. Readers see either the old or the new file,
/// never a truncated one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        return Err(TodoError::InvalidPath(path.display().to_string()));
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let nonce = Uuid::new_v4().simple();
    let staging = dir.join(format!(".{}.{nonce}.tmp", file_name.to_string_lossy()));

    if let Err(err) = write_synced(&staging, contents) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    Ok(())
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
