//! Artifact emission: one pretty-printed JSON array, replaced atomically.
//!
//! The write goes through a sibling temp file, fsync, and rename, so a
//! failed run never leaves a torn registry behind.

use crate::error::SourceError;
use keyatlas_kernel::descriptor::KeycodeDescriptor;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Render the descriptor list as the artifact text: a human-formatted
/// JSON array (2-space indentation) with a trailing newline.
pub fn render_artifact(descriptors: &[KeycodeDescriptor]) -> Result<String, SourceError> {
    let json = serde_json::to_string_pretty(descriptors)
        .map_err(|e| SourceError::Serialize(e.to_string()))?;
    Ok(format!("{json}\n"))
}

/// Write the descriptor list to `path`, replacing any previous artifact
/// atomically.
pub fn write_artifact(
    path: impl AsRef<Path>,
    descriptors: &[KeycodeDescriptor],
) -> Result<(), SourceError> {
    let path = path.as_ref();
    let text = render_artifact(descriptors)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), SourceError> {
        let mut file = File::create(&tmp_path).map_err(|e| write_error(&tmp_path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| write_error(&tmp_path, e))?;
        file.sync_all().map_err(|e| write_error(&tmp_path, e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_error(path, e)
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let dir = File::open(parent).map_err(|e| write_error(parent, e))?;
        dir.sync_all().map_err(|e| write_error(parent, e))?;
    }

    Ok(())
}

fn write_error(path: &Path, error: std::io::Error) -> SourceError {
    SourceError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
