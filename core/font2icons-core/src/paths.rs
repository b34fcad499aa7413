//! Input/output path resolution (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Join relative paths onto `base`; absolute paths pass through unchanged.
pub fn absolutize(raw: &Path, base: &Path) -> PathBuf {
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base.join(raw)
    }
}

/// Resolve the font to read. The path must already exist; nothing is created.
pub fn resolve_input(raw: &Path, base: &Path) -> Result<PathBuf> {
    let path = absolutize(raw, base);
    if !path.exists() {
        return Err(Error::PathNotFound(path));
    }
    Ok(path)
}

/// Resolve the output directory, creating it when missing.
///
/// An existing directory is kept as is unless `clear` is set, in which case
/// it is removed recursively and recreated empty. An existing non-directory
/// is rejected with [`Error::NotADirectory`].
pub fn prepare_output(raw: &Path, base: &Path, clear: bool) -> Result<PathBuf> {
    let path = absolutize(raw, base);

    if !path.exists() {
        debug!("creating output directory {}", path.display());
        fs::create_dir_all(&path).map_err(|e| Error::io("creating", &path, e))?;
        return Ok(path);
    }

    if !path.is_dir() {
        return Err(Error::NotADirectory(path));
    }

    if clear {
        debug!("clearing output directory {}", path.display());
        fs::remove_dir_all(&path).map_err(|e| Error::io("clearing", &path, e))?;
        fs::create_dir(&path).map_err(|e| Error::io("recreating", &path, e))?;
    }

    Ok(path)
}
