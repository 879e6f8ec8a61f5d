//! Directory creation and boilerplate file writing

use plugfile_foundation::{ScaffoldError, ScaffoldResult};
use std::fs;
use std::path::Path;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> ScaffoldResult<()> {
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir, e))?;
    tracing::debug!(dir = %dir.display(), "Ensured directory exists");
    Ok(())
}

/// Write `content` to `path`, replacing whatever was there.
///
/// Returns `true` when an existing file was overwritten.
pub fn write_boilerplate(path: &Path, content: &str) -> ScaffoldResult<bool> {
    let overwritten = path.exists();
    if overwritten {
        tracing::warn!(path = %path.display(), "Overwriting existing file");
    }
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote boilerplate");
    Ok(overwritten)
}
