//! File system utilities
//!
//! Guarded path joins and text writes used when a document bundle is
//! written to disk.

use std::fs;
use std::path::{Path, PathBuf};

/// Join `relative` onto `base`, rejecting absolute paths and `..` traversal
pub fn safe_path_join(base: &Path, relative: &Path) -> crate::Result<PathBuf> {
    let normalized = normalize_path(relative);

    if normalized.is_absolute() || normalized.to_string_lossy().contains("..") {
        return Err(crate::UtilError::PathOperation(
            format!("Unsafe path join attempted: {:?} + {:?}", base, relative)
        ));
    }

    Ok(base.join(normalized))
}

/// Lexically normalize a path (no file system access)
pub fn normalize_path(path: &Path) -> PathBuf {
    path_clean::clean(path)
}

/// Create a directory and its parents if missing
pub fn ensure_dir(path: &Path) -> crate::Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(crate::UtilError::PathOperation(
            format!("Path exists but is not a directory: {}", path.display())
        ));
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Write text to `dir/name`, creating `dir` first
pub fn write_text_file(dir: &Path, name: &str, content: &str) -> crate::Result<PathBuf> {
    ensure_dir(dir)?;
    let target = safe_path_join(dir, Path::new(name))?;
    fs::write(&target, content)?;
    tracing::debug!("wrote {} bytes to {}", content.len(), target.display());
    Ok(target)
}
