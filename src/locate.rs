//! Target discovery

use std::path::{Path, PathBuf};

/// File name the locator probes for.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Return `dir/pyproject.toml` if it exists as an immediate child regular
/// file of `dir`. Only the immediate directory is probed, never ancestors or
/// subdirectories.
///
/// Callers that already hold an explicit target path skip this entirely.
pub fn find_pyproject(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(PYPROJECT_FILENAME);
    candidate.is_file().then_some(candidate)
}
