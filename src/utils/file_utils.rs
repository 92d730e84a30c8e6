use std::path::{Path, PathBuf};

/// `path` relative to `root` for display, falling back to the full path.
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// Resolves a user supplied directory against the invocation directory.
pub fn resolve_dir(current_dir: &Path, dir: impl AsRef<Path>) -> PathBuf {
    let dir = dir.as_ref();
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir.join(dir)
    }
}
