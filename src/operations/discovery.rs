use crate::error::{RenameError, Result};
use crate::models::{FileRecord, RenameConfig};
use ignore::{DirEntry, WalkBuilder};
use std::path::Path;

/// Files found under the configured root, sorted by path.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Files ending with the old extension.
    pub old_files: Vec<FileRecord>,
    /// Files that may contain directives. A superset of `old_files`.
    pub candidate_files: Vec<FileRecord>,
}

pub fn discover_files(config: &RenameConfig) -> Result<Discovery> {
    let root = config.root();
    if !root.is_dir() {
        return Err(RenameError::RootNotFound(root.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    for entry in build_walker(root, config.respect_gitignore) {
        let Some(entry) = accept_entry(root, entry) else {
            continue;
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if path.file_name().and_then(|name| name.to_str()).is_none() {
            tracing::debug!("skipping non UTF-8 file name: {}", path.display());
            continue;
        }

        let Some(record) = FileRecord::matching(path, &config.source_extensions) else {
            continue;
        };

        tracing::trace!("matched {} ({})", path.display(), record.extension);
        if record.has_extension(&config.old_extension) {
            discovery.old_files.push(record.clone());
        }
        discovery.candidate_files.push(record);
    }

    // Sort for deterministic output across filesystems
    discovery.old_files.sort();
    discovery.candidate_files.sort();

    tracing::debug!(
        old = discovery.old_files.len(),
        candidates = discovery.candidate_files.len(),
        "discovery finished under {}",
        root.display()
    );

    Ok(discovery)
}

/// Unreadable entries are logged and skipped; only a bad root is fatal.
fn accept_entry(
    root: &Path,
    entry: std::result::Result<DirEntry, ignore::Error>,
) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(source) => {
            let error = RenameError::Discovery {
                path: root.to_path_buf(),
                source,
            };
            tracing::warn!("{error}, skipping");
            None
        }
    }
}

fn build_walker(root: &Path, respect_gitignore: bool) -> ignore::Walk {
    WalkBuilder::new(root)
        .standard_filters(respect_gitignore)
        .hidden(false)
        .require_git(false)
        .follow_links(false)
        .build()
}
