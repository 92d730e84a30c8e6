use super::args::TargetArgs;
use crate::config;
use crate::constants::{DEFAULT_NEW_EXTENSION, DEFAULT_OLD_EXTENSION, DEFAULT_SOURCE_DIR};
use crate::models::RenameConfig;
use crate::utils::file_utils::resolve_dir;
use anyhow::Result;
use std::path::{Path, PathBuf};

fn resolve_root(
    root: Option<PathBuf>,
    current_dir: &Path,
    config: Option<&config::Config>,
) -> PathBuf {
    match root {
        Some(root) => resolve_dir(current_dir, root),
        None => {
            let source_dir = config
                .and_then(|c| c.source_dir.as_deref())
                .unwrap_or(DEFAULT_SOURCE_DIR);
            resolve_dir(current_dir, source_dir)
        }
    }
}

fn resolve_extension(
    extension: Option<String>,
    from_config: Option<&String>,
    default: &str,
) -> String {
    extension
        .or_else(|| from_config.cloned())
        .unwrap_or_else(|| default.to_string())
}

impl TargetArgs {
    /// Merges CLI options over the config file over defaults.
    pub fn with_config(
        self,
        current_dir: &Path,
        config: Option<&config::Config>,
    ) -> Result<RenameConfig> {
        let root = resolve_root(self.root, current_dir, config);
        let old_extension = resolve_extension(
            self.from,
            config.and_then(|c| c.old_extension.as_ref()),
            DEFAULT_OLD_EXTENSION,
        );
        let new_extension = resolve_extension(
            self.to,
            config.and_then(|c| c.new_extension.as_ref()),
            DEFAULT_NEW_EXTENSION,
        );

        let mut rename_config = RenameConfig::new(root, &old_extension, &new_extension)?;

        if let Some(extensions) = self
            .extensions
            .or_else(|| config.and_then(|c| c.source_extensions.clone()))
        {
            rename_config = rename_config.with_source_extensions(extensions)?;
        }

        let respect_gitignore = if self.respect_gitignore {
            true
        } else if self.no_respect_gitignore {
            false
        } else {
            config.and_then(|c| c.respect_gitignore).unwrap_or(false)
        };

        Ok(rename_config.with_respect_gitignore(respect_gitignore))
    }
}
