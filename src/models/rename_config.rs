use crate::constants::DEFAULT_SOURCE_EXTENSIONS;
use crate::error::{RenameError, Result};
use std::path::{Path, PathBuf};

/// Everything a rename run needs, passed explicitly into each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub root: PathBuf,
    pub old_extension: String,
    pub new_extension: String,
    /// Suffixes of files scanned for directives. Always contains the old and
    /// new extensions.
    pub source_extensions: Vec<String>,
    pub respect_gitignore: bool,
}

impl RenameConfig {
    pub fn new(root: impl Into<PathBuf>, old_extension: &str, new_extension: &str) -> Result<Self> {
        let old_extension = normalize_extension(old_extension)?;
        let new_extension = normalize_extension(new_extension)?;

        if new_extension.ends_with(&old_extension) {
            return Err(RenameError::InvalidExtension(format!(
                "new extension '{new_extension}' must not end with old extension '{old_extension}'"
            )));
        }

        let mut config = Self {
            root: root.into(),
            old_extension,
            new_extension,
            source_extensions: Vec::new(),
            respect_gitignore: false,
        };
        config.set_source_extensions(DEFAULT_SOURCE_EXTENSIONS.iter().copied())?;
        Ok(config)
    }

    pub fn with_source_extensions<I, S>(mut self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_source_extensions(extensions)?;
        Ok(self)
    }

    pub fn with_respect_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn set_source_extensions<I, S>(&mut self, extensions: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = vec![self.old_extension.clone(), self.new_extension.clone()];
        for extension in extensions {
            let extension = normalize_extension(extension.as_ref())?;
            if !normalized.contains(&extension) {
                normalized.push(extension);
            }
        }
        self.source_extensions = normalized;
        Ok(())
    }
}

/// Trims the value and adds the leading dot when it is missing.
pub fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim();
    let bare = trimmed.trim_start_matches('.');
    if bare.is_empty() {
        return Err(RenameError::InvalidExtension(format!(
            "'{extension}' is empty"
        )));
    }
    if bare.contains(|c: char| c == '/' || c == '\\') {
        return Err(RenameError::InvalidExtension(format!(
            "'{extension}' contains a path separator"
        )));
    }
    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{trimmed}"))
    }
}
