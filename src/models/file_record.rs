use std::path::{Path, PathBuf};

/// A file found during discovery, along with the configured suffix it matched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileRecord {
    pub path: PathBuf,
    pub basename: String,
    pub extension: String,
}

impl FileRecord {
    /// Builds a record when the file name ends with one of `extensions`.
    /// The longest matching suffix wins so `.inl` style overlaps stay stable.
    pub fn matching(path: &Path, extensions: &[String]) -> Option<Self> {
        let basename = path.file_name()?.to_str()?;
        let extension = extensions
            .iter()
            .filter(|ext| basename.ends_with(ext.as_str()))
            .max_by_key(|ext| ext.len())?;

        Some(Self {
            path: path.to_path_buf(),
            basename: basename.to_string(),
            extension: extension.clone(),
        })
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.basename.ends_with(extension)
    }
}
