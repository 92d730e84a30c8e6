use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenameError>;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to walk {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("{}", format_conflicts(.0))]
    MappingConflict(Vec<MappingConflict>),

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot rename {} -> {}: destination already exists", from.display(), to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },
}

/// A reason the rename batch cannot be carried out safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingConflict {
    /// The same old basename lives in more than one directory.
    DuplicateBasename {
        basename: String,
        paths: Vec<PathBuf>,
    },
    /// Distinct old basenames would end up with the same new basename.
    TargetCollision {
        new_basename: String,
        old_basenames: Vec<String>,
    },
    /// The destination already exists and is not part of this batch.
    TargetExists { source: PathBuf, target: PathBuf },
}

impl fmt::Display for MappingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingConflict::DuplicateBasename { basename, paths } => {
                let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(
                    f,
                    "basename '{basename}' appears in several places: {}",
                    paths.join(", ")
                )
            }
            MappingConflict::TargetCollision {
                new_basename,
                old_basenames,
            } => write!(
                f,
                "{} would all be renamed to '{new_basename}'",
                old_basenames.join(", ")
            ),
            MappingConflict::TargetExists { source, target } => write!(
                f,
                "renaming {} would overwrite existing {}",
                source.display(),
                target.display()
            ),
        }
    }
}

fn format_conflicts(conflicts: &[MappingConflict]) -> String {
    let mut message = format!("Mapping conflict ({} found)", conflicts.len());
    for conflict in conflicts {
        message.push_str(&format!("\n  - {conflict}"));
    }
    message
}
