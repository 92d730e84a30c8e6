use crate::error::{MappingConflict, RenameError, Result};
use crate::models::{FileRecord, RenameConfig};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// A physical rename planned for one old-extension file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Old basename to new basename, plus the moves that realise it on disk.
///
/// Keys are unique and no two keys share a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMapping {
    basenames: BTreeMap<String, String>,
    moves: Vec<PlannedMove>,
}

impl RenameMapping {
    /// A mapping used only for rewriting text, with no files behind it.
    #[cfg(test)]
    pub fn from_basenames<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            basenames: pairs
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
            moves: Vec::new(),
        }
    }

    pub fn new_basename(&self, old_basename: &str) -> Option<&str> {
        self.basenames.get(old_basename).map(String::as_str)
    }

    #[cfg(test)]
    pub fn basenames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.basenames
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }

    pub fn moves(&self) -> &[PlannedMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.basenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basenames.is_empty()
    }

    /// The mapping that undoes this one, basename for basename.
    #[cfg(test)]
    pub fn inverse(&self) -> Self {
        Self {
            basenames: self
                .basenames
                .iter()
                .map(|(old, new)| (new.clone(), old.clone()))
                .collect(),
            moves: self
                .moves
                .iter()
                .map(|planned| PlannedMove {
                    from: planned.to.clone(),
                    to: planned.from.clone(),
                })
                .collect(),
        }
    }
}

/// Swaps the trailing old extension of `basename` for the new one.
pub fn renamed_basename(basename: &str, old_extension: &str, new_extension: &str) -> Option<String> {
    basename
        .strip_suffix(old_extension)
        .map(|stem| format!("{stem}{new_extension}"))
}

/// Builds the mapping for `old_files`, reporting every conflict at once.
///
/// A target that is itself an old file is not a conflict: it is moved away
/// first, see [`order_moves`].
pub fn build_mapping(old_files: &[FileRecord], config: &RenameConfig) -> Result<RenameMapping> {
    let batch: HashSet<&Path> = old_files.iter().map(|r| r.path.as_path()).collect();
    let mut by_basename: BTreeMap<&str, Vec<&FileRecord>> = BTreeMap::new();
    for record in old_files {
        by_basename
            .entry(record.basename.as_str())
            .or_default()
            .push(record);
    }

    let mut conflicts = Vec::new();
    let mut mapping = RenameMapping::default();

    for (basename, records) in &by_basename {
        if records.len() > 1 {
            conflicts.push(MappingConflict::DuplicateBasename {
                basename: basename.to_string(),
                paths: records.iter().map(|r| r.path.clone()).collect(),
            });
            continue;
        }

        let record = records[0];
        let Some(new_basename) =
            renamed_basename(basename, &config.old_extension, &config.new_extension)
        else {
            continue;
        };

        let target = record.path.with_file_name(&new_basename);
        if target.exists() && !batch.contains(target.as_path()) {
            conflicts.push(MappingConflict::TargetExists {
                source: record.path.clone(),
                target: target.clone(),
            });
        }

        mapping
            .basenames
            .insert(basename.to_string(), new_basename);
        mapping.moves.push(PlannedMove {
            from: record.path.clone(),
            to: target,
        });
    }

    conflicts.extend(target_collisions(&mapping.basenames));

    if !conflicts.is_empty() {
        return Err(RenameError::MappingConflict(conflicts));
    }

    mapping.moves.sort_by(|a, b| a.from.cmp(&b.from));
    mapping.moves = order_moves(mapping.moves);
    Ok(mapping)
}

/// Orders moves so a file is moved out of the way before another move
/// takes its name. Keeps the incoming order otherwise.
///
/// Chains such as `x.hh.hh.h -> x.hh.h -> x.h` only appear when one
/// extension is a suffix of the other. Names shrink or grow along a chain,
/// so it never loops back.
fn order_moves(mut pending: Vec<PlannedMove>) -> Vec<PlannedMove> {
    let mut ordered = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let sources: HashSet<PathBuf> = pending.iter().map(|m| m.from.clone()).collect();
        let (ready, blocked): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|planned| !sources.contains(&planned.to));
        if ready.is_empty() {
            ordered.extend(blocked);
            break;
        }
        ordered.extend(ready);
        pending = blocked;
    }
    ordered
}

fn target_collisions(basenames: &BTreeMap<String, String>) -> Vec<MappingConflict> {
    let mut by_target: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (old, new) in basenames {
        by_target.entry(new.as_str()).or_default().push(old.clone());
    }

    by_target
        .into_iter()
        .filter(|(_, old_basenames)| old_basenames.len() > 1)
        .map(|(new_basename, old_basenames)| MappingConflict::TargetCollision {
            new_basename: new_basename.to_string(),
            old_basenames,
        })
        .collect()
}
