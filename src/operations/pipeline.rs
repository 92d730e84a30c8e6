use crate::error::Result;
use crate::models::RenameConfig;
use crate::operations::discovery::{discover_files, Discovery};
use crate::operations::mapping::{build_mapping, RenameMapping};
use crate::operations::renamer::apply_moves;
use crate::operations::report::RunReport;
use crate::operations::rewrite::rewrite_file;

/// Discovery and mapping for one run. Nothing on disk has changed yet.
#[derive(Debug)]
pub struct RenamePlan {
    pub discovery: Discovery,
    pub mapping: RenameMapping,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Runs discovery and builds the mapping. Fails without touching the tree
/// when the root is missing or the mapping has conflicts.
pub fn prepare(config: &RenameConfig) -> Result<RenamePlan> {
    let discovery = discover_files(config)?;
    let mapping = build_mapping(&discovery.old_files, config)?;
    Ok(RenamePlan { discovery, mapping })
}

/// Rewrites every candidate file, then performs the renames. Per-file
/// failures end up in the report; all rewrites finish before the first
/// rename.
pub fn execute(plan: &RenamePlan, dry_run: bool) -> RunReport {
    let mut report = RunReport {
        dry_run,
        discovered: plan.discovery.old_files.len(),
        ..RunReport::default()
    };

    if plan.is_empty() {
        return report;
    }

    for candidate in &plan.discovery.candidate_files {
        match rewrite_file(&candidate.path, &plan.mapping, dry_run) {
            Ok(replacements) => {
                report.rewrite.record_success();
                if replacements > 0 {
                    report.rewritten_files.push(candidate.path.clone());
                }
            }
            Err(e) => {
                tracing::debug!("{e}");
                report.rewrite.record_failure(&candidate.path, e);
            }
        }
    }

    let (rename, renamed_files) = apply_moves(plan.mapping.moves(), dry_run);
    report.rename = rename;
    report.renamed_files = renamed_files;
    report
}
