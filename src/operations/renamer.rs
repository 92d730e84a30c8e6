use crate::error::{RenameError, Result};
use crate::operations::report::StageReport;
use crate::operations::PlannedMove;
use std::fs;

/// Moves one file, refusing to overwrite an existing destination.
pub fn apply_move(planned: &PlannedMove) -> Result<()> {
    if planned.to.exists() {
        return Err(RenameError::DestinationExists {
            from: planned.from.clone(),
            to: planned.to.clone(),
        });
    }

    fs::rename(&planned.from, &planned.to).map_err(|source| RenameError::Rename {
        from: planned.from.clone(),
        to: planned.to.clone(),
        source,
    })
}

/// Applies every move, best effort. Failures are recorded and the remaining
/// moves still run.
pub fn apply_moves(moves: &[PlannedMove], dry_run: bool) -> (StageReport, Vec<PlannedMove>) {
    let mut stage = StageReport::default();
    let mut completed = Vec::new();

    for planned in moves {
        let result = if dry_run { Ok(()) } else { apply_move(planned) };
        match result {
            Ok(()) => {
                stage.record_success();
                completed.push(planned.clone());
            }
            Err(e) => {
                tracing::debug!("{e}");
                stage.record_failure(&planned.from, e);
            }
        }
    }

    (stage, completed)
}
