// Cell Edit Merge - adopt the editor's full snapshot as the new grid
//
// The editor always submits every cell, so merging is adoption of the latest
// snapshot rather than a per-cell diff.

use crate::grid::state::GridState;
use crate::grid::traits::{GridError, GridResult, GridTrait};
use log::{debug, warn};

/// Adopt `edited` when its shape matches `current`
pub fn try_merge(current: &GridState, edited: GridState) -> GridResult<GridState> {
    if current.shape() != edited.shape() {
        return Err(GridError::ShapeMismatch {
            expected: current.shape(),
            found: edited.shape(),
        });
    }
    Ok(edited)
}

/// Adopt `edited`, or keep `current` when the snapshot is stale
pub fn merge_edits(current: GridState, edited: GridState) -> GridState {
    match try_merge(&current, edited) {
        Ok(merged) => {
            debug!("Adopted edited snapshot ({})", merged.shape());
            merged
        }
        Err(e) => {
            warn!("Discarding edited snapshot: {}", e);
            current
        }
    }
}

/// Cells that differ between two grids of the same shape
pub fn changed_cells(before: &GridState, after: &GridState) -> Vec<(usize, usize)> {
    if before.shape() != after.shape() {
        return Vec::new();
    }
    before
        .iter_cells()
        .zip(after.iter_cells())
        .filter(|((_, _, a), (_, _, b))| a != b)
        .map(|((row, col, _), _)| (row, col))
        .collect()
}
