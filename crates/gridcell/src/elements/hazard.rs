//! Enemy and Trash: cells that consume whatever moves into them.

use crate::{CellId, Grid};

/// Destroys the intruder and itself. Unattributed forces are ignored.
pub fn force_enemy(grid: &mut Grid, id: CellId, source: Option<CellId>) {
    let Some(source) = source else {
        return;
    };
    grid.destroy(source);
    grid.destroy(id);
}

/// Destroys the intruder only.
pub fn force_trash(grid: &mut Grid, source: Option<CellId>) {
    if let Some(source) = source {
        grid.destroy(source);
    }
}
