//! Mover: clears its path, then always tries to step forward.

use crate::{CellId, Grid};

pub fn tick_mover(grid: &mut Grid, id: CellId) {
    let Some(me) = grid.get(id) else {
        return;
    };
    let ahead = me.facing.delta();
    if let Some(front) = me.position.checked_offset(ahead).and_then(|p| grid.cell_at(p)) {
        grid.apply_force(front, ahead, Some(id));
    }
    // The mover may have hit an enemy while clearing its path.
    if let Some(me) = grid.get_mut(id) {
        me.velocity += ahead;
    }
}
