//! Generator: copies the cell behind it and pushes the copy out the front.
//!
//! The copy starts detached at the generator's own position. If it cannot be
//! pushed off that spot it is discarded; a generator never overwrites itself.

use crate::{CellId, Grid};

pub fn tick_generator(grid: &mut Grid, id: CellId) {
    let Some(me) = grid.get(id) else {
        return;
    };
    let home = me.position;
    let facing = me.facing;
    let Some(source) = home
        .checked_offset(-facing.delta())
        .and_then(|behind| grid.get_at(behind))
    else {
        return;
    };

    let mut copy = source.shallow_copy();
    copy.position = home;
    let copy_id = grid.insert_detached(copy);
    log::debug!("generator at {home} copied {copy}");

    grid.apply_force(copy_id, facing.delta(), None);

    if grid.get(copy_id).is_some_and(|cell| cell.position == home) {
        grid.destroy(copy_id);
    }
}
