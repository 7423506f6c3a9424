//! Per-variant behavior dispatched from the scheduler and the push cascade.

mod generator;
mod hazard;
mod mover;
mod rotator;
mod slide;

use crate::cell::{Coord, Variant};
use crate::{CellId, Grid};

/// Run the act-phase behavior of `id`.
///
/// Wall, Push, Slide, Enemy and Trash have nothing to do here.
pub fn tick(variant: Variant, grid: &mut Grid, id: CellId) {
    match variant {
        Variant::Mover => mover::tick_mover(grid, id),
        Variant::Generator => generator::tick_generator(grid, id),
        Variant::RotatorCw => rotator::tick_rotator(grid, id, rotator::Turn::Clockwise),
        Variant::RotatorCcw => rotator::tick_rotator(grid, id, rotator::Turn::CounterClockwise),
        Variant::Rotator180 => rotator::tick_rotator(grid, id, rotator::Turn::Half),
        Variant::Wall | Variant::Push | Variant::Slide | Variant::Enemy | Variant::Trash => {}
    }
}

/// React to `source` (or an unattributed force) pushing `id` by `force`.
pub fn apply_force(
    variant: Variant,
    grid: &mut Grid,
    id: CellId,
    force: Coord,
    source: Option<CellId>,
) {
    match variant {
        Variant::Wall => {}
        Variant::Slide => slide::force_slide(grid, id, force),
        Variant::Enemy => hazard::force_enemy(grid, id, source),
        Variant::Trash => hazard::force_trash(grid, source),
        Variant::Mover
        | Variant::Generator
        | Variant::RotatorCw
        | Variant::RotatorCcw
        | Variant::Rotator180
        | Variant::Push => grid.push(id, force),
    }
}
