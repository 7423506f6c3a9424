//! Push-chain resolution and the move step.
//!
//! A push is a query followed by a cascade: [`Grid::can_move`] walks the line
//! of cells ahead without mutating anything, and only if the whole line can
//! shift does the pushed cell call [`Grid::move_cell`], which in turn pushes
//! its own occupant, one link at a time.

use std::collections::HashSet;

use crate::cell::Coord;
use crate::elements;
use crate::{CellId, Grid};

impl Grid {
    /// Whether `id` and every cell in line ahead of it can shift by `force`.
    ///
    /// Immovable cells further down the line are not consulted here; they
    /// refuse later, during the cascade.
    #[must_use]
    pub fn can_move(&self, id: CellId, force: Coord) -> bool {
        let mut visited = HashSet::new();
        self.can_move_from(id, force, &mut visited)
    }

    fn can_move_from(&self, id: CellId, force: Coord, visited: &mut HashSet<CellId>) -> bool {
        if !visited.insert(id) {
            return false;
        }
        let Some(cell) = self.get(id) else {
            return false;
        };
        let Some(next) = cell.position.checked_offset(force) else {
            return false;
        };
        if !self.is_in_bounds(next) {
            return false;
        }
        match self.cell_at(next) {
            None => true,
            Some(occupant) => self.can_move_from(occupant, force, visited),
        }
    }

    /// Ask `id` to yield to `force`, dispatching on its variant.
    ///
    /// `source` is the cell moving into `id`, if any.
    pub fn apply_force(&mut self, id: CellId, force: Coord, source: Option<CellId>) {
        let Some(variant) = self.get(id).map(|cell| cell.variant) else {
            return;
        };
        elements::apply_force(variant, self, id, force, source);
    }

    /// Pushable behavior shared by most variants.
    pub(crate) fn push(&mut self, id: CellId, force: Coord) {
        if force.is_zero() || !self.can_move(id, force) {
            return;
        }
        self.move_cell(id, Some(force));
    }

    /// Shift `id` by `velocity`, or by its pending velocity if `None`.
    ///
    /// Pending velocity is cleared first in both cases. Returns whether the
    /// cell ended up at the new position.
    pub fn move_cell(&mut self, id: CellId, velocity: Option<Coord>) -> bool {
        let Some(cell) = self.get_mut(id) else {
            return false;
        };
        let velocity = velocity.unwrap_or(cell.velocity);
        cell.velocity = Coord::ZERO;
        if velocity.is_zero() {
            return false;
        }
        cell.render.settle();
        let from = cell.position;
        let Some(target) = from.checked_offset(velocity) else {
            return false;
        };

        if let Some(occupant) = self.cell_at(target) {
            self.apply_force(occupant, velocity, Some(id));
            // Trash and Enemy may have consumed the mover.
            if !self.contains(id) || self.cell_at(target).is_some() {
                return false;
            }
        }
        if !self.is_in_bounds(target) {
            return false;
        }

        if let Some(cell) = self.get_mut(id) {
            cell.render.begin_move(from, target);
        }
        self.relocate(id, target);
        log::trace!("moved {from} -> {target}");
        true
    }
}
