//! One discrete tick: priority passes of act-then-move.

use std::cmp::Reverse;

use crate::cell::{Direction, Variant};
use crate::elements;
use crate::{CellId, Grid};

/// Facing groups in pass order. The order between groups is irrelevant.
const GROUP_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

impl Grid {
    /// Advance the simulation by one tick.
    ///
    /// For each priority level, lowest first, the live cells of that priority
    /// act, then the same cells move. The order is rebuilt per level so cells
    /// created or destroyed by an earlier level are accounted for.
    pub fn tick(&mut self) {
        for priority in 0..=Variant::MAX_PRIORITY {
            let order = self.tick_order(priority);
            if order.is_empty() {
                continue;
            }

            for &id in &order {
                let Some(cell) = self.get_mut(id) else {
                    continue;
                };
                let position = cell.position;
                cell.render.reset_source(position);
                let variant = cell.variant;
                log::trace!("ticking {variant} at {position}");
                elements::tick(variant, self, id);
            }

            for &id in &order {
                self.move_cell(id, None);
            }
        }
    }

    /// Live cells of `priority`, grouped by facing and ordered so the cell
    /// leading in its own travel direction comes first.
    #[must_use]
    pub fn tick_order(&self, priority: u8) -> Vec<CellId> {
        let mut order = Vec::new();
        for facing in GROUP_ORDER {
            let mut group: Vec<_> = self
                .iter()
                .filter(|(_, cell)| cell.facing == facing && cell.variant.priority() == priority)
                .map(|(id, cell)| (id, cell.position))
                .collect();
            match facing {
                Direction::Right => group.sort_by_key(|&(_, pos)| Reverse(pos.x)),
                Direction::Left => group.sort_by_key(|&(_, pos)| pos.x),
                Direction::Up => group.sort_by_key(|&(_, pos)| pos.y),
                Direction::Down => group.sort_by_key(|&(_, pos)| Reverse(pos.y)),
            }
            order.extend(group.into_iter().map(|(id, _)| id));
        }
        order
    }
}
