//! Discrete-grid cell automaton engine.

pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod force;
pub mod scheduler;
pub mod sim;
pub mod snapshot;
pub mod universe;

use std::collections::HashMap;

use cell::{Cell, Coord, Direction, Variant};
use config::Bounds;
use slotmap::{new_key_type, SlotMap};
use snapshot::Snapshot;

new_key_type! {
    /// Stable handle for a live cell. Invalidated when the cell is destroyed.
    pub struct CellId;
}

/// Authoritative store of live cells. At most one indexed cell per coordinate.
///
/// A generator's fresh duplicate is briefly *detached*: it lives in the arena
/// but not in the occupancy index until it moves off the generator.
#[derive(Debug)]
pub struct Grid {
    bounds: Bounds,
    cells: SlotMap<CellId, Cell>,
    occupancy: HashMap<Coord, CellId>,
    snapshots: Vec<Snapshot>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

impl Grid {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: SlotMap::with_key(),
            occupancy: HashMap::new(),
            snapshots: Vec::new(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn is_in_bounds(&self, point: Coord) -> bool {
        self.bounds.contains(point)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cell_at(&self, point: Coord) -> Option<CellId> {
        self.occupancy.get(&point).copied()
    }

    #[must_use]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    #[must_use]
    pub fn get_at(&self, point: Coord) -> Option<&Cell> {
        self.cell_at(point).and_then(|id| self.cells.get(id))
    }

    #[must_use]
    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(id)
    }

    pub(crate) fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter()
    }

    /// Place a fresh cell. Returns `None` if the spot is taken or out of bounds.
    pub fn place(&mut self, variant: Variant, point: Coord, facing: Direction) -> Option<CellId> {
        if self.occupancy.contains_key(&point) || !self.is_in_bounds(point) {
            return None;
        }
        Some(self.insert(Cell::new(variant, point, facing)))
    }

    /// Remove whatever occupies `point`.
    pub fn remove(&mut self, point: Coord) -> Option<Cell> {
        let id = self.cell_at(point)?;
        self.destroy(id)
    }

    /// Remove a cell from the arena. Detached cells leave the index untouched.
    pub fn destroy(&mut self, id: CellId) -> Option<Cell> {
        let cell = self.cells.remove(id)?;
        if self.occupancy.get(&cell.position) == Some(&id) {
            self.occupancy.remove(&cell.position);
        }
        log::debug!("destroyed {cell}");
        Some(cell)
    }

    /// Drop every live cell. The snapshot stack is kept.
    pub fn clear_all(&mut self) {
        self.cells.clear();
        self.occupancy.clear();
    }

    /// Index a cell at its own position.
    ///
    /// # Panics
    /// If another cell already occupies that position.
    pub(crate) fn insert(&mut self, cell: Cell) -> CellId {
        let position = cell.position;
        assert!(
            !self.occupancy.contains_key(&position),
            "double occupancy at {position}"
        );
        let id = self.cells.insert(cell);
        self.occupancy.insert(position, id);
        id
    }

    pub(crate) fn insert_detached(&mut self, cell: Cell) -> CellId {
        self.cells.insert(cell)
    }

    /// Move a cell's index entry to `to` and update its position.
    ///
    /// # Panics
    /// If a different cell already occupies `to`.
    pub(crate) fn relocate(&mut self, id: CellId, to: Coord) {
        let Some(cell) = self.cells.get_mut(id) else {
            return;
        };
        let from = cell.position;
        if let Some(&occupant) = self.occupancy.get(&to) {
            assert!(occupant == id, "double occupancy at {to}");
        }
        if self.occupancy.get(&from) == Some(&id) {
            self.occupancy.remove(&from);
        }
        cell.position = to;
        self.occupancy.insert(to, id);
    }
}
