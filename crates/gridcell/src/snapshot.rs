//! Grid snapshots for play/stop rollback and save files.
//!
//! The persisted layout is a JSON array of `{ "type", "x", "y", "dir" }`
//! records. `type` indexes [`Variant::ALL`] and `dir` indexes
//! [`Direction::ALL`], so both registration orders are part of the format.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Coord, Direction, Variant};
use crate::config::Bounds;
use crate::error::SnapshotError;
use crate::Grid;

/// One persisted cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(rename = "type")]
    pub type_index: u8,
    pub x: i32,
    pub y: i32,
    #[serde(rename = "dir")]
    pub dir_index: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Entry {
    variant: Variant,
    position: Coord,
    facing: Direction,
}

impl From<Entry> for CellRecord {
    fn from(entry: Entry) -> Self {
        Self {
            type_index: entry.variant.index(),
            x: entry.position.x,
            y: entry.position.y,
            dir_index: entry.facing.index(),
        }
    }
}

impl TryFrom<CellRecord> for Entry {
    type Error = SnapshotError;

    fn try_from(record: CellRecord) -> Result<Self, SnapshotError> {
        let variant = Variant::from_index(record.type_index).ok_or(SnapshotError::UnknownVariant {
            index: record.type_index,
        })?;
        let facing = Direction::from_index(record.dir_index).ok_or(SnapshotError::UnknownDirection {
            index: record.dir_index,
        })?;
        Ok(Self {
            variant,
            position: Coord::new(record.x, record.y),
            facing,
        })
    }
}

/// Validated, ordered list of cells. Restoring one never fails.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellRecord>", into = "Vec<CellRecord>")]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl TryFrom<Vec<CellRecord>> for Snapshot {
    type Error = SnapshotError;

    fn try_from(records: Vec<CellRecord>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let entry = Entry::try_from(record)?;
            if !seen.insert(entry.position) {
                return Err(SnapshotError::Overlap {
                    x: record.x,
                    y: record.y,
                });
            }
            entries.push(entry);
        }
        Ok(Self { entries })
    }
}

impl From<Snapshot> for Vec<CellRecord> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.records()
    }
}

impl Snapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> Vec<CellRecord> {
        self.entries.iter().copied().map(CellRecord::from).collect()
    }

    /// # Errors
    /// [`SnapshotError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    /// [`SnapshotError::Json`] for malformed JSON, unknown indices or
    /// overlapping records.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every record lies inside `bounds`.
    ///
    /// # Errors
    /// [`SnapshotError::OutOfBounds`] naming the first offending record.
    pub fn check_bounds(&self, bounds: &Bounds) -> Result<(), SnapshotError> {
        match self.entries.iter().find(|entry| !bounds.contains(entry.position)) {
            Some(entry) => Err(SnapshotError::OutOfBounds {
                x: entry.position.x,
                y: entry.position.y,
            }),
            None => Ok(()),
        }
    }
}

impl Grid {
    /// Record every live cell, in arena order.
    #[must_use]
    pub fn save_snapshot(&self) -> Snapshot {
        let entries = self
            .iter()
            .map(|(_, cell)| Entry {
                variant: cell.variant,
                position: cell.position,
                facing: cell.facing,
            })
            .collect();
        Snapshot { entries }
    }

    /// Replace the grid contents with fresh cells built from `snapshot`.
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) {
        self.clear_all();
        for entry in &snapshot.entries {
            self.insert(Cell::new(entry.variant, entry.position, entry.facing));
        }
    }

    pub fn push_snapshot(&mut self) {
        let snapshot = self.save_snapshot();
        self.snapshots.push(snapshot);
    }

    /// Restore the most recently pushed snapshot.
    ///
    /// # Panics
    /// If no snapshot was pushed.
    pub fn pop_snapshot(&mut self) {
        let Some(snapshot) = self.snapshots.pop() else {
            panic!("pop_snapshot without a matching push_snapshot");
        };
        self.load_snapshot(&snapshot);
    }

    #[must_use]
    pub fn snapshot_depth(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn contents(grid: &Grid) -> HashSet<(Variant, Coord, Direction)> {
        grid.iter()
            .map(|(_, c)| (c.variant, c.position, c.facing))
            .collect()
    }

    #[test]
    fn json_layout_uses_type_and_dir_keys() {
        let mut grid = Grid::default();
        grid.place(Variant::Slide, Coord::new(2, -3), Direction::Left);
        let json = grid.save_snapshot().to_json().unwrap();
        assert_eq!(json, r#"[{"type":7,"x":2,"y":-3,"dir":2}]"#);
    }

    #[test]
    fn from_json_rejects_unknown_indices() {
        assert!(matches!(
            Snapshot::from_json(r#"[{"type":10,"x":0,"y":0,"dir":0}]"#),
            Err(SnapshotError::Json(_))
        ));
        assert!(matches!(
            Snapshot::try_from(vec![CellRecord { type_index: 0, x: 0, y: 0, dir_index: 4 }]),
            Err(SnapshotError::UnknownDirection { index: 4 })
        ));
        assert!(matches!(
            Snapshot::try_from(vec![CellRecord { type_index: 12, x: 0, y: 0, dir_index: 0 }]),
            Err(SnapshotError::UnknownVariant { index: 12 })
        ));
    }

    #[test]
    fn from_records_rejects_overlap() {
        let record = CellRecord { type_index: 0, x: 1, y: 1, dir_index: 0 };
        assert!(matches!(
            Snapshot::try_from(vec![record, record]),
            Err(SnapshotError::Overlap { x: 1, y: 1 })
        ));
    }

    #[test]
    fn check_bounds_names_first_stray_record() {
        let snapshot = Snapshot::from_json(
            r#"[{"type":0,"x":1,"y":1,"dir":0},{"type":0,"x":3,"y":9,"dir":0},{"type":0,"x":-4,"y":0,"dir":0}]"#,
        )
        .unwrap();
        assert!(snapshot.check_bounds(&Bounds::square(-10, 10)).is_ok());
        assert!(matches!(
            snapshot.check_bounds(&Bounds::square(0, 5)),
            Err(SnapshotError::OutOfBounds { x: 3, y: 9 })
        ));
        assert!(snapshot.check_bounds(&Bounds::unbounded()).is_ok());
    }

    #[test]
    fn load_resets_transient_state() {
        let mut grid = Grid::default();
        let id = grid.place(Variant::Push, Coord::ZERO, Direction::Right).unwrap();
        grid.move_cell(id, Some(Coord::new(1, 0)));
        let snapshot = grid.save_snapshot();
        grid.load_snapshot(&snapshot);
        let cell = grid.get_at(Coord::new(1, 0)).unwrap();
        assert_eq!(cell.velocity, Coord::ZERO);
        assert!((cell.render.t - 1.0).abs() < f32::EPSILON);
        assert_eq!(cell.render.from, (1.0, 0.0));
    }

    #[test]
    fn push_pop_restores_pre_run_state() {
        let mut grid = Grid::default();
        grid.place(Variant::Mover, Coord::ZERO, Direction::Right);
        grid.place(Variant::Push, Coord::new(1, 0), Direction::Right);
        let before = contents(&grid);

        grid.push_snapshot();
        for _ in 0..5 {
            grid.tick();
        }
        assert_ne!(contents(&grid), before);
        grid.pop_snapshot();
        assert_eq!(contents(&grid), before);
        assert_eq!(grid.snapshot_depth(), 0);
    }

    #[test]
    fn clear_keeps_snapshot_stack() {
        let mut grid = Grid::default();
        grid.place(Variant::Wall, Coord::ZERO, Direction::Up);
        grid.push_snapshot();
        grid.clear_all();
        assert_eq!(grid.snapshot_depth(), 1);
        grid.pop_snapshot();
        assert_eq!(grid.len(), 1);
    }

    #[test]
    #[should_panic(expected = "pop_snapshot without a matching push_snapshot")]
    fn pop_on_empty_stack_panics() {
        Grid::default().pop_snapshot();
    }

    fn arb_record() -> impl Strategy<Value = CellRecord> {
        (0u8..10, -50i32..=50, -50i32..=50, 0u8..4).prop_map(|(type_index, x, y, dir_index)| {
            CellRecord { type_index, x, y, dir_index }
        })
    }

    proptest! {
        #[test]
        fn prop_load_save_preserves_cell_set(
            records in proptest::collection::vec(arb_record(), 0..80),
        ) {
            let mut grid = Grid::default();
            for r in &records {
                grid.place(
                    Variant::from_index(r.type_index).unwrap(),
                    Coord::new(r.x, r.y),
                    Direction::from_index(r.dir_index).unwrap(),
                );
            }
            let before = contents(&grid);
            let json = grid.save_snapshot().to_json().unwrap();

            let mut restored = Grid::default();
            restored.load_snapshot(&Snapshot::from_json(&json).unwrap());
            prop_assert_eq!(contents(&restored), before);
        }
    }
}
