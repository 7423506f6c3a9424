//! Rotators turn every orthogonal neighbor by a fixed amount.

use crate::cell::Direction;
use crate::{CellId, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    fn apply(self, facing: Direction) -> Direction {
        match self {
            Self::Clockwise => facing.rotate_cw(),
            Self::CounterClockwise => facing.rotate_ccw(),
            Self::Half => facing.rotate_180(),
        }
    }
}

pub fn tick_rotator(grid: &mut Grid, id: CellId, turn: Turn) {
    let Some(me) = grid.get(id) else {
        return;
    };
    let center = me.position;
    for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let Some(neighbor) = center.checked_offset(dir.delta()).and_then(|p| grid.cell_at(p)) else {
            continue;
        };
        if let Some(cell) = grid.get_mut(neighbor) {
            let facing = turn.apply(cell.facing);
            cell.rotate(facing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Coord, Variant};

    #[test]
    fn clockwise_turns_all_neighbors() {
        let mut grid = Grid::default();
        let rot = grid.place(Variant::RotatorCw, Coord::ZERO, Direction::Right).unwrap();
        let around: Vec<_> = [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(|(x, y)| grid.place(Variant::Push, Coord::new(x, y), Direction::Right).unwrap())
            .collect();
        tick_rotator(&mut grid, rot, Turn::Clockwise);
        for id in around {
            assert_eq!(grid.get(id).unwrap().facing, Direction::Down);
        }
        assert_eq!(grid.get(rot).unwrap().facing, Direction::Right);
    }

    #[test]
    fn counter_clockwise_and_half_turns() {
        let mut grid = Grid::default();
        let ccw = grid.place(Variant::RotatorCcw, Coord::ZERO, Direction::Right).unwrap();
        let half = grid.place(Variant::Rotator180, Coord::new(10, 0), Direction::Right).unwrap();
        let a = grid.place(Variant::Mover, Coord::new(0, 1), Direction::Right).unwrap();
        let b = grid.place(Variant::Mover, Coord::new(11, 0), Direction::Up).unwrap();
        tick_rotator(&mut grid, ccw, Turn::CounterClockwise);
        tick_rotator(&mut grid, half, Turn::Half);
        assert_eq!(grid.get(a).unwrap().facing, Direction::Up);
        assert_eq!(grid.get(b).unwrap().facing, Direction::Down);
    }

    #[test]
    fn diagonal_cells_are_untouched() {
        let mut grid = Grid::default();
        let rot = grid.place(Variant::RotatorCw, Coord::ZERO, Direction::Right).unwrap();
        let diag = grid.place(Variant::Push, Coord::new(1, 1), Direction::Right).unwrap();
        tick_rotator(&mut grid, rot, Turn::Clockwise);
        assert_eq!(grid.get(diag).unwrap().facing, Direction::Right);
    }

    #[test]
    fn rotation_retargets_render_angle() {
        let mut grid = Grid::default();
        let rot = grid.place(Variant::RotatorCw, Coord::ZERO, Direction::Right).unwrap();
        let n = grid.place(Variant::Push, Coord::new(0, 1), Direction::Right).unwrap();
        tick_rotator(&mut grid, rot, Turn::Clockwise);
        let render = grid.get(n).unwrap().render;
        assert!((render.target_rotation - 270.0).abs() < f32::EPSILON);
        assert!(render.rotation.abs() < f32::EPSILON);
    }
}
