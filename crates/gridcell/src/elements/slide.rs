//! Slide: pushable only along its own axis.

use crate::cell::Coord;
use crate::{CellId, Grid};

pub fn force_slide(grid: &mut Grid, id: CellId, force: Coord) {
    let Some(me) = grid.get(id) else {
        return;
    };
    if me.facing.is_parallel(force) {
        grid.push(id, force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Direction, Variant};

    #[test]
    fn slide_moves_along_axis_both_ways() {
        let mut grid = Grid::default();
        let slide = grid.place(Variant::Slide, Coord::ZERO, Direction::Right).unwrap();
        force_slide(&mut grid, slide, Coord::new(1, 0));
        assert_eq!(grid.get(slide).unwrap().position, Coord::new(1, 0));
        force_slide(&mut grid, slide, Coord::new(-1, 0));
        assert_eq!(grid.get(slide).unwrap().position, Coord::ZERO);
    }

    #[test]
    fn slide_refuses_cross_axis_push() {
        let mut grid = Grid::default();
        let slide = grid.place(Variant::Slide, Coord::ZERO, Direction::Right).unwrap();
        force_slide(&mut grid, slide, Coord::new(0, 1));
        force_slide(&mut grid, slide, Coord::new(0, -1));
        assert_eq!(grid.get(slide).unwrap().position, Coord::ZERO);
    }
}
