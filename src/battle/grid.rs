//! Cavern terrain grid
//!
//! Fixed at load time, never mutated during a battle.

use serde::{Deserialize, Serialize};

use crate::core::types::Coordinate;

/// Terrain of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Wall,
    OpenCavern,
}

/// Rectangular cavern map, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaveGrid {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

impl CaveGrid {
    /// Build a grid from row-major cells. The loader validates shape first.
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<Terrain>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    /// True for walls and for anything outside the map bounds
    #[inline]
    pub fn is_wall(&self, coord: Coordinate) -> bool {
        if !self.in_bounds(coord) {
            return true;
        }
        self.cells[(coord.y * self.width + coord.x) as usize] == Terrain::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> CaveGrid {
        CaveGrid::from_cells(
            2,
            2,
            vec![
                Terrain::Wall,
                Terrain::OpenCavern,
                Terrain::OpenCavern,
                Terrain::Wall,
            ],
        )
    }

    #[test]
    fn test_wall_lookup() {
        let grid = two_by_two();
        assert!(grid.is_wall(Coordinate::new(0, 0)));
        assert!(!grid.is_wall(Coordinate::new(1, 0)));
        assert!(!grid.is_wall(Coordinate::new(0, 1)));
        assert!(grid.is_wall(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = two_by_two();
        assert!(!grid.in_bounds(Coordinate::new(-1, 0)));
        assert!(!grid.in_bounds(Coordinate::new(0, 2)));
        assert!(grid.is_wall(Coordinate::new(-1, 0)));
        assert!(grid.is_wall(Coordinate::new(2, 1)));
    }
}
