use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::Building;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TreeType {
    #[default]
    None,
    Deciduous,
    Conifer,
    Palm,
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub building: Option<Building>,
    pub trees: u8,
    pub tree_type: TreeType,
    pub is_park: bool,
    pub has_road: bool,
}

impl Cell {
    /// Remove all vegetation from the cell (trees and park designation).
    pub fn clear_vegetation(&mut self) {
        self.trees = 0;
        self.tree_type = TreeType::None;
        self.is_park = false;
    }

    /// A cell can catch fire from a neighbor if it holds fuel: a building or trees.
    pub fn is_flammable(&self) -> bool {
        self.building.is_some() || self.trees > 0
    }
}

#[derive(Resource)]
pub struct WorldGrid {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new(crate::config::GRID_WIDTH, crate::config::GRID_HEIGHT)
    }
}

impl WorldGrid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "WorldGrid must have a non-zero area, got {}x{}",
            width,
            height
        );
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Bounds check for signed coordinates (epicenters and neighbor offsets).
    #[inline]
    pub fn in_bounds_i32(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.in_bounds(x as usize, y as usize)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Like [`WorldGrid::get`] but returns `None` for off-grid coordinates
    /// instead of panicking.
    pub fn get_checked(&self, x: i32, y: i32) -> Option<&Cell> {
        if !self.in_bounds_i32(x, y) {
            return None;
        }
        self.cells.get(self.index(x as usize, y as usize))
    }

    pub fn get_checked_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if !self.in_bounds_i32(x, y) {
            return None;
        }
        let idx = self.index(x as usize, y as usize);
        self.cells.get_mut(idx)
    }

    /// Returns up to 4 cardinal neighbors and the count of valid entries.
    /// Order is fixed: west, east, north, south.
    /// Use `&result[..count]` to iterate over valid neighbors.
    pub fn neighbors4(&self, x: i32, y: i32) -> ([(i32, i32); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
            if self.in_bounds_i32(nx, ny) {
                result[count] = (nx, ny);
                count += 1;
            }
        }
        (result, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn test_out_of_bounds() {
        let grid = WorldGrid::new(GRID_WIDTH, GRID_HEIGHT);
        assert!(!grid.in_bounds(GRID_WIDTH, 0));
        assert!(!grid.in_bounds(0, GRID_HEIGHT));
        assert!(!grid.in_bounds_i32(-1, 5));
        assert!(grid.get_checked(-1, 0).is_none());
        assert!(grid.get_checked(0, 0).is_some());
    }

    #[test]
    fn test_neighbors() {
        let grid = WorldGrid::new(GRID_WIDTH, GRID_HEIGHT);
        assert_eq!(grid.neighbors4(0, 0).1, 2);
        assert_eq!(grid.neighbors4(128, 128).1, 4);
        assert_eq!(grid.neighbors4(255, 255).1, 2);
    }

    #[test]
    fn test_neighbors_fixed_order() {
        let grid = WorldGrid::new(8, 8);
        let (n, count) = grid.neighbors4(3, 3);
        assert_eq!(&n[..count], &[(2, 3), (4, 3), (3, 2), (3, 4)]);
    }

    #[test]
    fn test_clear_vegetation() {
        let mut cell = Cell {
            trees: 4,
            tree_type: TreeType::Conifer,
            is_park: true,
            ..Default::default()
        };
        assert!(cell.is_flammable());
        cell.clear_vegetation();
        assert_eq!(cell.trees, 0);
        assert_eq!(cell.tree_type, TreeType::None);
        assert!(!cell.is_park);
        assert!(!cell.is_flammable());
    }

    #[test]
    #[should_panic(expected = "non-zero area")]
    fn test_zero_area_grid_rejected() {
        let _ = WorldGrid::new(0, 10);
    }
}
