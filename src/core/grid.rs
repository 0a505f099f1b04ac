//! Grid Positions and Directions
//!
//! Integer tile coordinates on a toroidal grid: stepping off one edge
//! reappears on the opposite edge. All movement is in whole tiles.

use serde::{Deserialize, Serialize};

use crate::{GRID_H, GRID_W};

/// A tile position on the playable grid.
///
/// Invariant: `0 <= x < GRID_W` and `0 <= y < GRID_H` for every position
/// produced by [`GridPos::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, 0-based from the left
    pub x: i32,
    /// Row, 0-based from the top
    pub y: i32,
}

impl GridPos {
    /// Create a position from raw coordinates (not wrapped).
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid center, where the snake starts.
    pub const fn center() -> Self {
        Self {
            x: GRID_W / 2,
            y: GRID_H / 2,
        }
    }

    /// Move one tile in `dir`, wrapping at the grid edges.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: (self.x + dx).rem_euclid(GRID_W),
            y: (self.y + dy).rem_euclid(GRID_H),
        }
    }
}

/// One of the four snake movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// (0, -1)
    Up = 0,
    /// (0, 1)
    Down = 1,
    /// (-1, 0)
    Left = 2,
    /// (1, 0)
    Right = 3,
}

impl Direction {
    /// Unit offset as `(dx, dy)` in grid coordinates (y grows downward).
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact 180° reverse of this direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_wraps_all_edges() {
        let top = GridPos::new(5, 0).step(Direction::Up);
        assert_eq!(top, GridPos::new(5, GRID_H - 1));

        let bottom = GridPos::new(5, GRID_H - 1).step(Direction::Down);
        assert_eq!(bottom, GridPos::new(5, 0));

        let left = GridPos::new(0, 5).step(Direction::Left);
        assert_eq!(left, GridPos::new(GRID_W - 1, 5));

        let right = GridPos::new(GRID_W - 1, 5).step(Direction::Right);
        assert_eq!(right, GridPos::new(0, 5));
    }

    #[test]
    fn test_corner_wrap() {
        let p = GridPos::new(0, 0)
            .step(Direction::Up)
            .step(Direction::Left);
        assert_eq!(p, GridPos::new(GRID_W - 1, GRID_H - 1));
    }

    #[test]
    fn test_opposites() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    proptest! {
        #[test]
        fn prop_step_stays_in_bounds(
            x in 0..GRID_W,
            y in 0..GRID_H,
            dirs in proptest::collection::vec(0u8..4, 0..64),
        ) {
            let mut pos = GridPos::new(x, y);
            for d in dirs {
                let dir = match d {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    2 => Direction::Left,
                    _ => Direction::Right,
                };
                pos = pos.step(dir);
                prop_assert!(pos.x >= 0 && pos.x < GRID_W);
                prop_assert!(pos.y >= 0 && pos.y < GRID_H);
            }
        }
    }
}
