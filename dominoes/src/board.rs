use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Tile;

/// One of the two open ends of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Left,
    Right,
}

/// The chain of tiles played so far.
///
/// A board always holds at least one tile, and the touching faces of
/// neighbouring tiles are equal: for every pair `a b` in the chain,
/// `a.right() == b.left()`.
#[derive(Clone, Debug)]
pub struct Board {
    path: VecDeque<Tile>,
}

impl Board {
    /// Starts a board with a single tile.
    pub fn new(seed: Tile) -> Self {
        Self {
            path: VecDeque::from([seed]),
        }
    }

    /// The open values at the left and right end, in that order.
    pub fn edges(&self) -> [u8; 2] {
        [self.left().left(), self.right().right()]
    }

    /// Prepends a tile. Its right face must match the left edge.
    pub fn insert_left(&mut self, tile: Tile) {
        debug_assert_eq!(tile.right(), self.edges()[0], "{} does not fit {}", tile, self);
        self.path.push_front(tile);
    }

    /// Appends a tile. Its left face must match the right edge.
    pub fn insert_right(&mut self, tile: Tile) {
        debug_assert_eq!(tile.left(), self.edges()[1], "{} does not fit {}", tile, self);
        self.path.push_back(tile);
    }

    pub fn insert(&mut self, end: End, tile: Tile) {
        match end {
            End::Left => self.insert_left(tile),
            End::Right => self.insert_right(tile),
        }
    }

    /// The tile at the left end.
    pub fn left(&self) -> &Tile {
        &self.path[0]
    }

    /// The tile at the right end.
    pub fn right(&self) -> &Tile {
        &self.path[self.path.len() - 1]
    }

    /// The tile at the given end.
    pub fn end(&self, end: End) -> &Tile {
        match end {
            End::Left => self.left(),
            End::Right => self.right(),
        }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Tile> {
        self.path.iter()
    }

    /// Checks that every pair of neighbouring tiles touches with equal faces.
    pub fn is_connected(&self) -> bool {
        self.path
            .iter()
            .zip(self.path.iter().skip(1))
            .all(|(a, b)| a.right() == b.left())
    }

    /// The tiles from left to right.
    pub fn to_tiles(&self) -> Vec<Tile> {
        self.path.iter().cloned().collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.path {
            write!(f, " {}", tile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    #[test]
    fn single_tile_edges() {
        let board = Board::new(tile!("<1:2>"));
        assert_eq!(board.edges(), [1, 2]);
        assert_eq!(board.left(), board.right());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn grows_at_both_ends() {
        let mut board = Board::new(tile!("<2:2>"));
        board.insert_right(tile!("<2:6>"));
        board.insert_left(tile!("<4:2>"));
        board.insert(End::Right, tile!("<6:0>"));
        assert_eq!(board.edges(), [4, 0]);
        assert_eq!(*board.end(End::Left), tile!("<4:2>"));
        assert_eq!(*board.right(), tile!("<6:0>"));
        assert!(board.is_connected());
        assert_eq!(board.to_string(), " <4:2> <2:2> <2:6> <6:0>");
        assert_eq!(board.to_tiles().len(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn rejects_mismatched_tile_in_debug_builds() {
        let mut board = Board::new(tile!("<1:2>"));
        board.insert_right(tile!("<3:2>"));
    }
}
