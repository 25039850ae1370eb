use crate::{Randomness, Tile, MAX_PIPS};

/// The number of tiles in a double-six set.
pub const SET_SIZE: usize = 28;

/// The pool of tiles that have not been dealt or drawn yet.
#[derive(Clone, Debug)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// A complete double-six set, ordered `<0:0> <0:1> ... <5:6> <6:6>`.
    pub fn new() -> Self {
        let mut tiles = Vec::with_capacity(SET_SIZE);
        for left in 0..=MAX_PIPS {
            for right in left..=MAX_PIPS {
                tiles.push(Tile::new_unchecked(left, right));
            }
        }
        Self { tiles }
    }

    /// Shuffles the deck by repeatedly extracting a random remaining tile.
    pub fn shuffle(&mut self, randomness: &mut impl Randomness) {
        let mut shuffled = Vec::with_capacity(self.tiles.len());
        while !self.tiles.is_empty() {
            let idx = randomness.index(self.tiles.len());
            shuffled.push(self.tiles.remove(idx));
        }
        self.tiles = shuffled;
    }

    /// Removes the tile at the end of the deck.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// A deck that draws the given tiles from the end.
    #[cfg(test)]
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, " {}", tile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::randomness::Scripted;
    use crate::tile;

    fn pieces(deck: &Deck) -> BTreeSet<(u8, u8)> {
        deck.iter().map(Tile::canonical).collect()
    }

    quickcheck! {
        fn shuffle_is_a_permutation(seed: u64) -> bool {
            let mut deck = Deck::new();
            deck.shuffle(&mut StdRng::seed_from_u64(seed));
            deck.len() == SET_SIZE && pieces(&deck) == pieces(&Deck::new())
        }
    }

    #[test]
    fn full_double_six_set() {
        let deck = Deck::new();
        assert_eq!(deck.len(), SET_SIZE);
        assert_eq!(pieces(&deck).len(), SET_SIZE);
        assert!(deck.iter().all(|t| t.left() <= t.right() && t.right() <= MAX_PIPS));
        let tiles: Vec<&Tile> = deck.iter().collect();
        assert_eq!(*tiles[0], tile!("<0:0>"));
        assert_eq!(*tiles[1], tile!("<0:1>"));
        assert_eq!(*tiles[7], tile!("<1:1>"));
        assert_eq!(*tiles[27], tile!("<6:6>"));
    }

    #[test]
    fn shuffle_extracts_the_chosen_tiles_in_order() {
        let mut deck = Deck::new();
        // Take the last tile, then the first remaining one, then index 0 forever.
        deck.shuffle(&mut Scripted::new([27, 0]));
        let order: Vec<String> = deck.iter().take(3).map(|t| t.to_string()).collect();
        assert_eq!(order, ["<6:6>", "<0:0>", "<0:1>"]);
        assert_eq!(deck.iter().last(), Some(&tile!("<5:6>")));
    }

    #[test]
    fn draws_from_the_end_until_empty() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Some(tile!("<6:6>")));
        assert_eq!(deck.draw(), Some(tile!("<5:6>")));
        while deck.draw().is_some() {}
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
