use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Randomness, Tile};

/// Which tile to play when several tiles in a hand fit the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The first playable tile, in the order the tiles were received.
    First,
    /// A playable tile chosen uniformly at random.
    #[default]
    Random,
}

/// The error type for the [`FromStr`] instance of [`TieBreak`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TieBreakFromStrErr(pub String);

impl std::error::Error for TieBreakFromStrErr {}

impl std::fmt::Display for TieBreakFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown tie-break policy '{}', expected 'first' or 'random'",
            self.0
        )
    }
}

impl FromStr for TieBreak {
    type Err = TieBreakFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(TieBreak::First),
            "random" => Ok(TieBreak::Random),
            _ => Err(TieBreakFromStrErr(String::from(s))),
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::First => write!(f, "first"),
            TieBreak::Random => write!(f, "random"),
        }
    }
}

/// The tiles held by one player, in the order they were received.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    tiles: Vec<Tile>,
}

fn fits(tile: &Tile, edges: [u8; 2]) -> bool {
    tile.contains(edges[0]) || tile.contains(edges[1])
}

impl Hand {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn insert_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Whether any tile can be played against one of the open `edges`.
    pub fn has_tile(&self, edges: [u8; 2]) -> bool {
        self.tiles.iter().any(|tile| fits(tile, edges))
    }

    /// Removes the first tile that can be played against `edges`.
    pub fn take_first(&mut self, edges: [u8; 2]) -> Option<Tile> {
        let idx = self.tiles.iter().position(|tile| fits(tile, edges))?;
        Some(self.tiles.remove(idx))
    }

    /// Removes a tile chosen uniformly among those that can be played against `edges`.
    pub fn take_random(
        &mut self,
        edges: [u8; 2],
        randomness: &mut impl Randomness,
    ) -> Option<Tile> {
        let playable: Vec<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| fits(tile, edges))
            .map(|(idx, _)| idx)
            .collect();
        if playable.is_empty() {
            return None;
        }
        let idx = playable[randomness.index(playable.len())];
        Some(self.tiles.remove(idx))
    }

    /// Removes a playable tile according to the `tie_break` policy.
    pub fn take(
        &mut self,
        edges: [u8; 2],
        tie_break: TieBreak,
        randomness: &mut impl Randomness,
    ) -> Option<Tile> {
        match tie_break {
            TieBreak::First => self.take_first(edges),
            TieBreak::Random => self.take_random(edges, randomness),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// The total number of pips in the hand.
    pub fn pips(&self) -> u32 {
        self.tiles.iter().map(|tile| u32::from(tile.pips())).sum()
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, " {}", tile)?;
        }
        Ok(())
    }
}
