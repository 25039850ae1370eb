use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidTileValue;

/// The highest face value in a double-six set.
pub const MAX_PIPS: u8 = 6;

/// A domino tile.
///
/// The faces are ordered: `left` is the face that points towards the left end
/// of the board once the tile has been played, and [`Tile::turn()`] swaps them.
/// Tiles are moved between the deck, the hands and the board, so the type is
/// `Clone` but not `Copy`.
///
/// Serialized as a two-element array `[left, right]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    pub fn new(left: u8, right: u8) -> Result<Self, InvalidTileValue> {
        for value in [left, right] {
            if value > MAX_PIPS {
                return Err(InvalidTileValue { value });
            }
        }
        Ok(Self { left, right })
    }

    pub(crate) fn new_unchecked(left: u8, right: u8) -> Self {
        debug_assert!(left <= MAX_PIPS && right <= MAX_PIPS);
        Self { left, right }
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    /// Whether either face shows `value`.
    pub fn contains(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Flips the tile, swapping its left and right faces.
    pub fn turn(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// The total number of pips on the tile.
    pub fn pips(&self) -> u8 {
        self.left + self.right
    }

    /// Whether both tiles are the same piece of the set, regardless of orientation.
    pub fn same_piece(&self, other: &Tile) -> bool {
        self.canonical() == other.canonical()
    }

    /// The faces ordered as `(low, high)`.
    pub fn canonical(&self) -> (u8, u8) {
        (self.left.min(self.right), self.left.max(self.right))
    }

    /// Render this tile as a Unicode horizontal domino character
    pub fn unicode_char(&self) -> char {
        // https://en.wikipedia.org/wiki/Domino_Tiles
        let codepoint = 0x1F031 + 7 * u32::from(self.left) + u32::from(self.right);
        char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}:{}>", self.left, self.right)
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = InvalidTileValue;

    fn try_from((left, right): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::new(left, right)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        (tile.left, tile.right)
    }
}

/// The error type for the [`FromStr`] instance of [`Tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFromStrErr {
    MissingSeparator,
    NotANumber,
    InvalidValue(InvalidTileValue),
}

impl std::error::Error for TileFromStrErr {}

impl std::fmt::Display for TileFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileFromStrErr::MissingSeparator => write!(f, "Expected two faces separated by ':'"),
            TileFromStrErr::NotANumber => write!(f, "A face of the tile is not a number"),
            TileFromStrErr::InvalidValue(err) => write!(f, "{}", err),
        }
    }
}

impl FromStr for Tile {
    type Err = TileFromStrErr;

    /// Accepts both `<3:5>` and `3:5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(s);
        let (left, right) = s.split_once(':').ok_or(TileFromStrErr::MissingSeparator)?;
        let left = left.trim().parse().map_err(|_| TileFromStrErr::NotANumber)?;
        let right = right.trim().parse().map_err(|_| TileFromStrErr::NotANumber)?;
        Tile::new(left, right).map_err(TileFromStrErr::InvalidValue)
    }
}

/// Shorthand for creating tiles from a string.
///
/// This macro is just calling the [`FromStr`] instance of [`Tile`].
/// ```
/// # use dominoes::{tile, Tile};
/// assert_eq!(tile!("<2:5>"), Tile::new(2, 5).unwrap());
/// ```
#[macro_export]
macro_rules! tile {
    ($s:literal) => {
        <$crate::Tile as std::str::FromStr>::from_str($s)
            .expect("Invalid tile code given to tile! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use tile;
