use crate::MAX_PIPS;

/// The error type for [`Tile::new()`](crate::Tile::new), i.e. for a face value outside `0..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidTileValue {
    pub value: u8,
}

impl std::error::Error for InvalidTileValue {}

impl std::fmt::Display for InvalidTileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A tile face can show between 0 and {} pips, but {} was given",
            MAX_PIPS, self.value
        )
    }
}

/// The error type for [`Game::new()`](crate::Game::new).
///
/// All of these are detected before any tile is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// There must be at least two players, and every player must be dealt a
    /// full hand with one tile left over to start the board.
    InvalidPlayerCount { count: usize, max: usize },
    /// Two players could not be dealt a hand of this size from one set.
    InvalidHandSize { hand_size: usize, max: usize },
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::InvalidPlayerCount { count, max } => write!(
                f,
                "A game needs between 2 and {} players, but {} were given",
                max, count
            ),
            SetupError::InvalidHandSize { hand_size, max } => write!(
                f,
                "Players must be dealt between 1 and {} tiles, not {}",
                max, hand_size
            ),
        }
    }
}
