use serde::{Deserialize, Serialize};

use crate::{End, Tile};

/// Something that happened during a game.
///
/// Players are referred to by their index in the list of names the
/// [`Game`](crate::Game) was created with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The tiles have been dealt and the board has been started.
    Started {
        first_tile: Tile,
        starting_player: usize,
        /// The hand of every player, in seat order.
        hands: Vec<Vec<Tile>>,
    },
    Played {
        player: usize,
        /// The tile in the orientation it was played in.
        tile: Tile,
        end: End,
        flipped: bool,
        /// The tile that was at this end of the board before.
        connected_to: Tile,
        /// The board after the play, from left to right.
        board: Vec<Tile>,
    },
    /// The player could not play and drew a tile.
    Drew { player: usize, tile: Tile },
    /// The player has played their last tile.
    Won { player: usize },
    /// The player could not play and there was nothing left to draw.
    DeckExhausted { player: usize },
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameOutcome {
    Won { player: usize },
    DeckExhausted { player: usize },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<usize> {
        match self {
            GameOutcome::Won { player } => Some(*player),
            GameOutcome::DeckExhausted { .. } => None,
        }
    }
}
