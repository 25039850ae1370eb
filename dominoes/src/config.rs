use serde::{Deserialize, Serialize};

use crate::{SetupError, TieBreak, SET_SIZE};

/// How many tiles each player is dealt in a standard game.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// What happens after a player who could not play has drawn a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawRule {
    /// The same player goes again, drawing until they can play or the deck is empty.
    #[default]
    KeepDrawing,
    /// The turn passes to the next player.
    PassAfterDraw,
}

/// The rules a [`Game`](crate::Game) is played with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tie_break: TieBreak,
    pub draw_rule: DrawRule,
    pub hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            draw_rule: DrawRule::default(),
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameConfig {
    /// The largest number of players that can each get a full hand and still
    /// leave one tile to start the board.
    pub fn max_players(&self) -> usize {
        (SET_SIZE - 1) / self.hand_size.max(1)
    }

    pub fn validate(&self, player_count: usize) -> Result<(), SetupError> {
        let max_hand_size = (SET_SIZE - 1) / 2;
        if self.hand_size == 0 || self.hand_size > max_hand_size {
            return Err(SetupError::InvalidHandSize {
                hand_size: self.hand_size,
                max: max_hand_size,
            });
        }
        let max = self.max_players();
        if player_count < 2 || player_count > max {
            return Err(SetupError::InvalidPlayerCount {
                count: player_count,
                max,
            });
        }
        Ok(())
    }
}
