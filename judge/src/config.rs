use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use dominoes::{DrawRule, GameConfig, TieBreak, DEFAULT_HAND_SIZE};
use serde::{Deserialize, Serialize};

/// The players used when none are given.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Alice", "Bob"];

/// Settings for a table, as read from a JSON file.
///
/// Every field is optional:
/// ```json
/// { "players": ["Alice", "Bob"], "tie_break": "first", "draw_rule": "pass_after_draw", "hand_size": 7 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub players: Vec<String>,
    pub tie_break: Option<TieBreak>,
    pub draw_rule: Option<DrawRule>,
    pub hand_size: Option<usize>,
}

impl TableConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open table config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid table config '{}'", path.display()))
    }

    /// The player names, or Alice and Bob if there are none.
    pub fn player_names(&self) -> Vec<String> {
        if self.players.is_empty() {
            DEFAULT_PLAYERS.iter().map(|&name| String::from(name)).collect()
        } else {
            self.players.clone()
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            tie_break: self.tie_break.unwrap_or_default(),
            draw_rule: self.draw_rule.unwrap_or_default(),
            hand_size: self.hand_size.unwrap_or(DEFAULT_HAND_SIZE),
        }
    }

    /// Fills in the settings given on the command line, which take precedence.
    pub fn merge(mut self, other: TableConfig) -> Self {
        if !other.players.is_empty() {
            self.players = other.players;
        }
        self.tie_break = other.tie_break.or(self.tie_break);
        self.draw_rule = other.draw_rule.or(self.draw_rule);
        self.hand_size = other.hand_size.or(self.hand_size);
        self
    }
}
