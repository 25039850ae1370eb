use std::collections::VecDeque;

use tracing::debug;

use crate::{
    execute_turn, Board, Deck, DrawRule, GameConfig, GameEvent, GameOutcome, Player, Randomness,
    SetupError, TurnOutcome,
};

/// A game that plays itself.
///
/// The tiles are dealt when the game is created. After that, the game is an
/// iterator over its [events](GameEvent): every call to `next()` plays one
/// turn, and the iterator ends after the event that finished the game.
///
/// ```
/// use dominoes::{Game, GameConfig, GameEvent};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut game = Game::new(&["Alice", "Bob"], GameConfig::default(), StdRng::seed_from_u64(7)).unwrap();
/// assert!(matches!(game.next(), Some(GameEvent::Started { .. })));
/// game.play_to_end();
/// assert!(game.outcome().is_some());
/// assert_eq!(game.next(), None);
/// ```
pub struct Game<R> {
    config: GameConfig,
    deck: Deck,
    players: Vec<Player>,
    board: Board,
    /// The index of the player whose turn it is.
    turn: usize,
    /// Events that have happened but were not returned from `next()` yet.
    pending: VecDeque<GameEvent>,
    outcome: Option<GameOutcome>,
    randomness: R,
}

impl<R: Randomness> Game<R> {
    /// Shuffles, deals the tiles round-robin, starts the board with the next
    /// tile from the deck and picks a random starting player.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        config: GameConfig,
        mut randomness: R,
    ) -> Result<Self, SetupError> {
        config.validate(names.len())?;
        let not_enough_tiles = SetupError::InvalidPlayerCount {
            count: names.len(),
            max: config.max_players(),
        };

        let mut deck = Deck::new();
        deck.shuffle(&mut randomness);

        let mut players: Vec<Player> = names.iter().map(|name| Player::new(name.as_ref())).collect();
        for _ in 0..config.hand_size {
            for player in players.iter_mut() {
                let tile = deck.draw().ok_or(not_enough_tiles)?;
                player.hand.insert_tile(tile);
            }
        }
        let first_tile = deck.draw().ok_or(not_enough_tiles)?;
        let board = Board::new(first_tile.clone());
        let turn = randomness.index(players.len());
        debug!(
            starting_player = players[turn].name.as_str(),
            %first_tile,
            deck = deck.len(),
            "Dealt"
        );

        let started = GameEvent::Started {
            first_tile,
            starting_player: turn,
            hands: players
                .iter()
                .map(|player| player.hand.iter().cloned().collect())
                .collect(),
        };

        Ok(Self {
            config,
            deck,
            players,
            board,
            turn,
            pending: VecDeque::from([started]),
            outcome: None,
            randomness,
        })
    }

    /// Plays the remaining turns and reports how the game ended.
    pub fn play_to_end(&mut self) -> GameOutcome {
        loop {
            if let Some(outcome) = self.outcome.filter(|_| self.pending.is_empty()) {
                return outcome;
            }
            let _ = self.next();
        }
    }

    /// Plays the turn of the current player.
    fn play_turn(&mut self) -> GameEvent {
        let player = self.turn;
        let outcome = execute_turn(
            &mut self.players[player],
            &mut self.board,
            &mut self.deck,
            self.config.tie_break,
            &mut self.randomness,
        );
        match outcome {
            TurnOutcome::Played {
                placement,
                connected_to,
            } => {
                if self.players[player].hand.is_empty() {
                    self.finish(GameOutcome::Won { player });
                    self.pending.push_back(GameEvent::Won { player });
                } else {
                    self.turn = self.next_seat();
                }
                GameEvent::Played {
                    player,
                    tile: placement.tile,
                    end: placement.end,
                    flipped: placement.flipped,
                    connected_to,
                    board: self.board.to_tiles(),
                }
            }
            TurnOutcome::Drew { tile } => {
                if self.config.draw_rule == DrawRule::PassAfterDraw {
                    self.turn = self.next_seat();
                }
                GameEvent::Drew { player, tile }
            }
            TurnOutcome::Blocked => {
                self.finish(GameOutcome::DeckExhausted { player });
                GameEvent::DeckExhausted { player }
            }
        }
    }
}

impl<R> Game<R> {
    fn next_seat(&self) -> usize {
        (self.turn + 1) % self.players.len()
    }

    fn finish(&mut self, outcome: GameOutcome) {
        debug!(?outcome, board = self.board.len(), deck = self.deck.len(), "Game over");
        self.outcome = Some(outcome);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The index of the player whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// How the game ended, or `None` while it is still going.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        config: GameConfig,
        players: Vec<Player>,
        board: Board,
        deck: Deck,
        randomness: R,
    ) -> Self {
        Self {
            config,
            deck,
            players,
            board,
            turn: 0,
            pending: VecDeque::new(),
            outcome: None,
            randomness,
        }
    }
}

impl<R: Randomness> Iterator for Game<R> {
    type Item = GameEvent;

    fn next(&mut self) -> Option<GameEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if self.outcome.is_some() {
            return None;
        }
        Some(self.play_turn())
    }
}
