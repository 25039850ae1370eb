use std::io::Write;

use dominoes::{Game, GameConfig, GameEvent, GameOutcome};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::narration::Narrator;
use crate::recording::Recorder;

/// Plays one game to the end, narrating and recording it if asked to.
///
/// Returns an error only for invalid settings or failed I/O.
pub fn play_game<W: Write>(
    rng: &mut StdRng,
    names: &[String],
    config: &GameConfig,
    narrator: &mut Option<Narrator<W>>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameOutcome> {
    let mut game = Game::new(names, config.clone(), rng)?;

    for event in game.by_ref() {
        if let GameEvent::Started { hands, .. } = &event {
            for (name, hand) in names.iter().zip(hands) {
                let hand: Vec<String> = hand.iter().map(|tile| tile.to_string()).collect();
                debug!(player = name.as_str(), hand = %hand.join(" "), "Dealt hand");
            }
        }
        trace!(?event);
        if let Some(narrator) = narrator {
            narrator.narrate(&event)?;
        }
        if let Some(recorder) = recorder {
            recorder.store_event(&event);
        }
    }
    let outcome = game.play_to_end();

    if let Some(narrator) = narrator {
        narrator.close()?;
    }
    if let Some(rec) = recorder {
        let path = rec.write_game_recording(names, config, outcome)?;
        debug!(path = %path.display(), "Recorded game");
    }
    Ok(outcome)
}

/// The results of a series of games between the same players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    /// Wins per player, in seat order.
    pub wins: Vec<usize>,
    /// Games that ended with an empty deck and nobody able to play.
    pub stalemates: usize,
}

impl MatchScore {
    pub fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            stalemates: 0,
        }
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(player) => self.wins[player] += 1,
            None => self.stalemates += 1,
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.stalemates
    }

    pub fn summary(&self, names: &[String]) -> String {
        let num_games = self.num_games().max(1) as f32;
        let mut result = String::from("End result:");
        for (name, wins) in names.iter().zip(&self.wins) {
            result += &format!(
                "\n- {} wins by {} ({:.1}%)",
                wins,
                name,
                *wins as f32 / num_games * 100.0
            );
        }
        result += &format!("\n- {} stalemates", self.stalemates);
        result
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::narration::CLOSING_LINE;

    fn names() -> Vec<String> {
        vec![String::from("Alice"), String::from("Bob")]
    }

    #[test]
    fn narrated_game() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut narrator = Some(Narrator::new(&names(), false, Vec::new()));
        let outcome = play_game(
            &mut rng,
            &names(),
            &GameConfig::default(),
            &mut narrator,
            &mut None,
        )
        .unwrap();

        let text = String::from_utf8(narrator.unwrap().into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Game starting with first tile: <"));
        assert_eq!(lines[lines.len() - 1], CLOSING_LINE);
        let last_event = lines[lines.len() - 2];
        match outcome {
            GameOutcome::Won { player } => {
                assert_eq!(last_event, format!("Player {} has won!", names()[player]))
            }
            GameOutcome::DeckExhausted { .. } => assert_eq!(last_event, "Deck is Empty, Game Over!"),
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut narrator = Some(Narrator::new(&names(), false, Vec::new()));
            play_game(
                &mut StdRng::seed_from_u64(seed),
                &names(),
                &GameConfig::default(),
                &mut narrator,
                &mut None,
            )
            .unwrap();
            narrator.unwrap().into_inner()
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn invalid_player_count() {
        let result = play_game::<Vec<u8>>(
            &mut StdRng::seed_from_u64(0),
            &[String::from("Alice")],
            &GameConfig::default(),
            &mut None,
            &mut None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn tally() {
        let mut score = MatchScore::new(2);
        score.record(GameOutcome::Won { player: 1 });
        score.record(GameOutcome::Won { player: 1 });
        score.record(GameOutcome::Won { player: 0 });
        score.record(GameOutcome::DeckExhausted { player: 0 });
        assert_eq!(score.wins, [1, 2]);
        assert_eq!(score.num_games(), 4);
        assert_eq!(
            score.summary(&names()),
            "End result:\n- 1 wins by Alice (25.0%)\n- 2 wins by Bob (50.0%)\n- 1 stalemates"
        );
    }
}
