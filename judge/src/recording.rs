use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use dominoes::{GameConfig, GameEvent, GameOutcome};
use serde::{Deserialize, Serialize};

/// Writes every game to its own numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    events: Vec<GameEvent>,
}

/// The contents of one recording file.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Vec<String>,
    pub config: GameConfig,
    pub events: Vec<GameEvent>,
    pub outcome: GameOutcome,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            events: Vec::new(),
        })
    }

    pub fn store_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    /// Writes the events stored since the last recording, and returns the path of the file.
    pub fn write_game_recording(
        &mut self,
        players: &[String],
        config: &GameConfig,
        outcome: GameOutcome,
    ) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            players: players.to_vec(),
            config: config.clone(),
            events: std::mem::take(&mut self.events),
            outcome,
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

impl GameRecording {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
