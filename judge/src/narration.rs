use std::io::Write;

use dominoes::{visualize_chain, GameEvent, Tile};

/// Printed after every game.
pub const CLOSING_LINE: &str = "Thanks for Playing!";

/// Turns game events into a human-readable log, one line at a time.
pub struct Narrator<W> {
    names: Vec<String>,
    /// Draw boards with Unicode domino characters instead of `<a:b>` codes.
    unicode: bool,
    out: W,
}

fn join_tiles(tiles: &[Tile]) -> String {
    let codes: Vec<String> = tiles.iter().map(Tile::to_string).collect();
    codes.join(" ")
}

impl<W: Write> Narrator<W> {
    pub fn new(names: &[String], unicode: bool, out: W) -> Self {
        Self {
            names: names.to_vec(),
            unicode,
            out,
        }
    }

    fn name(&self, player: usize) -> &str {
        self.names.get(player).map_or("?", String::as_str)
    }

    fn board(&self, tiles: &[Tile]) -> String {
        if self.unicode {
            visualize_chain(tiles)
        } else {
            join_tiles(tiles)
        }
    }

    /// The lines describing a single event.
    pub fn lines(&self, event: &GameEvent) -> Vec<String> {
        match event {
            GameEvent::Started {
                first_tile,
                starting_player,
                ..
            } => vec![
                format!(
                    "Game starting with first tile: {}",
                    self.board(std::slice::from_ref(first_tile))
                ),
                format!("{} goes first", self.name(*starting_player)),
            ],
            GameEvent::Played {
                player,
                tile,
                connected_to,
                board,
                ..
            } => vec![
                format!(
                    "{} plays {} to connect to tile {} on the board",
                    self.name(*player),
                    tile,
                    connected_to
                ),
                format!("Board is now: {}", self.board(board)),
            ],
            GameEvent::Drew { player, tile } => {
                vec![format!("{} can't play, drawing tile {}", self.name(*player), tile)]
            }
            GameEvent::Won { player } => vec![format!("Player {} has won!", self.name(*player))],
            GameEvent::DeckExhausted { .. } => vec![String::from("Deck is Empty, Game Over!")],
        }
    }

    pub fn narrate(&mut self, event: &GameEvent) -> std::io::Result<()> {
        for line in self.lines(event) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn close(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", CLOSING_LINE)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
