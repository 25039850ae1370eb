pub use board::*;
pub use config::*;
pub use deck::*;
pub use errors::*;
pub use event::*;
pub use game::*;
pub use hand::*;
pub use player::*;
pub use randomness::*;
pub use tile::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod deck;
mod errors;
mod event;
mod game;
mod hand;
mod player;
mod randomness;
mod tile;
mod turn;
mod visualization;
