mod config;
mod game;
mod narration;
mod recording;
pub use config::*;
pub use game::*;
pub use narration::*;
pub use recording::*;
