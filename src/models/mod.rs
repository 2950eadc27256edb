pub mod game;
pub mod game_play;
pub mod num_locate;

pub use game::*;
pub use game_play::*;
pub use num_locate::*;
