pub mod game;
pub mod game_play;

pub use game::game_config;
pub use game_play::game_play_config;
