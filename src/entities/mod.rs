pub mod game_plays;
pub mod games;
pub mod num_locates;

pub use game_plays as game_play_entity;
pub use games as game_entity;
pub use num_locates as num_locate_entity;
