pub mod board;
pub mod types;

pub use board::Board;
pub use types::{BoardError, GameConfig, PlaceError, Player, Position};
