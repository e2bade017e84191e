pub mod core;
pub mod display;
pub mod game;
pub mod input;
pub mod logic;
pub mod terminal;

mod logic_tests;

pub use crate::core::{Board, BoardError, GameConfig, PlaceError, Player, Position};
pub use crate::game::Game;
pub use crate::logic::{evaluate, Outcome};
