use std::error::Error;
use std::fmt;

/// 1-based player identifier. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player(u8);

impl Player {
    pub const ONE: Player = Player(1);

    pub fn new(id: u8) -> Self {
        debug_assert!(id >= 1, "player ids are 1-based");
        Player(id)
    }

    pub fn id(self) -> u8 {
        self.0
    }

    /// Next player in turn order, wrapping back to player 1.
    pub fn next(self, num_players: u8) -> Player {
        if self.0 >= num_players {
            Player(1)
        } else {
            Player(self.0 + 1)
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Board coordinate (0-indexed). Signed so out-of-range coordinates are
/// representable and directional scans need no casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub y: i32,
    pub x: i32,
}

impl Position {
    pub fn new(y: i32, x: i32) -> Self {
        Position { y, x }
    }

    pub fn offset(self, dy: i32, dx: i32) -> Self {
        Position {
            y: self.y + dy,
            x: self.x + dx,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// Rules and dimensions for one game. A resize builds a whole new board
/// rather than mutating the old one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub height: i32,
    pub width: i32,
    pub num_players: u8,
    /// Consecutive same-player stones in a line required to win.
    pub win_length: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 10,
            width: 10,
            num_players: 2,
            win_length: 5,
        }
    }
}

impl GameConfig {
    pub fn new(height: i32, width: i32) -> Self {
        GameConfig {
            height,
            width,
            ..Default::default()
        }
    }
}

/// Board construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { height: i32, width: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { height, width } => {
                write!(f, "invalid board dimensions {}x{}", height, width)
            }
        }
    }
}

impl Error for BoardError {}

/// Rejected placement. Both variants leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    InvalidCoordinate(Position),
    CellOccupied(Position),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlaceError::InvalidCoordinate(pos) => {
                write!(f, "coordinate {} is outside the board", pos)
            }
            PlaceError::CellOccupied(pos) => {
                write!(f, "cell {} already holds a stone", pos)
            }
        }
    }
}

impl Error for PlaceError {}
