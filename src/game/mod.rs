use crate::core::{Board, BoardError, GameConfig, PlaceError, Player, Position};
use crate::logic::{self, Outcome};

/// One game in progress: the board, the rules it was created with, and
/// whose turn it is. The board is exclusively owned here and only
/// [`Game::place`] writes to it.
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: Player,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.height, config.width)?;
        Ok(Game {
            config,
            board,
            turn: Player::ONE,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Place the current player's stone at `pos` and advance the turn.
    /// Rejected placements change nothing, including the turn.
    pub fn place(&mut self, pos: Position) -> Result<(), PlaceError> {
        if !self.board.is_valid_coord(pos) {
            return Err(PlaceError::InvalidCoordinate(pos));
        }
        if self.board.get(pos).is_some() {
            return Err(PlaceError::CellOccupied(pos));
        }
        self.board.set(pos, self.turn);
        self.turn = self.turn.next(self.config.num_players);
        Ok(())
    }

    /// Discard the board and start over with the same dimensions.
    pub fn restart(&mut self) {
        // Dimensions were validated when the config was applied.
        self.board = Board::new(self.config.height, self.config.width)
            .expect("dimensions validated at construction");
        self.turn = Player::ONE;
    }

    /// Replace the board with a fresh one of the given dimensions. The new
    /// board is constructed before the old one is dropped; on failure the
    /// running game is untouched.
    pub fn resize(&mut self, height: i32, width: i32) -> Result<(), BoardError> {
        let board = Board::new(height, width)?;
        self.config.height = height;
        self.config.width = width;
        self.board = board;
        self.turn = Player::ONE;
        Ok(())
    }

    pub fn outcome(&self) -> Outcome {
        logic::evaluate(&self.board, &self.config)
    }
}
