use super::types::{BoardError, Player, Position};

/// The playing grid. Cells live in one owned row-major buffer indexed by
/// `y * width + x`; dimensions are fixed for the lifetime of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: i32,
    width: i32,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an all-empty board. Fails unless both dimensions are >= 1.
    pub fn new(height: i32, width: i32) -> Result<Self, BoardError> {
        if height <= 0 || width <= 0 {
            return Err(BoardError::InvalidDimensions { height, width });
        }
        Ok(Board {
            height,
            width,
            cells: vec![None; (height as usize) * (width as usize)],
        })
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn is_valid_coord(&self, pos: Position) -> bool {
        0 <= pos.y && pos.y < self.height && 0 <= pos.x && pos.x < self.width
    }

    /// Stone at `pos`, or `None` when the cell is empty or out of range.
    pub fn get(&self, pos: Position) -> Option<Player> {
        if !self.is_valid_coord(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    /// Write a stone. Callers must have checked the coordinate and
    /// emptiness; `Game::place` is the only call site.
    pub(crate) fn set(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_valid_coord(pos));
        let idx = self.index(pos);
        self.cells[idx] = Some(player);
    }

    /// True iff no cell on the board is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y as usize) * (self.width as usize) + pos.x as usize
    }
}
