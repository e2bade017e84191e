use crate::core::{Board, GameConfig, Player, Position};

/// Evaluated game result. Derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Draw,
    Win(Player),
}

/// Canonical scan directions. A run's opposite half is found by seeding
/// from its other endpoint, so four directions cover all eight.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Determine whether any player has a winning run, the board is drawn, or
/// play continues. Every cell is a scan seed; wins take precedence over a
/// full board.
pub fn evaluate(board: &Board, config: &GameConfig) -> Outcome {
    for y in 0..board.height() {
        for x in 0..board.width() {
            let pos = Position::new(y, x);
            let player = match board.get(pos) {
                Some(p) => p,
                None => continue,
            };
            for &(dy, dx) in &DIRECTIONS {
                if has_run(board, player, pos, dy, dx, config.win_length) {
                    return Outcome::Win(player);
                }
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Walk from `start` in direction `(dy, dx)` counting consecutive cells
/// owned by `player`; true once the streak reaches `len`.
fn has_run(board: &Board, player: Player, start: Position, dy: i32, dx: i32, len: u32) -> bool {
    let mut pos = start;
    let mut streak = 0;
    while board.get(pos) == Some(player) {
        streak += 1;
        if streak >= len {
            return true;
        }
        pos = pos.offset(dy, dx);
    }
    false
}
