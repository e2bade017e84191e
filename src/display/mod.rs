use std::io::{self, Write};

use crossterm::{cursor, execute, style::Stylize, terminal};

use crate::core::{Board, Player, Position};
use crate::input::Direction;

/// Screen-side state: where the cursor sits and an optional status line.
/// Purely presentational; the game never sees it.
#[derive(Debug, Default)]
pub struct DisplayState {
    pub cursor: Position,
    pub status_msg: Option<String>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor one step, clamping to the board. A diagonal applies
    /// its vertical then horizontal component independently, so only the
    /// blocked component is dropped at an edge.
    pub fn move_cursor(&mut self, board: &Board, dir: Direction) {
        let (dy, dx) = dir.delta();
        if dy != 0 && board.is_valid_coord(self.cursor.offset(dy, 0)) {
            self.cursor.y += dy;
        }
        if dx != 0 && board.is_valid_coord(self.cursor.offset(0, dx)) {
            self.cursor.x += dx;
        }
    }
}

fn marker(player: Player) -> char {
    match player.id() {
        1 => '@',
        2 => 'O',
        _ => '#',
    }
}

/// Redraw the whole screen: banner, boxed grid with the cursor cell
/// wrapped in `<`/`>`, turn line, dimensions, and the key legend.
pub fn render_board(board: &Board, turn: Player, state: &DisplayState) -> io::Result<()> {
    let mut out = io::stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let width = board.width() as usize;

    print!("! ! G O B A N G ! !\r\n");
    print!("{}\r\n", "=".repeat(width * 3 + 2));

    print!("+{}+\r\n", "-".repeat(width * 3));
    for y in 0..board.height() {
        print!("|");
        for x in 0..board.width() {
            let pos = Position::new(y, x);
            let at_cursor = pos == state.cursor;
            let stone = board.get(pos).map_or(' ', marker);
            print!(
                "{}{}{}",
                if at_cursor { '<' } else { ' ' },
                stone,
                if at_cursor { '>' } else { ' ' },
            );
        }
        print!("|\r\n");
    }
    print!("+{}+\r\n", "-".repeat(width * 3));

    print!("Turn: {}\r\n", turn);
    print!("HEIGHT: {}  WIDTH: {}\r\n", board.height(), board.width());
    print!(" KEY BINDINGS\r\n");
    print!("<y>[k]<u>         [o] place a stone\r\n");
    print!("[h]   [l]  MOVE   [q] quit the game\r\n");
    print!("<b>[j]<n>         [r] restart the game\r\n");
    print!("                  [R] change the size of board\r\n");
    print!("\r\n");

    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    }

    out.flush()
}
