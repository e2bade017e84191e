use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Eight-way cursor movement. Diagonals decompose into a vertical and a
/// horizontal unit step that the caller applies independently, so moving
/// diagonally along an edge still slides in the open direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// `(dy, dx)` with each component in `{-1, 0, 1}`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// One decoded player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Place,
    Quit,
    Restart,
    Resize,
}

/// Source of player commands. The game loop only ever needs the next
/// command and, for a resize, a pair of dimensions.
pub trait CommandSource {
    /// Block until a recognized command arrives. End of input maps to
    /// [`Command::Quit`]; anything outside the alphabet is discarded.
    fn next_command(&mut self) -> anyhow::Result<Command>;

    /// Prompt for and read new board dimensions as `(height, width)`.
    fn read_dimensions(&mut self) -> anyhow::Result<(i32, i32)>;
}

/// Keyboard-backed command source reading raw crossterm key events.
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        KeyboardInput
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSource for KeyboardInput {
    fn next_command(&mut self) -> anyhow::Result<Command> {
        loop {
            let event = event::read()?;
            let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = event
            else {
                continue;
            };

            // Ctrl-C / Ctrl-D end the input stream; treat both as quit.
            if modifiers.contains(KeyModifiers::CONTROL) {
                match code {
                    KeyCode::Char('c') | KeyCode::Char('d') => return Ok(Command::Quit),
                    _ => continue,
                }
            }

            let command = match code {
                KeyCode::Char('w') | KeyCode::Char('k') => Command::Move(Direction::Up),
                KeyCode::Char('s') | KeyCode::Char('j') => Command::Move(Direction::Down),
                KeyCode::Char('a') | KeyCode::Char('h') => Command::Move(Direction::Left),
                KeyCode::Char('d') | KeyCode::Char('l') => Command::Move(Direction::Right),
                KeyCode::Char('y') => Command::Move(Direction::UpLeft),
                KeyCode::Char('u') => Command::Move(Direction::UpRight),
                KeyCode::Char('b') => Command::Move(Direction::DownLeft),
                KeyCode::Char('n') => Command::Move(Direction::DownRight),
                KeyCode::Char('o') => Command::Place,
                KeyCode::Char('q') => Command::Quit,
                KeyCode::Char('r') => Command::Restart,
                KeyCode::Char('R') => Command::Resize,
                _ => continue,
            };
            return Ok(command);
        }
    }

    fn read_dimensions(&mut self) -> anyhow::Result<(i32, i32)> {
        loop {
            print!("Enter height and width: ");
            io::stdout().flush()?;
            let line = read_line()?;
            let mut parts = line.split_whitespace();
            let parsed = (
                parts.next().and_then(|s| s.parse::<i32>().ok()),
                parts.next().and_then(|s| s.parse::<i32>().ok()),
            );
            if let (Some(height), Some(width)) = parsed {
                return Ok((height, width));
            }
            print!("\r\n");
        }
    }
}

/// Line editor for the resize prompt. The terminal stays in raw mode, so
/// echo and backspace are handled here.
fn read_line() -> anyhow::Result<String> {
    let mut line = String::new();
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Enter => {
                    print!("\r\n");
                    io::stdout().flush()?;
                    return Ok(line);
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        print!("\x08 \x08");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' => {
                    line.push(c);
                    print!("{}", c);
                    io::stdout().flush()?;
                }
                _ => {}
            }
        }
    }
}
