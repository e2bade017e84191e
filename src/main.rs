use std::io::{self, Write};

use gobang::core::{GameConfig, Position};
use gobang::display::{self, DisplayState};
use gobang::game::Game;
use gobang::input::{Command, CommandSource, KeyboardInput};
use gobang::logic::Outcome;
use gobang::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut input = KeyboardInput::new();
    run(&mut input)
}

fn run(input: &mut dyn CommandSource) -> anyhow::Result<()> {
    let mut game = Game::new(GameConfig::default())?;
    let mut state = DisplayState::new();

    loop {
        match game.outcome() {
            Outcome::Ongoing => {}
            Outcome::Draw => {
                state.status_msg = Some("Ended in a draw".to_string());
                display::render_board(game.board(), game.current_turn(), &state)?;
                break;
            }
            Outcome::Win(player) => {
                state.status_msg = Some(format!("Game over, {} wins", player));
                display::render_board(game.board(), game.current_turn(), &state)?;
                break;
            }
        }

        display::render_board(game.board(), game.current_turn(), &state)?;

        match input.next_command()? {
            Command::Move(dir) => state.move_cursor(game.board(), dir),
            Command::Place => {
                // A rejected move changes nothing; the redraw is the only
                // feedback the player gets.
                let _ = game.place(state.cursor);
            }
            Command::Restart => game.restart(),
            Command::Resize => {
                loop {
                    let (height, width) = input.read_dimensions()?;
                    if game.resize(height, width).is_ok() {
                        break;
                    }
                }
                state.cursor = Position::default();
            }
            Command::Quit => {
                print!("Game ended\r\n");
                break;
            }
        }
    }

    print!("Press 'q' to quit...\r\n");
    io::stdout().flush()?;
    while input.next_command()? != Command::Quit {}
    Ok(())
}
