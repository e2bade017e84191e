#[cfg(test)]
mod tests {
    use crate::core::{Board, GameConfig, Player, Position};
    use crate::game::Game;
    use crate::logic::{evaluate, Outcome};

    /// Build a board from rows of `.` (empty), `1` and `2` (stones).
    fn board_from(rows: &[&str]) -> Board {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let mut board = Board::new(height, width).unwrap();
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len() as i32, width, "ragged test board");
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(y as i32, x as i32);
                match ch {
                    '.' => {}
                    '1' => board.set(pos, Player::new(1)),
                    '2' => board.set(pos, Player::new(2)),
                    other => panic!("unexpected cell char {:?}", other),
                }
            }
        }
        board
    }

    #[test]
    fn empty_board_is_ongoing() {
        let board = Board::new(10, 10).unwrap();
        assert_eq!(evaluate(&board, &GameConfig::default()), Outcome::Ongoing);
    }

    #[test]
    fn alternating_play_along_top_row_wins_for_player_one() {
        // Player 1 fills row 0, columns 0..4; player 2 answers on row 5.
        let mut game = Game::new(GameConfig::default()).unwrap();
        for x in 0..4 {
            game.place(Position::new(0, x)).unwrap();
            assert_eq!(game.outcome(), Outcome::Ongoing);
            game.place(Position::new(5, x)).unwrap();
            assert_eq!(game.outcome(), Outcome::Ongoing);
        }
        game.place(Position::new(0, 4)).unwrap();
        assert_eq!(game.outcome(), Outcome::Win(Player::new(1)));
    }

    #[test]
    fn vertical_run_wins() {
        let board = board_from(&[
            "1.........",
            "1.........",
            "1....2....",
            "1....2....",
            "1....2....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(
            evaluate(&board, &GameConfig::default()),
            Outcome::Win(Player::new(1))
        );
    }

    #[test]
    fn diagonal_runs_win_in_both_orientations() {
        let down_right = board_from(&[
            "2.........",
            ".2........",
            "..2.......",
            "...2......",
            "....2.....",
            ".1111.....",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(
            evaluate(&down_right, &GameConfig::default()),
            Outcome::Win(Player::new(2))
        );

        let down_left = board_from(&[
            ".....1....",
            "....1.....",
            "...1......",
            "..1.......",
            ".1........",
            "2222......",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(
            evaluate(&down_left, &GameConfig::default()),
            Outcome::Win(Player::new(1))
        );
    }

    #[test]
    fn interior_run_away_from_every_border_is_detected() {
        // A run that touches no edge of the board.
        let mut board = Board::new(20, 20).unwrap();
        for y in 8..13 {
            board.set(Position::new(y, 7), Player::new(2));
        }
        assert_eq!(
            evaluate(&board, &GameConfig::default()),
            Outcome::Win(Player::new(2))
        );
    }

    #[test]
    fn opponent_stone_breaks_the_streak() {
        let board = board_from(&[
            "11112111..",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(evaluate(&board, &GameConfig::default()), Outcome::Ongoing);
    }

    #[test]
    fn four_in_a_row_is_not_enough() {
        let board = board_from(&[
            "1111......",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(evaluate(&board, &GameConfig::default()), Outcome::Ongoing);
    }

    #[test]
    fn run_longer_than_win_length_still_wins() {
        let mut board = Board::new(10, 10).unwrap();
        for x in 2..9 {
            board.set(Position::new(4, x), Player::new(1));
        }
        assert_eq!(
            evaluate(&board, &GameConfig::default()),
            Outcome::Win(Player::new(1))
        );
    }

    #[test]
    fn win_length_comes_from_the_config() {
        let config = GameConfig {
            height: 5,
            width: 5,
            win_length: 3,
            ..Default::default()
        };
        let board = board_from(&[
            ".....",
            ".222.",
            ".....",
            ".....",
            ".....",
        ]);
        assert_eq!(evaluate(&board, &config), Outcome::Win(Player::new(2)));
    }

    #[test]
    fn full_board_without_a_run_is_a_draw() {
        // 4x4 cannot hold a 5-run, so any filled grid is a draw.
        let board = board_from(&[
            "1212",
            "2121",
            "1212",
            "2121",
        ]);
        assert_eq!(evaluate(&board, &GameConfig::default()), Outcome::Draw);
    }

    #[test]
    fn draw_check_covers_non_square_boards() {
        let full = board_from(&[
            "121",
            "212",
        ]);
        assert_eq!(evaluate(&full, &GameConfig::default()), Outcome::Draw);

        // One empty cell in the extra column keeps the game open.
        let open = board_from(&[
            "121",
            "21.",
        ]);
        assert_eq!(evaluate(&open, &GameConfig::default()), Outcome::Ongoing);
    }

    #[test]
    fn full_board_with_a_run_is_a_win_not_a_draw() {
        let config = GameConfig {
            height: 2,
            width: 3,
            win_length: 3,
            ..Default::default()
        };
        let board = board_from(&[
            "111",
            "212",
        ]);
        assert_eq!(evaluate(&board, &config), Outcome::Win(Player::new(1)));
    }

    #[test]
    fn single_cell_board_draws_after_one_stone() {
        let mut game = Game::new(GameConfig::new(1, 1)).unwrap();
        assert_eq!(game.outcome(), Outcome::Ongoing);
        game.place(Position::new(0, 0)).unwrap();
        // win_length 5 can never fit, so the filled board is a draw.
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
