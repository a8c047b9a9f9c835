//! Scenario tests for the game controller.

use noughts_engine::rules::LINES;
use noughts_engine::{
    Board, Game, GameStatus, MoveError, NamingError, Position, Roster, Square, Token, Verdict,
};

/// X fills `line` while O takes squares off it. O never holds three
/// marks, so the game ends on X's third move.
fn win_for_x(line: [Position; 3]) -> Game {
    let mut game = Game::new();
    let mut spare = Position::ALL.into_iter().filter(|pos| !line.contains(pos));

    for (i, target) in line.iter().enumerate() {
        game.play(target.index()).expect("X move");
        if i < 2 {
            let pos = spare.next().expect("spare square for O");
            game.play(pos.index()).expect("O move");
        }
    }
    game
}

#[test]
fn test_top_row_win() {
    let game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
    let win = game.status().win().copied().expect("won game");
    assert_eq!(win.token(), Token::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    assert_eq!(game.verdict().to_string(), "X wins");
}

#[test]
fn test_every_line_detected_by_controller() {
    for line in LINES {
        let game = win_for_x(line);
        let win = game.status().win().copied().expect("won game");
        assert_eq!(win.token(), Token::X, "line {:?}", line);
        assert!(
            line.iter().all(|pos| win.line().contains(pos)),
            "expected {:?}, got {:?}",
            line,
            win.line()
        );
    }
}

#[test]
fn test_second_player_can_win() {
    // X: 0, 1, 8  O: 3, 4, 5
    let game = Game::replay([0, 3, 1, 4, 8, 5]).expect("legal sequence");
    assert_eq!(game.status().win().map(|w| w.token()), Some(Token::O));
    assert_eq!(game.winning_line().map(|l| l.map(Position::index)), Some([3, 4, 5]));
    assert_eq!(game.verdict().to_string(), "O wins");
}

#[test]
fn test_draw_detection() {
    let game = Game::replay([0, 4, 2, 1, 7, 6, 3, 5, 8]).expect("legal sequence");
    assert_eq!(game.status(), &GameStatus::Draw);
    assert_eq!(game.verdict(), Verdict::Draw);
    assert_eq!(game.verdict().to_string(), "Draw");
    assert!(game.winning_line().is_none());
    assert!(game.board().check_for_draw());
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X completes the 0-4-8 diagonal with the ninth move.
    let game = Game::replay([0, 1, 2, 5, 3, 6, 4, 7, 8]).expect("legal sequence");
    assert_eq!(game.turn_count(), 9);
    assert!(matches!(game.status(), GameStatus::Won(_)));
    assert_eq!(game.verdict().to_string(), "X wins");
}

#[test]
fn test_finished_game_is_frozen() {
    let mut game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
    let before = game.snapshot();

    for index in 0..12 {
        assert_eq!(game.play(index), Err(MoveError::GameOver));
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_new_game_restores_defaults() {
    let mut game = Game::with_roster(Roster::new("Ada", "Grace"));
    game.supply_player_names("Bob", "Eve").expect("before first move");
    for index in [0, 3, 1, 4, 2] {
        game.play(index).expect("legal move");
    }

    game.new_game();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.print_board(), [Square::Empty; 9]);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert!(game.history().is_empty());
    assert!(!game.have_player_names_been_supplied());
    assert_eq!(game.roster(), &Roster::new("Ada", "Grace"));
    assert_eq!(game.to_move().map(|p| p.token()), Some(Token::X));
}

#[test]
fn test_supply_names_only_before_first_move() {
    let mut game = Game::new();
    assert!(!game.have_player_names_been_supplied());

    game.supply_player_names(" Ada ", "Grace").expect("before first move");
    assert!(game.have_player_names_been_supplied());
    assert_eq!(game.roster().first().name(), "Ada");
    assert_eq!(game.roster().first().token(), Token::X);
    assert_eq!(game.roster().second().token(), Token::O);

    game.play(4).expect("legal move");
    let error = game.supply_player_names("Bob", "Eve").unwrap_err();
    assert_eq!(error, NamingError::GameUnderway { turn_count: 1 });
    assert_eq!(game.roster().second().name(), "Grace");
}

#[test]
fn test_winner_reported_by_supplied_name() {
    let mut game = Game::new();
    game.supply_player_names("Ada", "Grace").expect("before first move");
    for index in [0, 3, 1, 4, 8, 5] {
        game.play(index).expect("legal move");
    }
    assert_eq!(game.verdict().to_string(), "Grace wins");
}

#[test]
fn test_print_board_is_a_copy() {
    let mut game = Game::new();
    let before = game.print_board();
    game.play(4).expect("legal move");
    assert_eq!(before, [Square::Empty; 9]);
    assert_eq!(game.print_board()[4], Square::Occupied(Token::X));
}

#[test]
fn test_replay_stops_at_first_rejection() {
    assert_eq!(
        Game::replay([4, 4]).unwrap_err(),
        MoveError::SquareOccupied(Position::Center)
    );
    assert_eq!(Game::replay([0, 9]).unwrap_err(), MoveError::OutOfRange(9));
}

#[test]
fn test_history_records_moves() {
    let game = Game::replay([4, 0]).expect("legal sequence");
    let rendered: Vec<String> = game.history().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["X -> Center", "O -> Top-left"]);
}
