use super::*;

/// Build a position directly from a list of (square, owner) pairs.
fn position(discs: &[(usize, u8)], to_move: u8) -> State {
    let mut board = [0; BOARD_SIZE];
    for &(square, owner) in discs {
        board[square] = owner;
    }
    State {
        board,
        current_player: to_move,
        placements: 10,
        done: false,
    }
}

#[test]
fn test_initial_state() {
    let state = State::new();
    assert_eq!(state.current_player(), BLACK);
    assert_eq!(state.disc_count(BLACK), 2);
    assert_eq!(state.disc_count(WHITE), 2);
    assert_eq!(state.placements(), 0);
    assert!(!state.is_terminal());
    assert_eq!(state.outcome(), Outcome::Ongoing);
}

#[test]
fn test_initial_legal_moves() {
    let state = State::new();
    assert_eq!(state.legal_actions(), vec![19, 26, 37, 44]);
}

#[test]
fn test_placement_flips_line() {
    let state = State::new().apply(19).unwrap();

    assert_eq!(state.cell(19), BLACK);
    assert_eq!(state.cell(27), BLACK); // flipped
    assert_eq!(state.disc_count(BLACK), 4);
    assert_eq!(state.disc_count(WHITE), 1);
    assert_eq!(state.current_player(), WHITE);
    assert_eq!(state.legal_actions(), vec![18, 20, 34]);
}

#[test]
fn test_illegal_placements() {
    let state = State::new();

    // Corner does not outflank anything
    assert_eq!(state.apply(0), Err(GameError::IllegalAction(0)));
    // Occupied square
    assert_eq!(state.apply(27), Err(GameError::IllegalAction(27)));
    // Off the board
    assert_eq!(state.apply(65), Err(GameError::IllegalAction(65)));
    // Passing while placements exist
    assert_eq!(state.apply(PASS), Err(GameError::IllegalAction(PASS)));
}

#[test]
fn test_forced_pass() {
    // White cannot outflank the lone black corner disc, black can take square 2
    let state = position(&[(0, BLACK), (1, WHITE)], WHITE);
    assert_eq!(state.legal_actions(), vec![PASS]);

    let passed = state.apply(PASS).unwrap();
    assert_eq!(passed.current_player(), BLACK);
    assert!(!passed.is_terminal());
    assert_eq!(passed.legal_actions(), vec![2]);
    assert_eq!(passed.placements(), state.placements());
}

#[test]
fn test_wipeout_ends_game() {
    let state = position(&[(0, BLACK), (1, WHITE)], BLACK);
    let end = state.apply(2).unwrap();

    assert!(end.is_terminal());
    assert_eq!(end.disc_count(WHITE), 0);
    assert!(end.legal_actions().is_empty());
    assert_eq!(end.current_player(), BLACK);
    assert_eq!(end.outcome(), Outcome::Win(BLACK));
    assert_eq!(end.score(), 1.0);
}

#[test]
fn test_game_ends_when_nobody_can_move() {
    // After black takes square 2 neither side can outflank anything
    let state = position(&[(0, BLACK), (1, WHITE), (63, WHITE)], BLACK);
    let end = state.apply(2).unwrap();

    assert!(end.is_terminal());
    assert_eq!(end.disc_count(WHITE), 1);
    assert_eq!(end.outcome(), Outcome::Win(BLACK));
    assert_eq!(end.score(), 1.0);
}

#[test]
fn test_score_for_losing_last_mover() {
    // White makes the final move but black still owns more discs
    let state = position(
        &[
            (0, WHITE),
            (1, BLACK),
            (40, BLACK),
            (41, BLACK),
            (50, BLACK),
            (63, BLACK),
        ],
        WHITE,
    );
    let end = state.apply(2).unwrap();

    assert!(end.is_terminal());
    assert_eq!(end.current_player(), WHITE);
    assert_eq!(end.outcome(), Outcome::Win(BLACK));
    assert_eq!(end.score(), 0.0);
}

#[test]
fn test_step_after_game_over() {
    let mut end = position(&[(0, BLACK), (1, WHITE)], BLACK).apply(2).unwrap();
    assert_eq!(end.step(3), Err(GameError::GameOver));
    assert_eq!(end.step(PASS), Err(GameError::GameOver));
}

#[test]
fn test_full_game_terminates() {
    let mut state = State::new();
    let mut plies = 0;

    while !state.is_terminal() {
        let actions = state.legal_actions();
        assert!(!actions.is_empty());
        state.step(actions[0]).unwrap();
        plies += 1;
        assert!(plies < 200, "game did not terminate");
    }

    assert!(state.placements() <= MAX_PLACEMENTS);
    let score = state.score();
    assert!(score == 0.0 || score == 0.5 || score == 1.0);
}

#[test]
fn test_parse_action() {
    assert_eq!(State::parse_action("2 3"), Some(19));
    assert_eq!(State::parse_action("19"), Some(19));
    assert_eq!(State::parse_action("pass"), Some(PASS));
    assert_eq!(State::parse_action(" PASS "), Some(PASS));
    assert_eq!(State::parse_action("8 0"), None);
    assert_eq!(State::parse_action("65"), None);
    assert_eq!(State::parse_action("a b"), None);
}

#[test]
fn test_display() {
    let rendered = State::new().to_string();

    assert!(rendered.starts_with("    0 1 2 3 4 5 6 7"));
    assert!(rendered.contains("  3 . . . O X . . ."));
    assert!(rendered.contains("  4 . . . X O . . ."));
    assert!(rendered.ends_with("X: 2  O: 2"));
}
