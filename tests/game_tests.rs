//! Full games driven through the public session API.

use tictac4d::game::{Cell, GameOutcome, GameState, MoveError, Phase, Player, Point, Verdict, CELLS};

/// A completely filled board with no five-in-a-row for either player.
/// One row per (x, y), characters indexed by z * 5 + w. 313 X, 312 O.
const DRAWN_LAYOUT: [&str; 25] = [
    "XOOOOXOXOXOXXXXOOOXOOXOXO",
    "XOXXOXOOOXOXOXXXOXXXXOXOX",
    "XOOXOXOOOXOXXOOXOOOXXOXXX",
    "OOXXXXOXXOXOOOOXXXOXOOOXX",
    "OXXXOOXXXXOXXXXXOOOXOXXXX",
    "OXOOXXOOOXXXXOXXXXOXXXOXO",
    "OOOOXOOXOOXOXXXOXOOXOOXXO",
    "XOXXXOXXOOOXOOOOXXOOXOOOO",
    "XOXXOOXXXOOOOOXXOXXXOXXOO",
    "XOXOOOOXXOOOXOOOXOXOXXOXX",
    "OOOXOOXOOXXOXXOXOOXXXOXXX",
    "OOXOXOXOOXOXOXOXOOOXOXOOO",
    "XXOXOOOOOXXOOOOOOXXOXOOOX",
    "OOOXOOOOOXXXXOOOXXXOXOXXX",
    "XXXOOXOXXOXOOXXXOXXXOOOOX",
    "XOXXOXOOXOXXXOXXXOOXOOOXO",
    "XXXXOXOOXOOOOXOXXOXXXXOOO",
    "XOXOOXOXXOXXXOXXOOOXOXXXO",
    "OOXOXXOXXXXOOXOOXOXOOXXOX",
    "XXOOXOXXOXXXXOXXOXXXXOOOO",
    "XOXOXXXXOXOXOOXOOOXOOOXOX",
    "OXXOOXXOOOOOXOXXXXXOOXOXX",
    "OXOXXOOXOOXOOXOXOOOXXXOOX",
    "OXXXXOXOXOXXOXOOOXOOOXOXO",
    "XXXOXOXOOOOOXXXXOOOOXXXOX",
];

/// Play `points` for X, with O answering from `replies` in between.
fn play_line(points: &[Point], replies: &[Point]) -> (GameState, Vec<Verdict>) {
    let mut state = GameState::initial();
    let mut verdicts = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        verdicts.push(state.apply_move(p, Player::X).unwrap());
        if i + 1 < points.len() {
            state.apply_move(replies[i], Player::O).unwrap();
        }
    }
    (state, verdicts)
}

fn far_replies() -> Vec<Point> {
    vec![
        Point::new(0, 4, 4, 0),
        Point::new(1, 4, 4, 0),
        Point::new(2, 4, 4, 1),
        Point::new(4, 3, 4, 0),
    ]
}

#[test]
fn test_axis_line_wins_on_fifth_move() {
    let line: Vec<Point> = (0..5).map(|x| Point::new(x, 0, 0, 0)).collect();
    let (state, verdicts) = play_line(&line, &far_replies());

    assert!(verdicts[..4].iter().all(|&v| v == Verdict::NoWin));
    assert_eq!(verdicts[4], Verdict::Win(Player::X));
    assert_eq!(state.phase(), Phase::Decided);
    assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
}

#[test]
fn test_main_diagonal_wins_on_fifth_move() {
    let line: Vec<Point> = (0..5).map(|i| Point::new(i, i, i, i)).collect();
    let (_, verdicts) = play_line(&line, &far_replies());

    assert!(verdicts[..4].iter().all(|&v| v == Verdict::NoWin));
    assert_eq!(verdicts[4], Verdict::Win(Player::X));
}

#[test]
fn test_mixed_direction_diagonal_wins_out_of_order() {
    // direction (1, -1, 0, 1), filled from both ends toward the middle
    let line = [
        Point::new(0, 4, 1, 0),
        Point::new(4, 0, 1, 4),
        Point::new(1, 3, 1, 1),
        Point::new(3, 1, 1, 3),
        Point::new(2, 2, 1, 2),
    ];
    let replies = [
        Point::new(0, 0, 0, 0),
        Point::new(0, 0, 0, 1),
        Point::new(0, 0, 0, 2),
        Point::new(0, 0, 0, 3),
    ];
    let (_, verdicts) = play_line(&line, &replies);
    assert_eq!(verdicts[4], Verdict::Win(Player::X));
}

#[test]
fn test_non_collinear_pair_is_no_win() {
    let mut state = GameState::initial();
    assert_eq!(state.play(Point::new(0, 0, 0, 0)), Ok(Verdict::NoWin));
    state.play(Point::new(4, 4, 4, 4)).unwrap();
    assert_eq!(state.play(Point::new(0, 1, 2, 3)), Ok(Verdict::NoWin));
    assert_eq!(state.phase(), Phase::AwaitingMove);
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_four_in_a_row_does_not_win() {
    let line: Vec<Point> = (0..4).map(|z| Point::new(2, 2, z, 2)).collect();
    let (state, verdicts) = play_line(&line, &far_replies());
    assert!(verdicts.iter().all(|&v| v == Verdict::NoWin));
    assert!(!state.is_terminal());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let owner = |p: Point| -> Player {
        let [x, y, z, w] = p.coords();
        let row = DRAWN_LAYOUT[(x * 5 + y) as usize].as_bytes();
        if row[(z * 5 + w) as usize] == b'X' {
            Player::X
        } else {
            Player::O
        }
    };
    let xs: Vec<Point> = Point::all().filter(|&p| owner(p) == Player::X).collect();
    let os: Vec<Point> = Point::all().filter(|&p| owner(p) == Player::O).collect();
    assert_eq!((xs.len(), os.len()), (313, 312));

    let mut state = GameState::initial();
    let mut last = Verdict::NoWin;
    for (i, &p) in xs.iter().enumerate() {
        last = state.play(p).unwrap();
        if let Some(&reply) = os.get(i) {
            assert_eq!(last, Verdict::NoWin);
            assert_eq!(state.play(reply), Ok(Verdict::NoWin));
        }
    }

    assert_eq!(last, Verdict::Draw);
    assert!(state.is_full());
    assert_eq!(state.move_count(), CELLS);
    assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    assert_eq!(state.status(), "Draw... nobody wins!");
}

#[test]
fn test_reset_clears_everything() {
    let line: Vec<Point> = (0..5).map(|y| Point::new(1, y, 3, 3)).collect();
    let (mut state, _) = play_line(&line, &far_replies());
    assert!(state.is_terminal());

    state.reset();
    for p in Point::all() {
        assert_eq!(state.occupant(p), Ok(Cell::Empty));
    }
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.phase(), Phase::AwaitingMove);
    assert!(state.history().is_empty());

    // same opening works as on a fresh game
    assert_eq!(state.play(Point::new(1, 0, 3, 3)), Ok(Verdict::NoWin));
    assert_eq!(state.occupant(Point::new(1, 0, 3, 3)), Ok(Cell::X));
}

#[test]
fn test_occupied_cell_is_rejected_without_passing_turn() {
    let mut state = GameState::initial();
    let p = Point::new(3, 1, 4, 1);
    state.play(p).unwrap();
    let before = state.clone();

    assert_eq!(
        state.apply_move(p, Player::O),
        Err(MoveError::CellOccupied(p))
    );
    assert_eq!(state.occupant(p), Ok(Cell::X));
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state, before);
}

#[test]
fn test_moves_after_decision_are_rejected() {
    let line: Vec<Point> = (0..5).map(|w| Point::new(4, 4, 0, w)).collect();
    let replies = [
        Point::new(0, 0, 0, 0),
        Point::new(0, 0, 1, 1),
        Point::new(0, 0, 2, 3),
        Point::new(1, 0, 0, 0),
    ];
    let (mut state, _) = play_line(&line, &replies);
    let before = state.clone();
    assert_eq!(state.apply_move(Point::new(2, 2, 2, 2), Player::O), Err(MoveError::GameOver));
    assert_eq!(state, before);
}
