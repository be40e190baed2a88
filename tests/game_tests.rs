use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use reversi::{
    core::{Board, GameConfig, GameState, Loc, MoveFault, Outcome, Side},
    heuristics::{PositionalHeuristic, RandomHeuristic},
    machine_move, search,
};
use test_case::test_case;

#[test]
fn test_new_game_human_first() {
    let state = GameState::new(Side::Human);

    assert_eq!(state.tile_count(Side::Human), 2);
    assert_eq!(state.tile_count(Side::Machine), 2);
    assert_eq!(state.next(), Some(Side::Human));
    assert!(!state.game_over());

    assert_eq!(state.slot_owner(Loc::new(3, 4)), Some(Side::Human));
    assert_eq!(state.slot_owner(Loc::new(4, 3)), Some(Side::Human));
    assert_eq!(state.slot_owner(Loc::new(3, 3)), Some(Side::Machine));
    assert_eq!(state.slot_owner(Loc::new(4, 4)), Some(Side::Machine));
    assert_eq!(state.slot_owner(Loc::new(0, 0)), None);
}

#[test]
fn test_opening_move_and_machine_reply() {
    let state = GameState::new(Side::Human);

    let state = state.play(Loc::new(2, 3)).unwrap().unwrap();
    assert_eq!(state.tile_count(Side::Human), 4);
    assert_eq!(state.tile_count(Side::Machine), 1);
    assert_eq!(state.slot_owner(Loc::new(3, 3)), Some(Side::Human));
    assert_eq!(state.next(), Some(Side::Machine));

    let state = machine_move(&state, &GameConfig::default(), &mut PositionalHeuristic).unwrap();
    assert_eq!(state.board.occupied(), 6);
    assert!(state.tile_count(Side::Machine) >= 2);
    assert_eq!(state.next(), Some(Side::Human));
}

#[test]
fn test_machine_must_pass() {
    // Corner tiles cannot be flanked, so after (0,2) the machine is stuck
    let state = GameState::from_fen("XO6/8/8/8/8/8/8/XO6 x x").unwrap();
    let state = state.play(Loc::new(0, 2)).unwrap().unwrap();

    assert!(!state.board.has_move(Side::Machine));
    assert_eq!(state.side_to_move, Side::Machine);
    assert_eq!(state.next(), Some(Side::Human));

    // Asked anyway, the machine passes without touching the board
    let config = GameConfig::new(2, Side::Human).unwrap();
    let passed = machine_move(&state, &config, &mut PositionalHeuristic).unwrap();
    assert_eq!(passed.board, state.board);
    assert_eq!(passed.side_to_move, Side::Human);
    assert_eq!(passed.next(), Some(Side::Human));

    let state = passed.play(Loc::new(7, 2)).unwrap().unwrap();
    assert!(state.game_over());
    assert_eq!(state.winner(), Some(Outcome::Winner(Side::Human)));
}

#[test_case("XXX5/8/8/8/8/8/8/8", Outcome::Winner(Side::Human))]
#[test_case("X7/8/8/8/8/8/8/6OO", Outcome::Winner(Side::Machine))]
#[test_case("X7/8/8/8/8/8/8/7O", Outcome::Draw)]
fn test_nobody_can_move(fen: &str, expected: Outcome) {
    let state = GameState::from_fen(fen).unwrap();

    assert!(state.game_over());
    assert_eq!(state.next(), None);
    assert_eq!(state.winner(), Some(expected));
    assert_eq!(state.play(Loc::new(3, 3)), Err(MoveFault::GameOver));
}

#[test_case(2, 3)]
#[test_case(3, 2)]
#[test_case(4, 5)]
#[test_case(5, 4)]
fn test_human_openings(row: i32, col: i32) {
    let state = GameState::new(Side::Human);
    assert!(state.legal_move(Loc::new(row, col), Side::Human));

    let next = state.play(Loc::new(row, col)).unwrap().unwrap();
    assert_eq!(next.tile_count(Side::Human), 4);
}

#[test]
fn test_only_four_openings() {
    let board = Board::start(Side::Human);
    let moves: Vec<Loc> = board.legal_moves(Side::Human).collect();

    assert_eq!(
        moves,
        vec![Loc::new(2, 3), Loc::new(3, 2), Loc::new(4, 5), Loc::new(5, 4)]
    );
}

#[test]
fn test_occupied_cells_are_never_legal() {
    let board = Board::start(Side::Human);
    for loc in board.locs(Side::Human).into_iter().chain(board.locs(Side::Machine)) {
        assert!(!board.legal_move(loc, Side::Human));
        assert!(!board.legal_move(loc, Side::Machine));
    }
}

#[test]
fn test_queries_are_idempotent() {
    let state = GameState::new(Side::Machine);
    let copy = state;

    for _ in 0..3 {
        assert_eq!(state.next(), Some(Side::Machine));
        assert_eq!(state.tile_count(Side::Human), 2);
        assert_eq!(state.winner(), None);
        assert_eq!(PositionalHeuristic::evaluate(&state.board), -154.0);
    }
    assert_eq!(state, copy);
}

#[test]
fn test_apply_move_is_deterministic() {
    let board = Board::start(Side::Machine);
    for loc in board.legal_moves(Side::Machine) {
        assert_eq!(
            board.apply_move(loc, Side::Machine),
            board.apply_move(loc, Side::Machine)
        );
    }
}

#[test]
fn test_level_one_picks_best_single_ply() {
    let board = Board::start(Side::Machine);
    let result = search(&board, 1, &mut PositionalHeuristic);

    let best = board
        .legal_moves(Side::Machine)
        .map(|loc| PositionalHeuristic::evaluate(&board.apply_move(loc, Side::Machine)))
        .fold(f64::NEG_INFINITY, f64::max);

    assert_eq!(result.eval, Some(best));
}

#[test_case(1)]
#[test_case(7)]
#[test_case(63)]
fn test_random_playouts_keep_tile_counts(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heuristic = RandomHeuristic::with_seed(seed);
    let config = GameConfig::new(1, Side::Human).unwrap();

    let first = if seed % 2 == 0 { Side::Human } else { Side::Machine };
    let mut state = GameState::new(first);

    while let Some(side) = state.next() {
        let before = state.board.occupied();

        state = match side {
            Side::Human => {
                let moves: Vec<Loc> = state.board.legal_moves(Side::Human).collect();
                let loc = *moves.choose(&mut rng).unwrap();
                state.play(loc).unwrap().unwrap()
            }
            Side::Machine => machine_move(&state, &config, &mut heuristic).unwrap(),
        };

        let occupied = state.board.occupied();
        assert_eq!(occupied, before + 1);
        assert!(occupied <= 64);
        assert_eq!(
            state.tile_count(Side::Human) + state.tile_count(Side::Machine),
            occupied
        );
    }

    assert!(state.game_over());
    assert!(state.winner().is_some());
}
