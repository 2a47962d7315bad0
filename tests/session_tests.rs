use tui_2048::core::{
    has_available_move, ActionOutcome, GameRng, GameSession, Rules, ScriptedRng,
};
use tui_2048::types::{Direction, GameAction, GamePhase};

/// Try each direction in turn until one is accepted.
fn play_any<R: tui_2048::core::TileRng>(s: &mut GameSession<R>) -> Option<ActionOutcome> {
    for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
        let out = s.apply_action(GameAction::Move(dir));
        if matches!(out, ActionOutcome::Moved(_)) {
            return Some(out);
        }
    }
    None
}

#[test]
fn small_board_reaches_target_and_continues() {
    // 2x2 board, target 4: the opening pair of 2s merges straight into it.
    let rules = Rules::new(2, 4).unwrap();
    let mut s = GameSession::new(rules, ScriptedRng::first_cell(), 0).unwrap();
    assert_eq!(s.apply_action(GameAction::Confirm), ActionOutcome::Started);

    match s.apply_action(GameAction::Move(Direction::Left)) {
        ActionOutcome::Moved(summary) => {
            assert!(summary.reached_winning_value);
            assert_eq!(summary.score_delta, 4);
            assert!(!summary.game_over);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(s.win_pending());
    assert_eq!(s.grid().to_rows(), vec![vec![4, 2], vec![0, 0]]);

    // The banner blocks moves until dismissed.
    assert_eq!(s.apply_action(GameAction::Move(Direction::Down)), ActionOutcome::Ignored);
    assert_eq!(s.apply_action(GameAction::Continue), ActionOutcome::Continued);
    assert_eq!(s.apply_action(GameAction::Continue), ActionOutcome::Ignored);

    assert_eq!(s.apply_action(GameAction::Move(Direction::Left)), ActionOutcome::NoMove);
    assert!(matches!(
        s.apply_action(GameAction::Move(Direction::Down)),
        ActionOutcome::Moved(_)
    ));
    assert_eq!(s.moves(), 2);
}

#[test]
fn confirm_dismisses_win_banner() {
    let rules = Rules::new(2, 4).unwrap();
    let mut s = GameSession::new(rules, ScriptedRng::first_cell(), 0).unwrap();
    s.start();
    s.apply_action(GameAction::Move(Direction::Right));
    assert!(s.win_pending());
    assert!(!s.snapshot().playable());

    assert_eq!(s.apply_action(GameAction::Confirm), ActionOutcome::Continued);
    assert_eq!(s.phase(), GamePhase::Playing);
    assert!(s.snapshot().playable());
}

#[test]
fn random_playout_ends_in_game_over() {
    let rules = Rules::new(2, 2048).unwrap();
    let mut s = GameSession::new(rules, GameRng::new(7), 0).unwrap();
    s.start();

    let mut steps = 0;
    while !s.is_game_over() {
        assert!(play_any(&mut s).is_some(), "a playable board must accept some move");
        steps += 1;
        assert!(steps < 10_000);
    }

    assert_eq!(s.phase(), GamePhase::GameOver);
    assert!(!has_available_move(s.grid()));
    assert!(!s.win_pending());
    assert_eq!(s.high_score(), s.score());
    assert!(s.is_new_high_score());

    // Nothing moves after the game ends; confirming starts over.
    assert_eq!(s.apply_action(GameAction::Move(Direction::Left)), ActionOutcome::Ignored);
    let final_score = s.score();
    assert_eq!(s.apply_action(GameAction::Confirm), ActionOutcome::Restarted);
    assert_eq!(s.phase(), GamePhase::Playing);
    assert_eq!(s.score(), 0);
    assert_eq!(s.high_score(), final_score);
    assert_eq!(s.grid().occupied_count(), 2);
}

#[test]
fn high_score_is_monotonic() {
    let mut s = GameSession::new(Rules::default(), ScriptedRng::first_cell(), 100).unwrap();
    s.start();
    s.apply_action(GameAction::Move(Direction::Left));
    assert_eq!(s.score(), 4);
    assert_eq!(s.high_score(), 100);
    assert!(!s.is_new_high_score());

    s.apply_action(GameAction::Restart);
    assert_eq!(s.high_score(), 100);
}

#[test]
fn seeded_sessions_replay_identically() {
    let rules = Rules::new(4, 2048).unwrap();
    let mut a = GameSession::new(rules, GameRng::new(42), 0).unwrap();
    let mut b = GameSession::new(rules, GameRng::new(42), 0).unwrap();
    a.start();
    b.start();

    for _ in 0..50 {
        let out_a = play_any(&mut a);
        let out_b = play_any(&mut b);
        assert_eq!(out_a, out_b);
        assert_eq!(a.grid(), b.grid());
        if out_a.is_none() || a.is_game_over() {
            break;
        }
    }
    assert_eq!(a.score(), b.score());
}
