//! Session lifecycle: no-op moves, latching, scoring and determinism.

use kana_merge::core::{GameSession, Grid, MemoryScoreStore, RandomSource, SimpleRng};
use kana_merge::types::{Direction, GameAction, Phrase, SessionStatus, GRID_SIZE, PHRASE_GOAL};

const EMPTY_ROW: [Option<u8>; GRID_SIZE] = [None; GRID_SIZE];

/// Always the top of the range: first empty cell, level 0 spawns.
struct MaxRng;

impl RandomSource for MaxRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }
}

fn ohayou() -> Phrase {
    Phrase::from_pairs(
        "おはよう",
        "ohayou",
        &[("お", "o"), ("は", "ha"), ("よ", "yo"), ("う", "u")],
    )
    .unwrap()
}

fn session(seed: u32) -> GameSession {
    GameSession::new(ohayou(), SimpleRng::new(seed), MemoryScoreStore::new())
}

#[test]
fn new_session_starts_with_two_tiles() {
    let s = session(7);
    assert_eq!(s.grid().tile_count(), 2);
    assert_eq!(s.score(), 0);
    assert_eq!(s.status(), SessionStatus::Playing);
    assert!(s.grid().tiles().all(|t| t.level <= 1));
}

#[test]
fn ineffective_move_changes_nothing() {
    let mut s = session(7);
    s.restore(
        Grid::from_levels([[Some(0), Some(0), None, None], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW]),
        12,
        1,
    );
    let before = s.snapshot();

    let report = s.apply_move(Direction::Left);
    assert!(!report.effective);
    assert_eq!(report.spawned, None);
    assert_eq!(s.snapshot(), before);

    let report = s.apply_move(Direction::Up);
    assert!(!report.effective);
    assert_eq!(s.snapshot(), before);
}

#[test]
fn completion_on_the_last_goal_wins_and_latches() {
    let mut s = session(3);
    s.restore(
        Grid::from_levels([[Some(2), Some(3), None, None], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW]),
        0,
        PHRASE_GOAL - 1,
    );

    let report = s.apply_move(Direction::Left);
    assert!(report.effective);
    assert_eq!(report.completions, 1);
    assert_eq!(report.points, 16);
    assert_eq!(report.status, SessionStatus::LevelWon);
    assert_eq!(s.phrases_completed(), PHRASE_GOAL);
    assert!(s.is_level_won());

    let frozen = s.snapshot();
    for d in Direction::ALL {
        assert!(!s.apply_move(d).effective);
    }
    assert_eq!(s.snapshot(), frozen);

    assert!(s.apply_action(GameAction::NewGame));
    assert_eq!(s.status(), SessionStatus::Playing);
    assert_eq!(s.phrases_completed(), 0);
    assert_eq!(s.score(), 0);
    assert_eq!(s.best_score(), 16);
}

#[test]
fn filling_the_last_gap_without_pairs_is_game_over() {
    let mut s = GameSession::new(ohayou(), MaxRng, MemoryScoreStore::new());
    s.restore(
        Grid::from_levels([
            [Some(0), Some(2), Some(0), None],
            [Some(2), Some(0), Some(2), Some(0)],
            [Some(0), Some(2), Some(0), Some(2)],
            [Some(2), Some(0), Some(2), Some(0)],
        ]),
        0,
        0,
    );
    assert_eq!(s.status(), SessionStatus::Playing);

    let report = s.apply_move(Direction::Right);
    assert!(report.effective);
    assert_eq!(report.spawned, Some((0, 0)));
    assert_eq!(s.grid().tile(0, 0).map(|t| t.level), Some(0));
    assert_eq!(report.status, SessionStatus::GameOver);
    assert!(s.is_game_over());
    assert!(!s.apply_move(Direction::Left).effective);
}

#[test]
fn ids_stay_unique_and_best_never_drops() {
    let mut s = GameSession::new(ohayou(), SimpleRng::new(2024), MemoryScoreStore::with_best(40));
    let mut best = s.best_score();
    assert_eq!(best, 40);

    let pattern = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..400 {
        if s.status().is_terminal() {
            s.reset_game();
        }
        s.apply_move(pattern[i % pattern.len()]);
        assert!(s.grid().ids_unique());
        assert!(s.best_score() >= best);
        assert!(s.best_score() >= s.score());
        best = s.best_score();
    }
    assert_eq!(s.store().writes() > 0, best > 40);
}

#[test]
fn same_seed_same_game() {
    let moves = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    let mut a = session(99);
    let mut b = session(99);
    for i in 0..50 {
        let d = moves[(i * 3) % moves.len()];
        assert_eq!(a.apply_move(d), b.apply_move(d));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn single_syllable_phrase_degrades_gracefully() {
    let phrase = Phrase::from_pairs("ん", "n", &[("ん", "n")]).unwrap();
    let mut s = GameSession::new(phrase, SimpleRng::new(5), MemoryScoreStore::new());
    for d in Direction::ALL.iter().cycle().take(40) {
        let report = s.apply_move(*d);
        assert_eq!(report.completions, 0);
        assert!(s.grid().tiles().all(|t| t.level == 0));
    }
}
