//! Campaign flow over the built-in classroom phrases.

use kana_merge::core::{classroom_phrases, Campaign, Grid, MemoryScoreStore, SimpleRng};
use kana_merge::types::{Direction, EngineError, GameAction, SessionStatus, GRID_SIZE, PHRASE_GOAL};

fn campaign(level: usize) -> Campaign {
    Campaign::new(classroom_phrases().unwrap(), level, SimpleRng::new(11), MemoryScoreStore::new())
        .unwrap()
}

/// Leave the current level one completion short, then complete it.
fn win_current_level(c: &mut Campaign) {
    let top = c.phrase().len() as u8;
    let empty = [None; GRID_SIZE];
    c.session_mut().restore(
        Grid::from_levels([[Some(top - 2), Some(top - 1), None, None], empty, empty, empty]),
        0,
        PHRASE_GOAL - 1,
    );
    assert!(c.apply_action(GameAction::Move(Direction::Left)));
    assert_eq!(c.session().status(), SessionStatus::LevelWon);
}

#[test]
fn classroom_campaign_has_five_levels() {
    let c = campaign(0);
    assert_eq!(c.level_count(), 5);
    assert!(c.phrases().iter().all(|p| p.len() >= 2));
}

#[test]
fn out_of_range_start_fails_fast() {
    let err = Campaign::new(classroom_phrases().unwrap(), 5, SimpleRng::new(1), MemoryScoreStore::new())
        .err();
    assert_eq!(err, Some(EngineError::LevelOutOfRange { index: 5, len: 5 }));
}

#[test]
fn play_through_every_level() {
    let mut c = campaign(0);
    for level in 0..c.level_count() {
        assert_eq!(c.level(), level);
        assert_eq!(c.snapshot().game.score, 0);
        win_current_level(&mut c);
        assert!(c.apply_action(GameAction::NextLevel));
    }
    assert!(c.is_complete());
    assert!(c.snapshot().complete);
    assert!(!c.apply_action(GameAction::Move(Direction::Left)));

    assert!(c.apply_action(GameAction::NextLevel));
    assert!(!c.is_complete());
    assert_eq!(c.level(), 0);
    assert_eq!(c.session().status(), SessionStatus::Playing);
}

#[test]
fn next_level_needs_a_win() {
    let mut c = campaign(2);
    assert!(!c.apply_action(GameAction::NextLevel));
    assert_eq!(c.level(), 2);
}

#[test]
fn selecting_a_level_resets_the_board_but_keeps_best() {
    let mut c = campaign(0);
    win_current_level(&mut c);
    let best = c.session().best_score();

    c.select_level(3).unwrap();
    assert_eq!(c.level(), 3);
    assert_eq!(c.session().score(), 0);
    assert_eq!(c.session().phrases_completed(), 0);
    assert_eq!(c.session().grid().tile_count(), 2);
    assert_eq!(c.session().best_score(), best);
    assert_eq!(c.goal_progress(), (0, PHRASE_GOAL));
}
