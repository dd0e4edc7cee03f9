use std::time::{SystemTime, UNIX_EPOCH};

use kana_merge::core::{GameSession, Grid, ScoreStore, SimpleRng};
use kana_merge::types::{Direction, Phrase, GRID_SIZE};
use kana_merge::JsonFileStore;

fn temp_path(name: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("kana-merge-it-{}-{}-{}.json", name, std::process::id(), nanos))
}

#[test]
fn best_score_survives_a_new_session() {
    let path = temp_path("session");
    let phrase = Phrase::from_pairs("はい", "hai", &[("は", "ha"), ("い", "i")]).unwrap();

    let mut first = GameSession::new(phrase.clone(), SimpleRng::new(4), JsonFileStore::new(&path));
    assert_eq!(first.best_score(), 0);
    let empty = [None; GRID_SIZE];
    first.restore(
        Grid::from_levels([[Some(0), Some(1), None, None], empty, empty, empty]),
        0,
        0,
    );
    let report = first.apply_move(Direction::Left);
    assert!(report.new_best);
    assert_eq!(first.best_score(), 4);
    assert_eq!(JsonFileStore::new(&path).load(), 4);

    let second = GameSession::new(phrase, SimpleRng::new(4), JsonFileStore::new(&path));
    assert_eq!(second.best_score(), 4);
    assert_eq!(second.score(), 0);

    let _ = std::fs::remove_file(path);
}
