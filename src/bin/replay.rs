//! Headless replay: plays a move string from a seed and prints JSON lines.
//!
//! Usage: `kana-replay <seed> <level> <moves>`, where `level` is 1-based and
//! `moves` is a string over `u d l r`. Each move prints one object with the move
//! report and the resulting snapshot.

use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use log::info;
use serde_json::json;

use kana_merge::core::{classroom_phrases, Campaign, MemoryScoreStore, SimpleRng};
use kana_merge::logging;
use kana_merge::types::Direction;

const USAGE: &str = "usage: kana-replay <seed> <level> <moves>";

fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| match Direction::from_char(c) {
            Some(d) => Ok(d),
            None => bail!("bad move {:?} at position {} (expected u, d, l or r)", c, i),
        })
        .collect()
}

fn main() -> Result<()> {
    logging::init_stderr()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [seed, level, moves] = args.as_slice() else {
        bail!(USAGE);
    };

    let seed: u32 = seed
        .parse()
        .with_context(|| format!("invalid seed {:?}", seed))?;
    let level: usize = level
        .parse()
        .with_context(|| format!("invalid level {:?}", level))?;
    if level == 0 {
        bail!("level is 1-based");
    }
    let moves = parse_moves(moves)?;

    let phrases = classroom_phrases().context("built-in phrase table is invalid")?;
    let mut campaign = Campaign::new(phrases, level - 1, SimpleRng::new(seed), MemoryScoreStore::new())
        .with_context(|| format!("cannot start on level {}", level))?;
    info!(
        "[Replay] seed={} level={} phrase={} moves={}",
        seed,
        level,
        campaign.phrase().romaji(),
        moves.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (index, direction) in moves.into_iter().enumerate() {
        let report = campaign.session_mut().apply_move(direction);
        let line = json!({
            "index": index,
            "move": direction.as_str(),
            "report": report,
            "snapshot": campaign.snapshot(),
        });
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive_moves() {
        let moves = parse_moves("uDl r").unwrap();
        assert_eq!(
            moves,
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn rejects_unknown_move() {
        let err = parse_moves("ulx").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }
}
