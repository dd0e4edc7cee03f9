//! Terminal Kana Merge runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The game is turn-based, so the loop blocks on input between frames.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use kana_merge::core::{classroom_phrases, Campaign, MemoryScoreStore, ScoreStore, SimpleRng};
use kana_merge::input::{handle_key_event, should_quit};
use kana_merge::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use kana_merge::{logging, AppConfig, JsonFileStore};

type Game = Campaign<SimpleRng, Box<dyn ScoreStore>>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut campaign = build_campaign(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut campaign);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn build_campaign(config: &AppConfig) -> Result<Game> {
    let store: Box<dyn ScoreStore> = if config.save_disabled {
        Box::new(MemoryScoreStore::new())
    } else {
        Box::new(JsonFileStore::new(&config.best_score_path))
    };
    info!(
        "[Main] seed={} level={} store={}",
        config.seed,
        config.level,
        if config.save_disabled {
            "memory".to_string()
        } else {
            config.best_score_path.display().to_string()
        }
    );

    let phrases = classroom_phrases().context("built-in phrase table is invalid")?;
    Campaign::new(phrases, config.level_index(), SimpleRng::new(config.seed), store)
        .with_context(|| format!("cannot start on KANA_MERGE_LEVEL={}", config.level))
}

fn run(term: &mut TerminalRenderer, campaign: &mut Game) -> Result<()> {
    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&campaign.snapshot(), campaign.phrase(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!("[Main] Quit at level {}", campaign.level() + 1);
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    campaign.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
