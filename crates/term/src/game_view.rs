//! GameView: maps a campaign snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::CampaignSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phrase, Tile, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows above the board frame: title line plus a spacer.
const HEADER_H: u16 = 2;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Tile background per level; levels past the table reuse the last entry.
const LEVEL_BG: [Rgb; 8] = [
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
];

fn tile_style(tile: &Tile) -> CellStyle {
    let bg = LEVEL_BG[(tile.level as usize).min(LEVEL_BG.len() - 1)];
    let fg = if tile.level < 2 {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    };
    let style = CellStyle::new(fg, bg);
    if tile.is_new || tile.is_merged {
        style.bold()
    } else {
        style
    }
}

/// Terminal renderer for the kana board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Room for a double-width glyph plus romaji like "shi" with padding.
        Self {
            cell_w: 8,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(4),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame size in terminal cells, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_SIZE as u16) * self.cell_w + 2,
            (GRID_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &CampaignSnapshot,
        phrase: &Phrase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let block_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + HEADER_H) / 2,
            AnchorY::Top => 0,
        };
        let start_y = block_y + HEADER_H;

        self.draw_header(fb, snap, phrase, start_x, block_y);

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let board_bg = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            board_bg,
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let px = start_x + 1 + (col as u16) * self.cell_w;
                let py = start_y + 1 + (row as u16) * self.cell_h;
                match snap.game.grid.tile(row, col) {
                    Some(tile) => self.draw_tile(fb, px, py, &tile, phrase),
                    None => {
                        fb.put_char(px + self.cell_w / 2 - 1, py + self.cell_h / 2, '·', board_bg);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, phrase, viewport, start_x, start_y, frame_w);

        let hint = CellStyle::new(Rgb::new(140, 140, 150), SCREEN_BG).dim();
        fb.put_str_centered(
            start_x,
            start_y + frame_h,
            frame_w,
            "arrows/wasd move  r restart  q quit",
            hint,
        );

        if snap.complete {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "ALL PHRASES COMPLETE", "press r to play again");
        } else if snap.game.is_level_won() {
            let next = if snap.level + 1 < snap.level_count {
                "press n for the next phrase"
            } else {
                "press n to finish"
            };
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "LEVEL COMPLETE", next);
        } else if snap.game.is_game_over() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", "press r to retry");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &CampaignSnapshot, phrase: &Phrase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, phrase, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &CampaignSnapshot,
        phrase: &Phrase,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut cx = x;
        cx += fb.put_str(cx, y, "LEVEL ", label);
        cx += fb.put_u32(cx, y, (snap.level as u32) + 1, value);
        cx += fb.put_str(cx, y, "/", value);
        cx += fb.put_u32(cx, y, snap.level_count as u32, value);
        cx += fb.put_str(cx, y, "  ", value);
        cx += fb.put_str(cx, y, phrase.name(), label);
        cx += fb.put_str(cx, y, " (", value);
        cx += fb.put_str(cx, y, phrase.romaji(), value);
        fb.put_str(cx, y, ")", value);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, tile: &Tile, phrase: &Phrase) {
        let style = tile_style(tile);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let (glyph, romaji) = match phrase.syllable(tile.level) {
            Some(s) => (s.glyph.as_str(), s.romaji.as_str()),
            None => ("?", ""),
        };
        let mid = py + self.cell_h / 2;
        fb.put_str_centered(px, mid, self.cell_w, glyph, style);
        if self.cell_h >= 3 {
            fb.put_str_centered(px, mid + 1, self.cell_w, romaji, style.dim());
        }
        if tile.is_new {
            fb.put_char(px, py, '+', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &CampaignSnapshot,
        phrase: &Phrase,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.game.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.game.best_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        let (done, goal) = snap.game.goal_progress();
        let mut cx = panel_x;
        cx += fb.put_str(cx, y, "collect ", value);
        if let Some(last) = phrase.final_syllable() {
            cx += fb.put_str(cx, y, &last.glyph, label);
            cx += fb.put_str(cx, y, " ", value);
        }
        cx += fb.put_u32(cx, y, done, value);
        cx += fb.put_str(cx, y, "/", value);
        fb.put_u32(cx, y, goal, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PHRASE", label);
        y = y.saturating_add(1);
        let mut cx = panel_x;
        for (i, syllable) in phrase.syllables().iter().enumerate() {
            if i > 0 {
                cx += fb.put_char(cx, y, '>', value.dim());
            }
            cx += fb.put_str(cx, y, &syllable.glyph, value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.game.moves, value);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let banner = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let sub = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(start_x + 1, mid_y.saturating_sub(1), frame_w - 2, 3, ' ', sub);
        fb.put_str_centered(start_x, mid_y.saturating_sub(1), frame_w, title, banner);
        fb.put_str_centered(start_x, mid_y + 1, frame_w, hint, sub);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
