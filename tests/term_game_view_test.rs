use kana_merge::core::{classroom_phrases, Campaign, Grid, MemoryScoreStore, SimpleRng};
use kana_merge::term::{AnchorY, GameView, Viewport, WIDE_CONTINUATION};
use kana_merge::types::GRID_SIZE;

fn campaign() -> Campaign {
    Campaign::new(classroom_phrases().unwrap(), 0, SimpleRng::new(1), MemoryScoreStore::new())
        .unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let c = campaign();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = view.frame_size();
    let fb = view.render(&c.snapshot(), c.phrase(), Viewport::new(w, h + 2));

    // Board frame sits below the two header rows.
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h + 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h + 1).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_kana_two_columns_wide() {
    let mut c = campaign();
    let empty = [None; GRID_SIZE];
    c.session_mut()
        .restore(Grid::from_levels([[Some(0), None, None, None], empty, empty, empty]), 0, 0);

    let view = GameView::new(8, 3).with_anchor_y(AnchorY::Top);
    let fb = view.render(&c.snapshot(), c.phrase(), Viewport::new(34, 16));

    // Cell (0,0) spans columns 1..9 and rows 3..6; the glyph is centered on the middle row.
    let glyph = &c.phrase().syllables()[0].glyph;
    let y = 4;
    let x = (1..9)
        .find(|&x| fb.get(x, y).unwrap().ch != ' ')
        .expect("tile glyph drawn");
    assert_eq!(fb.get(x, y).unwrap().ch.to_string(), *glyph);
    assert_eq!(fb.get(x + 1, y).unwrap().ch, WIDE_CONTINUATION);
    assert!(fb.row_text(y + 1).contains(&c.phrase().syllables()[0].romaji));
}

#[test]
fn term_view_shows_progress_panel() {
    let c = campaign();
    let fb = GameView::default().render(&c.snapshot(), c.phrase(), Viewport::new(100, 30));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(text.contains("SCORE"));
    assert!(text.contains("BEST"));
    assert!(text.contains("LEVEL 1/5"));
    assert!(text.contains(c.phrase().name()));
    assert!(text.contains("0/5"));
}
