use tui_2048::core::{GameRng, GameSession, GameSnapshot, Rules};
use tui_2048::term::{AnchorY, GameView, Theme, Viewport};
use tui_2048::types::GamePhase;

fn playing_snapshot() -> GameSnapshot {
    let mut snap = GameSnapshot::default();
    snap.phase = GamePhase::Playing;
    snap
}

#[test]
fn term_view_renders_board_border() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&playing_snapshot(), vp);

    // 4x4 board of 7x3 tiles with 1-cell gaps is 35x19 including the border,
    // centered with room for the side panel.
    let layout = view.layout(4, vp);
    assert_eq!((layout.frame_w, layout.frame_h), (35, 19));
    let (x, y) = (layout.x, layout.y);

    assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    assert_eq!(fb.get(x + 34, y).unwrap().ch, '┐');
    assert_eq!(fb.get(x, y + 18).unwrap().ch, '└');
    assert_eq!(fb.get(x + 34, y + 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_values() {
    let mut snap = playing_snapshot();
    snap.set_tile(0, 0, 2048);
    snap.set_tile(3, 3, 2);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);
    let layout = view.layout(4, vp);

    let (tx, ty) = view.tile_origin(&layout, 0, 0);
    let row = fb.row_string(ty + 1);
    let start = (tx + 1) as usize;
    let text: String = row.chars().skip(start).take(4).collect();
    assert_eq!(text, "2048");

    let (tx, ty) = view.tile_origin(&layout, 3, 3);
    assert_eq!(fb.get(tx + 3, ty + 1).unwrap().ch, '2');
}

#[test]
fn term_view_tile_colors_follow_theme() {
    let mut snap = playing_snapshot();
    snap.set_tile(1, 1, 8);

    for theme in [Theme::Light, Theme::Dark] {
        let view = GameView::default().with_theme(theme);
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snap, vp);
        let (tx, ty) = view.tile_origin(&view.layout(4, vp), 1, 1);
        assert_eq!(fb.get(tx, ty).unwrap().style.bg, theme.tile(8).bg);
    }
}

#[test]
fn term_view_huge_tile_shows_exponent() {
    let mut snap = playing_snapshot();
    snap.set_tile(0, 0, 1 << 24);

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);
    assert!(fb.to_text().contains("2^24"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = playing_snapshot();
    snap.score = 1234;
    snap.high_score = 5678;
    snap.moves = 42;

    let view = GameView::default();
    let text = view.render(&snap, Viewport::new(80, 24)).to_text();
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("BEST"));
    assert!(text.contains("5678"));
    assert!(text.contains("MOVES"));

    // Too narrow for the panel: the board still renders.
    let text = view.render(&snap, Viewport::new(36, 20)).to_text();
    assert!(!text.contains("SCORE"));
    assert!(text.contains('┌'));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let ready = GameSnapshot::default();
    assert!(view.render(&ready, vp).to_text().contains("PRESS SPACE"));

    let mut won = playing_snapshot();
    won.win_pending = true;
    let text = view.render(&won, vp).to_text();
    assert!(text.contains("YOU REACHED 2048!"));
    assert!(!text.contains("PRESS SPACE"));

    let mut over = playing_snapshot();
    over.phase = GamePhase::GameOver;
    over.score = 880;
    over.new_high_score = true;
    let text = view.render(&over, vp).to_text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("SCORE 880"));
    assert!(text.contains("NEW HIGH SCORE!"));

    over.new_high_score = false;
    assert!(!view.render(&over, vp).to_text().contains("NEW HIGH SCORE!"));

    assert!(!view.render(&playing_snapshot(), vp).to_text().contains("GAME OVER"));
}

#[test]
fn term_view_renders_larger_boards() {
    let rules = Rules::new(6, 2048).unwrap();
    let mut session = GameSession::new(rules, GameRng::new(3), 0).unwrap();
    session.start();
    let snap = session.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let layout = view.layout(6, vp);
    assert_eq!((layout.frame_w, layout.frame_h), (6 * 7 + 7 + 2, 6 * 3 + 7 + 2));

    let fb = view.render(&snap, vp);
    let corner = view.tile_origin(&layout, 5, 5);
    assert!(corner.0 + 7 < layout.x + layout.frame_w);
    assert_eq!(fb.get(layout.x + 50, layout.y + 26).unwrap().ch, '┘');
}

#[test]
fn term_view_tolerates_malformed_tile_values() {
    let mut snap = playing_snapshot();
    snap.set_tile(0, 0, 3);
    snap.set_tile(1, 1, 6);

    let view = GameView::default();
    let text = view.render(&snap, Viewport::new(80, 24)).to_text();
    assert!(text.contains('3'));
    assert!(text.contains('6'));
}
