use tui_2028::core::{GameSnapshot, GameState, MotionSnapshot, Sprite};
use tui_2028::term::{tile_style, AnchorY, FrameBuffer, GameView, Viewport};
use tui_2028::types::{Direction, GameStatus, Pos, TileId};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn empty_snapshot() -> GameSnapshot {
    GameSnapshot::default()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = view.frame_size();
    let fb = view.render(&empty_snapshot(), Viewport::new(w, h + 2));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_value_in_tile() {
    let mut snap = empty_snapshot();
    snap.cells[1][2] = 128;

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);

    let (x, y) = view.cell_origin(vp, Pos::new(1, 2));
    // 7 wide, 3 tall: "128" starts two columns in, on the middle row.
    let row: Vec<char> = fb.row_text(y + 1).chars().collect();
    let text: String = row[x as usize..x as usize + 7].iter().collect();
    assert_eq!(text, "  128  ");
    assert_eq!(fb.get(x, y).unwrap().style.bg, tile_style(128).bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot(0);
    snap.score = 1234;
    snap.best = 5678;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let view = GameView::default();
    let (w, _) = view.frame_size();
    let fb = view.render(&empty_snapshot(), Viewport::new(w, 24));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_status_lines() {
    let mut snap = empty_snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let all = screen_text(&view.render(&snap, vp));
    assert!(!all.contains("YOU WIN"));
    assert!(all.contains("q quit"));

    snap.status = GameStatus::Won;
    assert!(screen_text(&view.render(&snap, vp)).contains("YOU WIN! keep going"));

    snap.status = GameStatus::Over;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));
}

#[test]
fn term_view_interpolates_sliding_tiles() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = empty_snapshot();
    snap.cells[0][3] = 2;

    let mut motion = MotionSnapshot {
        sprites: Default::default(),
        progress: 0.0,
    };
    motion.sprites.push(Sprite {
        id: TileId(1),
        value: 2,
        from: Pos::new(0, 3),
        to: Pos::new(0, 0),
        removed: false,
    });
    snap.motion = Some(motion);

    let start = view.cell_origin(vp, Pos::new(0, 3));
    let end = view.cell_origin(vp, Pos::new(0, 0));
    let tile_bg = tile_style(2).bg;

    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(start.0, start.1).unwrap().style.bg, tile_bg);
    assert_ne!(fb.get(end.0, end.1).unwrap().style.bg, tile_bg);

    snap.motion.as_mut().unwrap().progress = 1.0;
    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(end.0, end.1).unwrap().style.bg, tile_bg);
    assert_ne!(fb.get(start.0, start.1).unwrap().style.bg, tile_bg);
}

#[test]
fn term_view_renders_live_game_motion() {
    let mut state = GameState::new(2028);
    assert!(Direction::ALL.into_iter().any(|d| state.begin_move(d, 0)));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    for now in [0, 30, 60, 90, 120] {
        let snap = state.snapshot(now);
        assert!(snap.motion.is_some());
        view.render_into(&snap, Viewport::new(60, 22), &mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 22));
    }
}
