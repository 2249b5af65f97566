//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, MotionSnapshot, Sprite};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Pos, GRID_SIZE};

/// Columns between neighbouring tiles.
const GAP_X: u16 = 1;
/// Rows between neighbouring tiles.
const GAP_Y: u16 = 1;
/// Lines reserved under the board for the status and help text.
const FOOTER_H: u16 = 2;

pub const WIN_TEXT: &str = "YOU WIN! keep going";
pub const OVER_TEXT: &str = "GAME OVER";
pub const HELP_TEXT: &str = "arrows/wasd move  r new  q quit";

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const SLOT_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

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

/// Colours for a tile of the given value.
///
/// Values past 2048 share one dark style.
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

/// Status line text for a game status.
pub fn status_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Active => None,
        GameStatus::Won => Some(WIN_TEXT),
        GameStatus::Over => Some(OVER_TEXT),
    }
}

/// A terminal renderer for the 4x4 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits six-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size including the border, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.cell_w + (n + 1) * GAP_X;
        let inner_h = n * self.cell_h + (n + 1) * GAP_Y;
        (inner_w + 2, inner_h + 2)
    }

    /// Top-left corner of the board frame within the viewport.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + FOOTER_H) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Top-left terminal cell of the tile slot at `pos`.
    pub fn cell_origin(&self, viewport: Viewport, pos: Pos) -> (u16, u16) {
        let (sx, sy) = self.board_origin(viewport);
        let (x, y) = self.slot_offset(pos);
        (sx + x, sy + y)
    }

    fn slot_offset(&self, pos: Pos) -> (u16, u16) {
        (
            1 + GAP_X + pos.col as u16 * (self.cell_w + GAP_X),
            1 + GAP_Y + pos.row as u16 * (self.cell_h + GAP_Y),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.board_origin(viewport);

        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for pos in Pos::all() {
            let (x, y) = self.slot_offset(pos);
            let slot = CellStyle::new(SLOT_BG, SLOT_BG);
            fb.fill_rect(start_x + x, start_y + y, self.cell_w, self.cell_h, ' ', slot);
        }

        match &snap.motion {
            Some(motion) => self.draw_motion(fb, start_x, start_y, motion),
            None => self.draw_settled(fb, start_x, start_y, snap),
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_footer(fb, snap, viewport, start_x, start_y, frame_w, frame_h);

        if snap.status == GameStatus::Over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, OVER_TEXT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_settled(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, snap: &GameSnapshot) {
        for pos in Pos::all() {
            let value = snap.value_at(pos);
            if value == 0 {
                continue;
            }
            let (x, y) = self.slot_offset(pos);
            self.draw_tile(fb, start_x + x, start_y + y, value);

            if snap.last_spawn == Some(pos) {
                let marker = CellStyle::new(DARK_TEXT, tile_style(value).bg);
                fb.put_char(start_x + x, start_y + y, '+', marker);
            }
            if snap.merged.contains(&pos) {
                let style = tile_style(value);
                let flash = CellStyle::new(style.fg, style.bg);
                fb.put_char(start_x + x + self.cell_w - 1, start_y + y, '*', flash);
            }
        }
    }

    fn draw_motion(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, motion: &MotionSnapshot) {
        let t = ease_out(motion.progress);
        // Losers first so the survivor is drawn on top when they meet.
        for sprite in motion.sprites.iter().filter(|s| s.removed) {
            self.draw_sprite(fb, start_x, start_y, sprite, t);
        }
        for sprite in motion.sprites.iter().filter(|s| !s.removed) {
            self.draw_sprite(fb, start_x, start_y, sprite, t);
        }
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, sprite: &Sprite, t: f32) {
        let (fx, fy) = self.slot_offset(sprite.from);
        let (tx, ty) = self.slot_offset(sprite.to);
        let x = lerp(fx, tx, t);
        let y = lerp(fy, ty, t);
        self.draw_tile(fb, start_x + x, start_y + y, sprite.value);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = tile_style(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let mut digits = [0u8; 20];
        let len = crate::fb::format_u64(u64::from(value), &mut digits) as u16;
        let text_x = x + self.cell_w.saturating_sub(len) / 2;
        fb.put_u64(text_x, y + self.cell_h / 2, u64::from(value), style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
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
        if panel_w < 8 {
            return;
        }

        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "2028", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, u64::from(snap.moves), value.dim());
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let status_y = start_y.saturating_add(frame_h);
        if status_y >= viewport.height {
            return;
        }
        if let Some(text) = status_text(snap.status) {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str_centered(start_x, status_y, frame_w, text, style);
        }

        let help_y = status_y.saturating_add(1);
        if help_y < viewport.height {
            let style = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();
            fb.put_str_centered(start_x, help_y, frame_w, HELP_TEXT, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp(from: u16, to: u16, t: f32) -> u16 {
    let v = from as f32 + (to as f32 - from as f32) * t;
    v.round().max(0.0) as u16
}
