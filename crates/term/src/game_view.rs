//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. Every board cell is
//! read through [`Session::pixel_at`], so the falling brick is drawn on top of
//! the locked cells without ever being part of the board.

use crate::core::{Pixel, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the brick game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// Draw the staging rows above the visible field as well.
    hidden_rows: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            hidden_rows: false,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_hidden_rows(mut self, hidden_rows: bool) -> Self {
        self.hidden_rows = hidden_rows;
        self
    }

    /// First board row drawn at the top of the frame.
    fn first_row(&self) -> u8 {
        if self.hidden_rows {
            0
        } else {
            HIDDEN_ROWS
        }
    }

    /// Render the session into a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let first_row = self.first_row();
        let rows = (BOARD_HEIGHT - first_row) as u16;
        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Board cells with the active brick overlaid.
        for row in 0..rows {
            let board_y = (first_row as u16 + row) as i8;
            for x in 0..BOARD_WIDTH as u16 {
                match session.pixel_at(x as i8, board_y) {
                    Some(Pixel {
                        cell: Some(color),
                        from_active,
                    }) => self.draw_board_cell(fb, start_x, start_y, x, row, color, from_active),
                    _ => self.draw_empty_cell(fb, start_x, start_y, x, row),
                }
            }
        }

        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Color,
        bold: bool,
    ) {
        let style = CellStyle {
            bold,
            ..CellStyle::plain(palette(color), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
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
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        match session.active() {
            Some(piece) => {
                fb.put_str(panel_x, y, &piece.shape.letter().to_string(), value);
                y = y.saturating_add(1);
                fb.put_str(panel_x, y, &format!("{},{}", piece.x, piece.y), value);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BRICKS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &session.piece_id().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, session.fill_mode().as_str(), value);
    }
}

/// Terminal color for each brick color value.
pub fn palette(color: Color) -> Rgb {
    match color.value() {
        1 => Rgb::new(80, 220, 220),
        2 => Rgb::new(255, 165, 0),
        3 => Rgb::new(80, 120, 220),
        4 => Rgb::new(240, 220, 80),
        5 => Rgb::new(220, 80, 80),
        6 => Rgb::new(200, 120, 220),
        _ => Rgb::new(100, 220, 120),
    }
}
