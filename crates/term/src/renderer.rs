//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only emit the runs of cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Frame flusher, generic over the output so tests can capture bytes.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. on resize events).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let same_size = matches!(
            &self.last,
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height()
        );
        match (same_size, self.last.as_mut()) {
            (true, Some(prev)) => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks the style last sent so unchanged runs skip style commands.
struct StyleState(Option<CellStyle>);

impl StyleState {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.0 == Some(style) {
            return Ok(());
        }
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.0 = Some(style);
        Ok(())
    }
}

fn print_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut StyleState,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        style.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleState(None);
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        print_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both framebuffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleState(None);
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        print_run(next, x, y, len, &mut style, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> ChangedRuns<'a> {
    ChangedRuns {
        prev,
        next,
        x: 0,
        y: 0,
    }
}

/// Row-major scan over two same-sized frames; yields runs without allocating.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl ChangedRuns<'_> {
    fn differs(&self, x: u16, y: u16) -> bool {
        self.prev.get(x, y) != self.next.get(x, y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.next.width();
        while self.y < self.next.height() {
            let y = self.y;
            while self.x < width && !self.differs(self.x, y) {
                self.x += 1;
            }
            if self.x == width {
                self.x = 0;
                self.y += 1;
                continue;
            }
            let start = self.x;
            while self.x < width && self.differs(self.x, y) {
                self.x += 1;
            }
            return Some((start, y, self.x - start));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(5, 1, Cell { ch: 'Y', style });

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
        assert_eq!(changed_runs(&b, &b).next(), None);
    }

    #[test]
    fn changed_runs_stop_at_row_end() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(3, 3);
        let mut b = FrameBuffer::new(3, 3);

        // Changed cells wrap from the end of row 0 into row 1.
        b.set(1, 0, Cell { ch: 'A', style });
        b.set(2, 0, Cell { ch: 'B', style });
        b.set(0, 1, Cell { ch: 'C', style });
        b.set(0, 2, Cell { ch: 'D', style });
        b.set(2, 2, Cell { ch: 'E', style });

        let mut runs = changed_runs(&a, &b);
        assert_eq!(runs.next(), Some((1, 0, 2)));
        assert_eq!(runs.next(), Some((0, 1, 1)));
        assert_eq!(runs.next(), Some((0, 2, 1)));
        assert_eq!(runs.next(), Some((2, 2, 1)));
        assert_eq!(runs.next(), None);
        assert_eq!(runs.next(), None);
    }

    #[test]
    fn second_identical_frame_emits_no_cells() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "ab", CellStyle::default());

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw(&fb).unwrap();
        let first_len = renderer.out.len();
        assert!(first_len > 0);

        renderer.draw(&fb).unwrap();
        let second = &renderer.out[first_len..];
        assert!(!second.contains(&b'a'));
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw(&fb).unwrap();
        renderer.invalidate();
        let before = renderer.out.len();
        renderer.draw(&fb).unwrap();
        let out = renderer.into_inner();
        let redraw = String::from_utf8_lossy(&out[before..]).into_owned();
        assert!(redraw.contains("abc"));
    }
}
