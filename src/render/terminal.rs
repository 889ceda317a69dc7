//! Terminal renderer: double-buffered painting with minimal diffs.
//!
//! Each frame is painted into `next`, diffed against `current` (what the
//! terminal shows), and written in a single `write_all`. After a resize the
//! next frame is a full repaint.

use super::paint::{paint_page, Palette};
use super::scheduler::FrameScheduler;
use super::{Frame, Renderer};
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crate::layout::{CellMetrics, PageLayout};
use std::io::{self, Write};
use std::time::Instant;

/// Render statistics, logged when the session ends.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames painted.
    pub frames: u64,
    /// Total cells changed across all frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Smoothed paint time in microseconds.
    pub avg_render_us: u64,
    /// Last paint time in microseconds.
    pub last_render_us: u64,
}

/// [`Renderer`] that draws into a terminal through any [`Write`] sink.
pub struct TerminalRenderer<W: Write> {
    out: W,
    current: Buffer,
    next: Buffer,
    diff_state: DiffState,
    output: Vec<u8>,
    needs_full_redraw: bool,
    metrics: CellMetrics,
    palette: Palette,
    scheduler: FrameScheduler,
    stats: RenderStats,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer for a `width` × `height` terminal.
    pub fn new(out: W, width: u16, height: u16, metrics: CellMetrics, palette: Palette) -> Self {
        Self {
            out,
            current: Buffer::new(width, height),
            next: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            needs_full_redraw: true,
            metrics,
            palette,
            scheduler: FrameScheduler::new(),
            stats: RenderStats::default(),
        }
    }

    /// Terminal size in columns and rows.
    pub const fn size(&self) -> (u16, u16) {
        (self.next.width(), self.next.height())
    }

    /// Adopt a new terminal size; the next frame repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.needs_full_redraw = true;
    }

    /// Pending frame deadlines.
    pub const fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Pending frame deadlines, mutably.
    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    /// What the terminal currently shows.
    pub const fn screen(&self) -> &Buffer {
        &self.current
    }

    /// Render statistics so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Output sink.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    fn flush(&mut self) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        if self.needs_full_redraw {
            render_full(&self.next, &mut self.output, &mut self.diff_state);
            self.stats.cells_changed += self.next.len() as u64;
            self.needs_full_redraw = false;
        } else {
            let diff = render_diff(&self.current, &self.next, &mut self.output, &mut self.diff_state);
            self.stats.cells_changed += diff.cells_changed as u64;
        }

        if !self.output.is_empty() {
            self.out.write_all(&self.output)?;
            self.out.flush()?;
        }
        self.current.copy_from(&self.next);

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.stats.avg_render_us = if self.stats.avg_render_us == 0 {
            self.stats.last_render_us
        } else {
            (self.stats.avg_render_us * 15 + self.stats.last_render_us) / 16
        };
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn current_time(&self) -> Instant {
        Instant::now()
    }

    fn schedule_frame(&mut self, at: Instant) {
        log::trace!("frame scheduled in {:?}", at.saturating_duration_since(Instant::now()));
        self.scheduler.schedule(at);
    }

    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (width, height) = self.size();
        let layout = PageLayout::compute(frame.state, frame.paragraphs, &self.metrics, width, height);
        paint_page(&mut self.next, &layout, &self.palette);
        self.flush()
    }
}
