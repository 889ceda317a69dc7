//! Terminal front end: window lifecycle plus the loop that feeds frames.

mod window;

pub use window::TerminalWindow;

use crate::config::Config;
use crate::control::AutoscrollTicker;
use crate::driver::{FrameDriver, Session};
use crate::error::Result;
use crate::render::TerminalRenderer;
use std::io;

/// Present `session` in the terminal until the presenter closes it.
///
/// The terminal is restored before this returns, also on error.
pub fn present(session: Session, config: Config) -> Result<()> {
    let (width, height) = TerminalWindow::size()?;
    let renderer = TerminalRenderer::new(io::stdout(), width, height, config.metrics, config.palette);
    let ticker = AutoscrollTicker::new(config.frame_delay);
    log::info!(
        "presenting {} ({} lines) on a {width}x{height} terminal",
        session.path().display(),
        session.paragraphs().len()
    );

    let mut driver = FrameDriver::new(session, ticker, renderer);
    let mut window = TerminalWindow::open(config)?;
    let outcome = window.run(&mut driver);
    let closed = window.close();

    let stats = driver.renderer().stats();
    log::info!(
        "{} frames, {} cells changed, {} bytes written, {}us average paint",
        stats.frames,
        stats.cells_changed,
        stats.bytes_written,
        stats.avg_render_us
    );
    outcome.and(closed)
}
