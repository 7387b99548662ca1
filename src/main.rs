//! Terminal brick game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_bricks::term`. Configuration comes from `BRICKS_*` environment
//! variables (see `tui_bricks::config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_bricks::input::{handle_key_event, should_quit};
use tui_bricks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bricks::{logging, Config, Driver};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut driver = Driver::new(config.fill_mode, config.drop_interval_ms);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(driver.session(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit after {} locked bricks", driver.locked());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        driver.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            driver.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
