//! Terminal runners (default binary).
//!
//! This is the host loop: it owns the terminal, the 100ms animation timer
//! and the quit key. It uses crossterm for input and the framebuffer-based
//! renderer from `tui_runners::term` (no widget toolkit).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_runners::config::Config;
use tui_runners::core::{SimpleRng, Simulation, SpriteCatalog};
use tui_runners::input::{handle_key_event, HostCommand};
use tui_runners::logging::init_tracing;
use tui_runners::term::{detect_theme, FrameBuffer, RunnerView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err);
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let catalog = SpriteCatalog::builtin();
    let mut rng = SimpleRng::new(config.seed);
    let mut sim = Simulation::populate(&catalog, &mut rng);
    let view = RunnerView::new(detect_theme());
    info!(
        seed = config.seed,
        runners = sim.runners().len(),
        theme = ?view.theme(),
        "starting animation"
    );

    let (w, h) = crossterm::terminal::size().context("failed to query terminal size")?;
    sim.resize(w, h);

    let mut fb = FrameBuffer::new(w, h);
    draw(term, &view, &sim, &mut fb)?;
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = config
            .tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(handle_key_event(key), Some(HostCommand::Quit)) {
                        return Ok(());
                    }
                }
                Event::Resize(w, h) => {
                    sim.resize(w, h);
                    term.invalidate();
                    draw(term, &view, &sim, &mut fb)?;
                }
                _ => {}
            }
        }

        // Tick. The loop schedules the next one itself.
        if last_tick.elapsed() >= config.tick {
            last_tick = Instant::now();
            sim.tick();
            draw(term, &view, &sim, &mut fb)?;
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &RunnerView,
    sim: &Simulation,
    fb: &mut FrameBuffer,
) -> Result<()> {
    if !sim.has_size() {
        return term.draw_text(&view.render_text(sim));
    }
    view.render_into(sim, Viewport::of(sim), fb);
    term.draw_swap(fb)
}
