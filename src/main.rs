//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_2048::term` (no widget toolkit).

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::{Env, Target};

use tui_2048::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::{App, Args, Config, Control};

/// Upper bound on how long the loop waits for input before redrawing, so
/// terminal resizes are picked up even without an event.
const POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = Config::load(&args)?;
    let mut app = App::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter(true)?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_err() {
        app.shutdown();
    }
    result
}

/// Logs go to a file because the game owns the terminal. No file, no logs.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = &args.log {
        builder.parse_filters(filter);
    }
    builder.target(Target::Pipe(Box::new(file))).init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let timeout = Duration::from_millis(POLL_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(timeout)? {
            continue;
        }
        let control = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(..) => {
                app.handle_resize();
                term.invalidate();
                Control::Continue
            }
            _ => Control::Continue,
        };
        if control == Control::Quit {
            return Ok(());
        }
    }
}
