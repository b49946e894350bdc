//! Terminal Columns runner.
//!
//! Parses the command line, optionally installs a file logger, then runs a
//! fixed-tick loop: render, poll keys until the next tick, advance the session.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use columns::core::{GameSnapshot, Session, SessionConfig};
use columns::input::{handle_key_event, should_quit};
use columns::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use columns::types::{FALL_INTERVAL_MS, TICK_MS};

/// Falling jewel columns in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Cli {
    /// Seed for faller columns and colors (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,
    /// Milliseconds between automatic one-row drops
    #[arg(long, default_value_t = FALL_INTERVAL_MS, value_parser = clap::value_parser!(u32).range(1..))]
    fall_interval_ms: u32,
    /// Milliseconds per game tick
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..))]
    tick_ms: u32,
    /// Write logs to this file (nothing is logged without it)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, fall_interval_ms = cli.fall_interval_ms, tick_ms = cli.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log filter {:?}", cli.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, cli: &Cli, seed: u32) -> Result<()> {
    let mut session = Session::new(SessionConfig {
        seed,
        fall_interval_ms: cli.fall_interval_ms,
    });

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(cli.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(cli.tick_ms);
        }
    }
}
