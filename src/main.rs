//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `blockfall::term`. Player intents are applied as soon as they arrive;
//! gravity and the clear animation run off the session's own cadences.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::core::{ClearRule, PieceRule, Session, SessionConfig};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_COLS, DEFAULT_ROWS, FRAME_MS, PIECE_PALETTE};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_COLS as usize, help = "Board width in cells")]
    cols: usize,

    #[arg(long, default_value_t = DEFAULT_ROWS as usize, help = "Board height in cells")]
    rows: usize,

    #[arg(long, default_value_t = 1, help = "Seed for the piece sequence")]
    seed: u32,

    #[arg(long, help = "Deal pieces from shuffled bags of seven")]
    bag: bool,

    #[arg(long, help = "Clear any fully occupied row, whatever its colors")]
    any_color_clears: bool,

    #[arg(long, default_value_t = PIECE_PALETTE.len(), help = "Number of piece colors in play (1-3)")]
    colors: usize,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "Write logs to this file (the terminal is taken by the game)")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            cols: self.cols,
            rows: self.rows,
            seed: self.seed,
            piece_rule: if self.bag {
                PieceRule::Bag
            } else {
                PieceRule::Uniform
            },
            clear_rule: if self.any_color_clears {
                ClearRule::AnyColor
            } else {
                ClearRule::SameColor
            },
            color_count: self.colors,
            ..SessionConfig::default()
        }
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level_filter(cli.verbose))
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.session_config();
    let mut session = Session::new(config).context("invalid game settings")?;
    info!(?config, "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "score {}  level {}  lines {}",
        session.score(),
        session.level(),
        session.lines()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let start = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        dirty |= session.advance(now_ms).fired();
    }
}
