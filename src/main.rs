//! Terminal cube runner (default binary).
//!
//! `tui-cube` (or `tui-cube play`) opens the interactive net view. It uses
//! crossterm for input and the framebuffer renderer from `tui-cube-term`.
//! `tui-cube print` applies moves headlessly and prints the resulting net.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_cube::core::Cube;
use tui_cube::input::{handle_key_event, handle_mouse_event, should_quit, InputCommand};
use tui_cube::term::{render_text, CubeView, FrameBuffer, PanelInfo, TerminalRenderer, Viewport};
use tui_cube::types::{Color, CubeAction};

#[derive(Parser)]
#[command(name = "tui-cube", version, about = "Terminal 3x3x3 cube simulator")]
struct Cli {
    /// Seed for the shuffle RNG (defaults to the clock)
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal view (default)
    Play {
        /// Random turns to apply before starting
        #[arg(long, default_value_t = 0)]
        shuffle: u32,
    },
    /// Apply moves headlessly and print the net
    Print {
        /// Random turns to apply before the listed moves
        #[arg(long, default_value_t = 0)]
        shuffle: u32,
        /// Space-separated moves, e.g. "r b' w"
        #[arg(short, long, default_value = "")]
        moves: String,
        /// Print the snapshot as JSON instead of a text net
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting");

    match cli.command.unwrap_or(Commands::Play { shuffle: 0 }) {
        Commands::Play { shuffle } => play(seed, shuffle),
        Commands::Print {
            shuffle,
            moves,
            json,
        } => print(seed, shuffle, &moves, json),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn print(seed: u32, shuffle: u32, moves: &str, json: bool) -> Result<()> {
    let mut cube = Cube::with_seed(seed);
    cube.shuffle(shuffle);

    let actions =
        CubeAction::parse_sequence(moves).map_err(|tok| anyhow!("unknown move {tok:?}"))?;
    for action in actions {
        cube.apply_action(action)?;
    }

    let snap = cube.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", render_text(&snap));
        println!(
            "moves: {}  {}",
            snap.rotations,
            if snap.solved { "solved" } else { "scrambled" }
        );
    }
    Ok(())
}

fn play(seed: u32, shuffle: u32) -> Result<()> {
    let mut cube = Cube::with_seed(seed);
    cube.shuffle(shuffle);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut cube);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, cube: &mut Cube) -> Result<()> {
    let view = CubeView::default();
    let mut panel = PanelInfo {
        brush: Color::White,
    };
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = cube.snapshot();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        cube.snapshot_into(&mut snap);
        view.render_into_with_panel(&snap, Some(&panel), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Nothing animates, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(InputCommand::Cube(action)) => apply(cube, action),
                    Some(InputCommand::SelectBrush(color)) => panel.brush = color,
                    None => {}
                }
            }
            Event::Mouse(mouse) => {
                let sticker = handle_mouse_event(mouse)
                    .and_then(|(x, y)| view.sticker_at(viewport, x, y));
                if let Some(s) = sticker {
                    apply(
                        cube,
                        CubeAction::Paint {
                            face: s.face,
                            row: s.row,
                            col: s.col,
                            color: panel.brush,
                        },
                    );
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn apply(cube: &mut Cube, action: CubeAction) {
    if let Err(err) = cube.apply_action(action) {
        warn!(%err, action = action.as_str(), "action rejected");
    }
}
