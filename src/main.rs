use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_arcade::config::{CollisionPolicy, DEFAULT_TICK_INTERVAL_MS, GameConfig};
use snake_arcade::error::GameError;
use snake_arcade::game::{GameEngine, TickEvent};
use snake_arcade::input::GameInput;
use snake_arcade::leaderboard::{Leaderboard, Standings};
use snake_arcade::random::PlatformRandom;
use snake_arcade::renderer::FrameView;
use snake_arcade::score::{load_standings, save_standings};
use snake_arcade::terminal_runtime::{TerminalSession, restore_terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Upper bound on how long one input poll may block.
const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Neither load nor save the standings file.
    #[arg(long = "no-save")]
    no_save: bool,

    /// Write tracing output to this file (filtered by `RUST_LOG`).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Allow the head to enter the cell the tail is leaving.
    #[arg(long = "tail-vacates")]
    tail_vacates: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let standings = if cli.no_save {
        Standings::default()
    } else {
        load_standings().unwrap_or_else(|error| {
            eprintln!("Ignoring unreadable standings file: {error}");
            Standings::default()
        })
    };

    let config = GameConfig {
        collision_policy: if cli.tail_vacates {
            CollisionPolicy::TailVacates
        } else {
            CollisionPolicy::PreTickBody
        },
        ..GameConfig::default()
    };
    let rng = cli
        .seed
        .map_or_else(PlatformRandom::from_entropy, PlatformRandom::seeded);
    let mut engine = GameEngine::with_parts(config, rng, Leaderboard::from_standings(standings))
        .map_err(engine_error)?;

    install_panic_hook();
    info!(seed = ?cli.seed, tick_ms = cli.tick_ms, "session starting");

    run(&mut engine, &cli)
}

fn run(engine: &mut GameEngine, cli: &Cli) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        let snapshot = engine.snapshot();
        let standings = engine.recorder().standings();
        session.draw(FrameView {
            snapshot: &snapshot,
            grid: engine.config().grid,
            direction: engine.direction(),
            standings: &standings,
            win_threshold: engine.config().win_threshold,
        })?;

        let timeout = tick_interval
            .saturating_sub(last_tick.elapsed())
            .min(FRAME_POLL_INTERVAL);
        match session.poll_input(timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) if !engine.status().is_running() => {
                engine.start().map_err(engine_error)?;
                last_tick = Instant::now();
            }
            Some(GameInput::Direction(direction)) => engine.request(direction),
            Some(GameInput::Confirm) | None => {}
        }

        // Hold the game while part of the board would be hidden.
        if !session.fits(engine.config().grid)? {
            last_tick = Instant::now();
            continue;
        }
        if last_tick.elapsed() < tick_interval {
            continue;
        }
        last_tick = Instant::now();

        if let TickEvent::Ended(_) = engine.tick().map_err(engine_error)? {
            if let Some(report) = engine.end_report() {
                info!(score = report.snapshot.score, reason = ?report.reason, "game finished");
                if !cli.no_save {
                    if let Err(error) = save_standings(&report.standings) {
                        warn!(%error, "failed to save standings");
                    }
                }
            }
        }
    }

    Ok(())
}

fn engine_error(error: GameError) -> io::Error {
    io::Error::other(error)
}

fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
