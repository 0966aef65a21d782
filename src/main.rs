use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use snake_arcade::config::{INPUT_POLL_INTERVAL, THEME_EMBER};
use snake_arcade::input::InputHandler;
use snake_arcade::renderer;
use snake_arcade::score::{HighScoreStore, JsonFileStore};
use snake_arcade::session::{Control, Session};
use snake_arcade::terminal_runtime::{install_panic_hook, TerminalSession};
use snake_arcade::ui::hud::HudInfo;

const LOG_FILE_NAME: &str = "snake-arcade.log";

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake on a 20x20 board")]
struct Cli {
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is stored.
    #[arg(long = "scores-file", value_name = "PATH")]
    scores_file: Option<PathBuf>,

    /// Where diagnostic logs are written.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_logging(&log_path, cli.log_level) {
        eprintln!("Logging disabled, cannot open {}: {error}", log_path.display());
    }

    let store = match cli.scores_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_location(),
    };
    info!("using score file {}", store.path().display());

    install_panic_hook();
    run(Session::new(store, cli.seed))
}

fn run<S: HighScoreStore>(mut session: Session<S>) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    loop {
        terminal_session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                session.state(),
                HudInfo {
                    high_score: session.high_score(),
                    previous_high_score: session.high_score_before_game(),
                    started: session.is_started(),
                    theme: &THEME_EMBER,
                },
            );
        })?;

        let timeout = session
            .timer()
            .remaining(Instant::now())
            .map_or(INPUT_POLL_INTERVAL, |remaining| {
                remaining.min(INPUT_POLL_INTERVAL)
            });

        if let Some(game_input) = input.poll_input(timeout)? {
            if session.handle_input(game_input, Instant::now()) == Control::Quit {
                break;
            }
        }

        session.update(Instant::now());
    }

    info!("quit with high score {}", session.high_score());
    Ok(())
}

fn init_logging(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    WriteLogger::init(level, Config::default(), File::create(path)?)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}

fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    base.push("snake-arcade");
    base.push(LOG_FILE_NAME);
    base
}
