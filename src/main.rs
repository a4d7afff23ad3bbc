use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_bot::config::AppConfig;
use connect_four_bot::game::Controller;
use connect_four_bot::ui::App;

/// Play Connect Four against a minimax computer opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Override blunder probability (0 to 1)
    #[arg(long)]
    blunder: Option<f64>,

    /// Fix the RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Override the pause before the computer replies, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG); logging is off otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.search_depth = depth;
    }
    if let Some(blunder) = cli.blunder {
        config.engine.blunder_probability = blunder;
    }
    if cli.seed.is_some() {
        config.engine.seed = cli.seed;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.ui.computer_delay_ms = delay_ms;
    }
    config.validate().context("invalid settings")?;

    info!(
        "starting: depth {}, blunder probability {}",
        config.engine.search_depth, config.engine.blunder_probability
    );

    let controller = Controller::from_config(&config.engine).context("invalid engine settings")?;
    let app = App::new(controller, Duration::from_millis(config.ui.computer_delay_ms));
    run(app).context("terminal UI failed")
}

/// Send log records to `path`. The terminal belongs to the UI, so there is
/// no stderr target.
fn init_logging(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
