use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictac4d::cli::App;
use tictac4d::config::{AppConfig, LoggingConfig};
use tictac4d::game::Player;

/// Play five-in-a-row on a 4D board from the terminal.
#[derive(Parser)]
#[command(name = "tictac4d", about = "Four-dimensional five-in-a-row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tictac4d.toml")]
    config: PathBuf,

    /// Player who moves first (X or O)
    #[arg(long)]
    first: Option<Player>,

    /// Do not print the board after each move
    #[arg(long)]
    quiet: bool,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(&app_config.logging);

    // Apply CLI overrides
    if let Some(first) = cli.first {
        app_config.game.first_player = first;
    }
    if cli.quiet {
        app_config.game.show_board = false;
    }

    println!("Enter moves as 'x y z w' (0-4), or 'board', 'reset', 'quit'.");
    let mut app = App::new(app_config.game.first_player, app_config.game.show_board);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout).context("reading moves")?;
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(io::stderr)
        .init();
}
