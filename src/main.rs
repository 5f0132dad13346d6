use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hangman::config::AppConfig;
use hangman::game::{Session, WordSource};
use hangman::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Hangman in the terminal.
#[derive(Parser)]
#[command(name = "hangman", about = "Guess the word before the figure is hanged")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "hangman.toml")]
    config: PathBuf,

    /// Override the word list path
    #[arg(long)]
    words: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "hangman.log")]
    log_file: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Use RUST_LOG to control the level, e.g. RUST_LOG=debug
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(words) = cli.words {
        config.words.path = words;
    }

    let words = WordSource::load(&config.words.path)
        .with_context(|| format!("loading word list from {}", config.words.path.display()))?;
    let session = Session::new(words).context("starting first round")?;

    run(App::new(session, config.ui)).context("running terminal UI")?;
    tracing::info!("Goodbye");
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

    let stats = app.session().stats();
    tracing::info!("Session finished: won {} of {}", stats.won, stats.played);
    res
}
