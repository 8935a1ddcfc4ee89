//! Detective Quest: find the culprit hiding in the mansion
//!
//! Walk the rooms, collect the clues, then name the suspect they point at.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::game::Scenario;
use detective_quest::tui::App;
use detective_quest::{console, Game, GameConfig, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "detective-quest", version, about = "Explore the mansion and unmask the culprit")]
struct Cli {
    /// Play on plain stdin/stdout instead of the full-screen interface
    #[arg(long)]
    console: bool,

    /// Number of buckets in the suspect table
    #[arg(long, default_value_t = GameConfig::default().suspect_buckets)]
    buckets: usize,

    /// Refuse mansions deeper than this
    #[arg(long, default_value_t = GameConfig::default().max_depth)]
    max_depth: usize,

    /// Milliseconds the interface waits for a key before redrawing
    #[arg(long, default_value_t = GameConfig::default().tick_rate_ms)]
    tick_rate: u64,

    /// Write logs to this file (the full-screen interface logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "detective_quest=info")]
    log_filter: String,

    /// Print a JSON case report when the session ends
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            suspect_buckets: self.buckets,
            max_depth: self.max_depth,
            tick_rate_ms: self.tick_rate,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_filter))
        .with_context(|| format!("invalid log filter '{}'", cli.log_filter))?;

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Stderr would tear the alternate screen, so the TUI stays silent
        None if cli.console => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_tui(game: Game, config: &GameConfig) -> Result<Game> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, config.tick_rate());
    let result = run_loop(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(app.game)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.config();
    let scenario = Scenario::mansion().context("failed to build the mansion")?;
    let mut game = Game::new(scenario, &config)?;

    if cli.console {
        let stdin = io::stdin();
        let mut out = stdout();
        console::run(&mut game, stdin.lock(), &mut out)?;
    } else {
        game = run_tui(game, &config)?;
        if let Some(verdict) = game.verdict() {
            println!("\n{verdict}");
        }
        println!("Thanks for playing Detective Quest!");
    }

    if cli.report {
        println!("{}", game.report().to_json()?);
    }

    Ok(())
}
