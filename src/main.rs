use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use homerow::app::App;
use homerow::config::{Config, ConfigOverrides};
use homerow::event::{AppEvent, EventHandler};
use homerow::logging;
use homerow::session::target::PracticeTargets;
use homerow::ui;
use homerow::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "homerow", version, about = "Terminal touch-typing practice")]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[arg(long, help = "Seed for the combination generator")]
    seed: Option<u64>,

    #[arg(long, help = "Config file to use instead of the default location")]
    config: Option<PathBuf>,

    #[arg(long, help = "Write the effective config to the default location and exit")]
    save_config: bool,

    #[arg(long, help = "Print the last completed session as JSON on exit")]
    json: bool,
}

/// Raw mode and the alternate screen, undone on drop even when setup or the
/// UI loop fails part way.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(&cli.overrides)?;
    config.validate()?;

    if cli.save_config {
        config.save()?;
        println!("Saved config to {}", Config::config_path().display());
        return Ok(());
    }

    let _log_guard = logging::init(&logging::default_log_dir())?;

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let targets = PracticeTargets::from_config(&config, &mut rng);
    let theme = Theme::load_or_default(&config.theme);
    info!(
        mode = %config.default_mode,
        theme = %theme.name,
        combination = %targets.combination(),
        "starting"
    );

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, targets, theme);

    if let Err(err) = run_tui(&mut app, tick_rate) {
        eprintln!("Error: {err:?}");
    }

    if let Some(last) = &app.last_result {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(last)?);
        } else {
            println!("{}", last.speed_line());
        }
    }

    Ok(())
}

fn run_tui(app: &mut App, tick_rate: Duration) -> Result<()> {
    let _terminal_guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let events = EventHandler::new(tick_rate);
    run_app(&mut terminal, app, &events)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::screen::draw(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
