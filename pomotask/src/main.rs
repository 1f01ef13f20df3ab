//! `Pomotask` — terminal focus timer with a task list.
//!
//! Launches the TUI. Configuration via CLI flags, environment variables, or
//! config file (`~/.config/pomotask/config.toml`).
//!
//! ```bash
//! cargo run --bin pomotask
//!
//! # Verbose logs to a custom file
//! cargo run --bin pomotask -- --log-level debug --log-file /tmp/pomo.log
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use pomotask::app::App;
use pomotask::config::{CliArgs, ClientConfig};
use pomotask::ticker::{TICK_PERIOD, Tick, Ticker};
use pomotask::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());

    tracing::info!("pomotask starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("pomotask exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("pomotask.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Runs on the runtime's main task; the ticker's background task only
/// produces `Tick` values, and every state change happens here.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new();
    let (mut ticker, mut tick_rx) = Ticker::new(TICK_PERIOD, config.tick_channel_capacity);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app, config.show_help))?;

        // Step 2: Apply every tick that arrived since the last frame.
        drain_ticks(&mut app, &ticker, &mut tick_rx);

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        // Step 4: Keep exactly one schedule alive while the clock runs.
        ticker.sync(app.clock_running());

        if app.should_quit {
            ticker.stop();
            return Ok(());
        }
    }
}

/// Drain all pending ticks and apply the ones from the live schedule.
fn drain_ticks(app: &mut App, ticker: &Ticker, rx: &mut mpsc::Receiver<Tick>) {
    while let Ok(tick) = rx.try_recv() {
        if ticker.is_current(tick) {
            app.tick();
        } else {
            tracing::trace!(generation = tick.generation, "stale tick dropped");
        }
    }
}
