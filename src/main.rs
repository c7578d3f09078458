mod app;
mod clients;
mod config;
mod features;
mod life;
mod logging;
mod ui;

use crate::app::environment::Environment;
use crate::app::event::AppEvent;
use crate::app::handler::{self, Command};
use crate::app::state::RootState;
use crate::app::store::Store;
use crate::clients::file_store::StoreDefaults;
use crate::clients::{FileStore, TracingAnalytics};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config, seeding a default one on first run
    let cfg = config::load_config()?;
    if !config::config_exists() {
        config::save_config(&cfg)?;
    }

    let log_path = logging::init(&cfg.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "lifegrid starting");

    // Open the store before touching the terminal so errors print normally
    let today = app::environment::local_today();
    let data_dir = config::expand_home(&cfg.storage.data_dir);
    let store = FileStore::open(
        &data_dir,
        StoreDefaults {
            birthday: life::default_birthday(today, cfg.defaults.birthday_years_ago),
            life_expectancy: cfg.defaults.life_expectancy,
        },
    )
    .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
    let files = Arc::new(store);
    let env = Environment::live(files.clone(), files.clone(), Arc::new(TracingAnalytics));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, env).await;

    // Restore terminal
    restore_terminal()?;

    // Effects cancelled at shutdown may not have flushed their writes
    if let Err(e) = files.flush().await {
        error!(error = %format!("{:#}", e), "failed to flush store");
    }

    if let Err(e) = result {
        error!(error = %format!("{:#}", e), "exited with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("lifegrid exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    env: Environment,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let state = RootState::new(&env, &cfg);
    let today = env.today;
    let mut store = Store::new(state, env, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task for the date rollover check
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(50));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Load the first screen
    store.appear();

    // Initial render
    terminal.draw(|f| ui::render(f, &store.state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let mut dirty = matches!(event, AppEvent::Terminal(_));
        let mut should_quit = false;

        for command in handler::handle_event(&store.state, event, today()) {
            match command {
                Command::Send(action) => {
                    store.send(action);
                    dirty = true;
                }
                Command::Quit => should_quit = true,
            }
        }

        if should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if dirty {
            terminal.draw(|f| ui::render(f, &store.state))?;
        }
    }

    store.shutdown();
    Ok(())
}
