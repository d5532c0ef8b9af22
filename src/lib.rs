//! rpomodoro library root.
//! Exposes the settings store, the daily total tracker, the countdown and
//! the menu loop, plus the high-level run() used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;
pub mod window;

use std::io;

use clap::Parser;
use tracing::info;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::countdown::CountdownRenderer;
use crate::core::menu::MenuLoop;
use crate::core::tracker::DailyTotalTracker;
use crate::errors::AppResult;
use crate::store::SettingsStore;
use crate::ui::font::BlockFont;
use crate::ui::messages::warning;
use crate::ui::notify::EndOfTimerNotifier;
use crate::ui::terminal::CrosstermDisplayFactory;
use crate::utils::clock::SystemClock;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(data) = &cli.data {
        cfg.data_file = data.clone();
    }

    // 3️⃣ file logging (never fatal)
    let level = cli.log_level.as_deref().or(cfg.log_level.as_deref());
    if let Err(e) = utils::logging::enable_logging(&Config::log_dir(), level) {
        warning(format!("File logging disabled: {}", e));
    }

    // 4️⃣ settings record, created with defaults on first run
    let store = SettingsStore::new(cfg.data_path());
    store.init_if_missing()?;
    info!(data = %store.path().display(), "starting");

    // 5️⃣ wire the menu and hand it the real terminal
    let clock = SystemClock;
    let focus = window::default_focus();
    let font = BlockFont::new();
    let tracker = DailyTotalTracker::new(&store, &clock);
    let notifier = EndOfTimerNotifier::new(focus.as_ref(), &clock)
        .with_flashes(cfg.flash_count, cfg.flash_delay());
    let countdown = CountdownRenderer::new(&font, &clock, tracker, notifier)
        .with_tick(cfg.tick_interval())
        .with_quit_key(cfg.quit_key);

    let mut menu = MenuLoop::new(&store, tracker, countdown)
        .with_progress_segments(cfg.progress_segments);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    menu.run(stdin.lock(), &mut stdout, &mut CrosstermDisplayFactory::default())?;

    info!("bye");
    Ok(())
}
