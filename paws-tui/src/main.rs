//! P.A.W.S TUI: plant monitor shell with bottom-tab navigation.
//!
//! Screens:
//! 1. Home: greeting, quick stats, plant cards
//! 2. Plants: plant library
//! 3. Devices: paired sensors, QR scan
//! 4. Alerts: notifications
//! 5. Profile: user card, settings, support

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use paws_core::{Catalog, PawsConfig};
use paws_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(name = "paws-tui", about = "P.A.W.S plant monitor: terminal shell")]
struct Args {
    /// Config file. Defaults to <config_dir>/paws/config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog TOML file, overriding the config.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PawsConfig::load(args.config.as_deref())?;
    if let Some(path) = args.catalog {
        config.catalog = Some(path);
    }
    logging::init(&config.log)?;

    let catalog: Catalog = config.load_catalog().context("load catalog")?;
    tracing::info!(
        plants = catalog.plants().len(),
        devices = catalog.devices().len(),
        notifications = catalog.notifications().len(),
        "starting shell"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(catalog, config.profile);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(error) = &result {
        tracing::error!(%error, "shell exited with error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
