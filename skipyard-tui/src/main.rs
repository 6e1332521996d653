//! Terminal UI for skipyard that lets users browse, inspect, and compare skip hire options.

mod app;
mod config;
mod input;
mod logging;
mod ui;

use std::{io, io::Write as _, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use skipyard_core::service::SkipyardService;
use skipyard_provider_wewantwaste as wewantwaste;
use tracing::{info, warn};

use crate::app::App;
use crate::config::Cli;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_file)?;

    // HTTP + service setup
    let client = Client::builder().user_agent("skipyard/0.1").build()?;
    let source = wewantwaste::source(client, cli.api_base_url.as_deref());
    let service = Arc::new(SkipyardService::new(source));
    let location = cli.location();

    info!(%location, source = service.source_name(), "starting skipyard");

    if cli.json {
        let skips = service.load(&location).await?;
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &skips)?;
        writeln!(stdout)?;
        return Ok(());
    }

    // App state
    let app = App::new(service, location);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    // Initial fetch
    reload(terminal, &mut app).await?;

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::Reload => reload(terminal, &mut app).await?,
            }
        }
    }

    Ok(())
}

async fn reload(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    let res = app.service.load(&app.location).await;

    app.is_loading = false;
    match res {
        Ok(skips) => {
            info!(count = skips.len(), "loaded skips");
            app.set_skips(skips);
        }
        Err(err) => {
            warn!(error = %err, "showing load failure");
            app.set_skips(Vec::new());
            app.error_message = Some(err.to_string());
        }
    }

    Ok(())
}
