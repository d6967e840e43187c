//! commit-deck - compose and browse structured commit messages
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use commit_deck::app::App;
use commit_deck::config::Config;
use commit_deck::logging;

fn main() -> color_eyre::Result<()> {
    let config = Config::parse();
    color_eyre::install()?;
    logging::init(&config.log_path(), config.log_level())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let app = App::new(&config, runtime.handle().clone())?;

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    tracing::info!("exiting");
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 100ms timeout so finished requests and expired
/// notifications are picked up while the user is idle.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.poll_requests();
    app.clear_expired_notification();
    Ok(())
}
