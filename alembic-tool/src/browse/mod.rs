mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use alembic_potterdb::PotterDbClient;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::BrowseApp;

use crate::error::AlbError;

pub async fn run(client: PotterDbClient) -> Result<(), AlbError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and kick off the fetch
    let mut app = BrowseApp::new(client.potions_url());
    app.start_loading(client);

    // Run event loop
    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut BrowseApp,
) -> Result<(), AlbError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with timeout to allow checking the fetch
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        app.poll_items();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
