mod app;
mod ui;

use anyhow::Result;
use tracing::info;

use crate::registry::Registry;

pub use app::App;

/// Run the interactive browser over the given registry
pub fn run_browser(registry: Registry) -> Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::{io, time::Duration};

    info!(animals = registry.len(), "browser started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(registry);
    let poll_rate = Duration::from_millis(100);

    // Main loop
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut app)) {
            break Err(e.into());
        }

        match event::poll(poll_rate) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(e.into()),
        }

        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e.into()),
        };

        if app.search_mode {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => app.exit_search(),
                KeyCode::Backspace => app.remove_search_char(),
                KeyCode::Down => app.next_search_result(),
                KeyCode::Up => app.prev_search_result(),
                KeyCode::Char(c) => app.add_search_char(c),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Char('/') => app.enter_search(),
                KeyCode::Char('n') => app.next_search_result(),
                KeyCode::Char('p') => app.prev_search_result(),
                KeyCode::Down => app.next(),
                KeyCode::Up => app.previous(),
                _ => {}
            }
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("browser closed");
    result
}
