//! Quotes Board - Terminal table of live quotes
//!
//! Cells flash green or red when their value moves and fade back to
//! neutral. Polling follows terminal focus.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use quote_flash::bin_common::{load_quotes_config, ConfigType};
use quotes::application::visualizer::{ui, App};
use quotes::application::QuoteSession;

/// Input poll timeout, also the frame interval of the animation
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Note: Logging is disabled for TUI - it would corrupt the alternate screen display
    let config = load_quotes_config(ConfigType::Quotes)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let session = QuoteSession::new(&config)?;
    let mut app = App::new(session, runtime.handle().clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app
        .start()
        .map_err(anyhow::Error::from)
        .and_then(|_| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    app.shutdown();
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(500));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        if event::poll(FRAME_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(&event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
