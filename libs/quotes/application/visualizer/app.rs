//! Application state and input handling for the visualizer

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::application::board::SharedQuoteBoard;
use crate::application::session::{QuoteSession, Result};

/// Main application state
pub struct App {
    /// Polling session (start/stop follow focus)
    session: QuoteSession,
    /// Board shared with the poller
    board: SharedQuoteBoard,
    /// Runtime the poller spawns its tasks on
    runtime: Handle,
    /// Terminal has focus
    pub focused: bool,
    /// Polling suspended by the user
    pub paused: bool,
    /// Whether to quit
    pub should_quit: bool,
    /// Status message to show in footer
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: QuoteSession, runtime: Handle) -> Self {
        let board = session.board();
        Self {
            session,
            board,
            runtime,
            focused: true,
            paused: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// First start, as if the view just gained focus
    pub fn start(&mut self) -> Result<()> {
        self.focused = true;
        self.resume_polling()
    }

    pub fn on_focus_gained(&mut self) {
        self.focused = true;
        if let Err(e) = self.resume_polling() {
            warn!("[Visualizer] Failed to start polling: {}", e);
            self.status_message = Some(format!("Start failed: {}", e));
        }
    }

    pub fn on_focus_lost(&mut self) {
        self.focused = false;
        self.session.stop();
    }

    /// Pause or resume polling regardless of focus
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.session.stop();
            self.status_message = Some("Paused".to_string());
        } else {
            self.status_message = None;
            if let Err(e) = self.resume_polling() {
                self.status_message = Some(format!("Start failed: {}", e));
            }
        }
    }

    fn resume_polling(&self) -> Result<()> {
        if self.paused || !self.focused {
            return Ok(());
        }
        let _guard = self.runtime.enter();
        self.session.start()
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::FocusGained => self.on_focus_gained(),
            Event::FocusLost => self.on_focus_lost(),
            // Only handle key press events (not release)
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('p') => self.toggle_pause(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Advance animations for the frame about to be drawn
    pub fn tick(&self, now: Instant) {
        self.board.lock().tick_animations(now);
    }

    pub fn board(&self) -> &SharedQuoteBoard {
        &self.board
    }

    pub fn session(&self) -> &QuoteSession {
        &self.session
    }

    /// Header status label
    pub fn status_label(&self) -> &'static str {
        if self.session.is_running() {
            "Polling"
        } else if self.paused {
            "Paused"
        } else if !self.focused {
            "Unfocused"
        } else {
            "Stopped"
        }
    }

    pub fn shutdown(&mut self) {
        info!("[Visualizer] Shutting down...");
        self.session.stop();
    }
}
