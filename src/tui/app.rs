//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key, handle_mouse};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);
        info!(pages = self.state.pages.len(), "dashboard started");

        let result = (|| -> io::Result<()> {
            loop {
                terminal.draw(|frame| render(frame, &mut self.state))?;

                match events.next() {
                    Ok(Event::Tick) => self.state.tick(Instant::now()),
                    Ok(Event::Key(key)) => {
                        if handle_key(&mut self.state, key) == KeyAction::Quit {
                            self.should_quit = true;
                        }
                    }
                    Ok(Event::Mouse(mouse)) => {
                        if handle_mouse(&mut self.state, mouse) == KeyAction::Quit {
                            self.should_quit = true;
                        }
                    }
                    Ok(Event::Resize) => debug!("terminal resized"),
                    Err(_) => self.should_quit = true,
                }

                if self.should_quit {
                    return Ok(());
                }
            }
        })();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("dashboard stopped");

        result
    }
}
