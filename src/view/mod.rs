//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, RosterStyles};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{AppError, KeyAction};
use crate::parser::ParsedRoster;
use crate::source::InputSource;
use crate::state::{
    handle_page_action, AppState, FocusPane, PaginatedFilterView, QueryDebouncer,
};
use constants::IDLE_TICK;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: RosterStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: RosterStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C).
    /// Sleeps until a terminal event arrives or the pending query is due,
    /// and redraws only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = poll_timeout(self.app_state.time_until_debounce(Instant::now()));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Fire the pending query if due. Returns true when a redraw is needed.
    fn tick(&mut self, now: Instant) -> bool {
        self.app_state.poll_debounce(now)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if self.app_state.focus == FocusPane::Search && self.handle_search_key(key, now) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::SubmitSearch => {}
            KeyAction::CancelSearch => {
                if self.app_state.clear_filter() {
                    debug!("Filter cleared");
                }
            }
            page_action if page_action.is_page_navigation() => {
                handle_page_action(&mut self.app_state, page_action);
            }
            _ => {}
        }

        false
    }

    /// Keys while the help overlay is open. Everything but close and quit is swallowed.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::Help) | Some(KeyAction::CancelSearch) => {
                self.app_state.help_visible = false;
                false
            }
            _ => false,
        }
    }

    /// Text editing keys for the search box. Returns true when consumed.
    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.app_state.type_char(ch, now);
            }
            KeyCode::Backspace => self.app_state.backspace(now),
            KeyCode::Left => self.app_state.cursor_left(),
            KeyCode::Right => self.app_state.cursor_right(),
            KeyCode::Enter => self.app_state.submit_search(),
            KeyCode::Esc => self.app_state.cancel_search(),
            _ => return false,
        }
        true
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
            if state.help_visible {
                render_help_overlay(frame, styles);
            }
        })?;
        Ok(())
    }
}

/// How long the event loop may block: until the pending query is due, capped at [`IDLE_TICK`].
fn poll_timeout(until_debounce: Option<Duration>) -> Duration {
    until_debounce.map_or(IDLE_TICK, |due| due.min(IDLE_TICK))
}

// ===== Test Helpers =====
//
// DO NOT use these in production code.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: RosterStyles::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Options that only affect the interactive session.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Query applied before the first frame (`--search`).
    pub initial_search: Option<String>,
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

/// Build the initial application state from loaded records and resolved config.
pub fn build_app_state(
    roster: ParsedRoster,
    source_label: impl Into<String>,
    config: &ResolvedConfig,
    initial_search: Option<&str>,
) -> AppState {
    let malformed = roster.malformed.len();
    let mut view = PaginatedFilterView::new(roster.records.into())
        .with_page_size(config.page_size)
        .with_policy(config.page_policy);
    if let Some(query) = initial_search {
        view.set_query(query);
    }

    let debouncer = QueryDebouncer::new(Duration::from_millis(config.debounce_ms));
    AppState::new(view, debouncer).with_source_info(source_label, malformed)
}

/// Load records and run the TUI until the user quits.
///
/// Records are read in full before the terminal switches to raw mode, so
/// input errors print normally. Logging must be initialized by the caller.
pub fn run_with_source(
    mut input_source: InputSource,
    config: &ResolvedConfig,
    options: RunOptions,
) -> Result<(), TuiError> {
    let roster = input_source.load()?;
    let app_state = build_app_state(
        roster,
        input_source.describe(),
        config,
        options.initial_search.as_deref(),
    );
    info!(
        records = app_state.view().total_len(),
        pages = app_state.view().num_pages(),
        "Starting TUI"
    );

    let styles = RosterStyles::with_color_config(ColorConfig::from_env_and_args(options.no_color));
    let mut app = TuiApp::new(app_state, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
