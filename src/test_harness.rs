//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with a simulated clock so debounce behavior can
//! be driven deterministically.

use crate::config::ResolvedConfig;
use crate::parser;
use crate::source::FileSource;
use crate::state::AppState;
use crate::view::{build_app_state, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string, dropping trailing blanks and empty lines.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a fixture file with default config and an 80x24 terminal.
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        let contents = FileSource::new(PathBuf::from(path))?.read_contents()?;
        Self::from_contents(&contents, &ResolvedConfig::default(), 80, 24)
    }

    /// Build from raw record text (JSON array or JSON lines).
    pub fn from_contents(
        contents: &str,
        config: &ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let roster = parser::parse_records(contents).map_err(crate::model::AppError::from)?;
        let state = build_app_state(roster, "fixture", config, None);
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        Ok(Self {
            app: TuiApp::new_for_test(terminal, state),
            now: Instant::now(),
            running: true,
        })
    }

    /// Send a single key. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time, without advancing the clock.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Advance the simulated clock and run one event loop tick.
    ///
    /// Returns true when a pending query fired.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.app.tick_test(self.now)
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the screen text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
