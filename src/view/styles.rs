//! Styling configuration.
//!
//! One palette for the whole screen, collapsed to plain text when colors are off.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// True unless colors were turned off.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== RosterStyles =====

/// Styles for every element of the roster screen.
///
/// Emphasis (bold, reversed) survives `--no-color` so the active page and
/// the cursor stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStyles {
    /// Top title bar.
    pub header: Style,
    /// Column headings.
    pub table_header: Style,
    /// Record rows.
    pub row: Style,
    /// Secondary text such as page arrows.
    pub muted: Style,
    /// Inactive page labels.
    pub page_link: Style,
    /// The active page label.
    pub page_link_active: Style,
    /// The no-results message.
    pub empty_message: Style,
    /// Search box border when unfocused.
    pub search_border: Style,
    /// Search box border while typing.
    pub search_border_focused: Style,
    /// Character under the search cursor.
    pub cursor: Style,
    /// Bottom status bar.
    pub status: Style,
    /// Section titles in the help overlay.
    pub help_category: Style,
    /// Key names in the help overlay.
    pub help_key: Style,
}

impl RosterStyles {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if !config.colors_enabled() {
            return Self {
                header: bold,
                table_header: bold.add_modifier(Modifier::UNDERLINED),
                row: Style::default(),
                muted: Style::default(),
                page_link: Style::default(),
                page_link_active: reversed.add_modifier(Modifier::BOLD),
                empty_message: bold,
                search_border: Style::default(),
                search_border_focused: bold,
                cursor: reversed,
                status: Style::default(),
                help_category: bold,
                help_key: bold,
            };
        }

        Self {
            header: bold.fg(Color::Cyan),
            table_header: bold.fg(Color::Yellow),
            row: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            page_link: Style::default().fg(Color::Blue),
            page_link_active: bold.fg(Color::Black).bg(Color::Blue),
            empty_message: bold.fg(Color::Red),
            search_border: Style::default().fg(Color::Gray),
            search_border_focused: Style::default().fg(Color::Cyan),
            cursor: bold.fg(Color::Black).bg(Color::White),
            status: Style::default().fg(Color::Gray),
            help_category: bold.fg(Color::Magenta),
            help_key: bold.fg(Color::Yellow),
        }
    }
}

impl Default for RosterStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
