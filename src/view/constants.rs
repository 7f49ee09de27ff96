//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

use std::time::Duration;

/// Height of the header line (source and match counts).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search box in lines (border + input line).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the page link bar.
pub const PAGE_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the `ID` column.
pub const ID_COLUMN_WIDTH: u16 = 6;

/// Width of the `Joined` column (`MM/DD/YY` plus padding).
pub const JOINED_COLUMN_WIDTH: u16 = 10;

/// Share of the remaining row width given to the name column.
pub const NAME_COLUMN_PERCENT: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Longest the event loop sleeps when no query is pending.
pub const IDLE_TICK: Duration = Duration::from_millis(500);

/// Shown in place of the record list when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "Oh snap! Your query didn't return any result";
