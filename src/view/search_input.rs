//! Search box widget.

use crate::state::SearchState;
use crate::view::styles::RosterStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the box is idle and no filter is applied.
pub const SEARCH_PLACEHOLDER: &str = "Search by name or email (press /)";

/// Search box widget.
///
/// While typing it shows the edit buffer with a cursor; otherwise it shows
/// the applied filter, or a placeholder when there is none.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    applied_query: &'a str,
    pending: bool,
    styles: &'a RosterStyles,
}

impl<'a> SearchInput<'a> {
    /// Widget for the given search state and applied query.
    pub fn new(search_state: &'a SearchState, applied_query: &'a str, styles: &'a RosterStyles) -> Self {
        Self {
            search_state,
            applied_query,
            pending: false,
            styles,
        }
    }

    /// Mark that a typed query is waiting for its quiet period.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    fn title(&self) -> &'static str {
        match (self.search_state.is_typing(), self.pending) {
            (true, true) => " Search … ",
            (true, false) => " Search ",
            (false, _) if self.applied_query.is_empty() => " Search ",
            (false, _) => " Filter ",
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
                let rest: String = after.collect();

                Line::from(vec![
                    Span::styled(before, self.styles.row),
                    Span::styled(cursor_char, self.styles.cursor),
                    Span::styled(rest, self.styles.row),
                ])
            }
            SearchState::Inactive if self.applied_query.is_empty() => {
                Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.muted))
            }
            SearchState::Inactive => Line::from(Span::styled(self.applied_query, self.styles.row)),
        };

        let border_style = if self.search_state.is_typing() {
            self.styles.search_border_focused
        } else {
            self.styles.search_border
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(self.title()),
            )
            .render(area, buf);
    }
}
