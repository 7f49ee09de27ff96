//! Screen layout rendering.
//!
//! Top to bottom: header, search box, record table, page links, status bar.
//! Reads `AppState` only; never mutates it.

use crate::model::Record;
use crate::state::{AppState, FocusPane};
use crate::view::constants::{
    HEADER_HEIGHT, ID_COLUMN_WIDTH, JOINED_COLUMN_WIDTH, NAME_COLUMN_PERCENT, NO_RESULTS_MESSAGE,
    PAGE_BAR_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::search_input::SearchInput;
use crate::view::styles::RosterStyles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Render the full roster screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &RosterStyles) {
    let view = state.view();
    let page_bar_height = if view.show_page_controls() {
        PAGE_BAR_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(page_bar_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, styles);

    let search = SearchInput::new(&state.search, view.query(), styles)
        .pending(state.debouncer().is_pending());
    frame.render_widget(search, chunks[1]);

    render_record_table(frame, chunks[2], state, styles);

    if page_bar_height > 0 {
        let bar = Paragraph::new(page_bar_line(&view.page_labels(), view.active_page(), styles))
            .alignment(Alignment::Center);
        frame.render_widget(bar, chunks[3]);
    }

    render_status_bar(frame, chunks[4], state, styles);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &RosterStyles) {
    let view = state.view();
    let source = if state.source_label().is_empty() {
        String::new()
    } else {
        format!(" | {}", state.source_label())
    };
    let text = format!(
        "Roster{} | {} of {} records",
        source,
        view.filtered_len(),
        view.total_len()
    );
    frame.render_widget(Paragraph::new(Line::from(text)).style(styles.header), area);
}

/// Record table, or the no-results message when the filter matched nothing.
fn render_record_table(frame: &mut Frame, area: Rect, state: &AppState, styles: &RosterStyles) {
    let view = state.view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.muted)
        .title(" Students ");

    if view.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            NO_RESULTS_MESSAGE,
            styles.empty_message,
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let (name_width, email_width) = column_widths(area.width);
    let rows: Vec<Row> = view
        .visible_records()
        .into_iter()
        .map(|record| record_row(record, name_width, email_width, styles))
        .collect();

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Email"),
        Cell::from("Joined"),
    ])
    .style(styles.table_header);

    let table = Table::new(
        rows,
        [
            Constraint::Length(ID_COLUMN_WIDTH),
            Constraint::Length(name_width),
            Constraint::Length(email_width),
            Constraint::Length(JOINED_COLUMN_WIDTH),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn record_row(
    record: &Record,
    name_width: u16,
    email_width: u16,
    styles: &RosterStyles,
) -> Row<'static> {
    let joined = record
        .joined()
        .map(|date| date.format("%m/%d/%y").to_string())
        .unwrap_or_default();

    Row::new(vec![
        Cell::from(Span::styled(
            truncate_to_width(record.id().as_str(), ID_COLUMN_WIDTH as usize),
            styles.muted,
        )),
        Cell::from(truncate_to_width(record.name(), name_width as usize)),
        Cell::from(truncate_to_width(record.email(), email_width as usize)),
        Cell::from(Span::styled(joined, styles.muted)),
    ])
    .style(styles.row)
}

/// Name and email column widths for a table `total_width` cells wide.
///
/// Accounts for the border, the fixed columns and the one-cell gaps between columns.
pub(crate) fn column_widths(total_width: u16) -> (u16, u16) {
    let rest = total_width
        .saturating_sub(2)
        .saturating_sub(3)
        .saturating_sub(ID_COLUMN_WIDTH)
        .saturating_sub(JOINED_COLUMN_WIDTH);
    let name = rest * NAME_COLUMN_PERCENT / 100;
    (name, rest - name)
}

/// Shorten `text` to at most `max_width` display cells, ending in `…` when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Page links `‹ 1 2 3 ›` with the active label highlighted.
pub(crate) fn page_bar_line(labels: &[usize], active: usize, styles: &RosterStyles) -> Line<'static> {
    let mut spans = vec![Span::styled("‹ ", styles.muted)];
    for &label in labels {
        let style = if label == active {
            styles.page_link_active
        } else {
            styles.page_link
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    spans.push(Span::styled(" ›", styles.muted));
    Line::from(spans)
}

/// Keyboard hints for the status bar, depending on which area has focus.
pub(crate) fn keyboard_hints(focus: FocusPane, has_filter: bool) -> &'static str {
    match (focus, has_filter) {
        (FocusPane::Search, _) => "Enter: apply | Esc: done | ←/→: move cursor",
        (FocusPane::List, true) => "←/→: page | /: search | Esc: clear filter | ?: help | q: quit",
        (FocusPane::List, false) => "←/→: page | /: search | ?: help | q: quit",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &RosterStyles) {
    let view = state.view();
    let pages = view.num_pages();
    let mut parts = Vec::new();

    if pages == 0 {
        parts.push("No matches".to_string());
    } else {
        parts.push(format!("Page {}/{}", view.active_page(), pages));
    }
    if state.malformed_count() > 0 {
        parts.push(format!("{} malformed skipped", state.malformed_count()));
    }
    parts.push(keyboard_hints(state.focus, !view.query().is_empty()).to_string());

    let paragraph = Paragraph::new(Line::from(parts.join(" | "))).style(styles.status);
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
