//! Help overlay widget displaying keyboard shortcuts.
//!
//! Centered modal listing every binding by category.
//! Toggled by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::RosterStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// (category, [(keys, description)])
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("l/n/→/PgDn", "Next page"),
            ("h/p/←/PgUp", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("1-9", "Jump to page"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Edit search"),
            ("Enter", "Apply now and clear the box"),
            ("Esc", "Leave search box / clear filter"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &RosterStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.search_border_focused),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect with the given percentage of `area`'s width and height, centered in it.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &RosterStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.help_category)));
        for (keys, description) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", keys), styles.help_key),
                Span::styled(*description, styles.row),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
