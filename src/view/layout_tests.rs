//! Tests for screen layout rendering.

use super::*;
use crate::model::{Record, RecordId, RecordSet};
use crate::state::debounce::QueryDebouncer;
use crate::state::pagination::PaginatedFilterView;
use crate::state::AppState;
use chrono::NaiveDate;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn students(n: usize) -> RecordSet {
    (1..=n)
        .map(|i| {
            Record::new(
                RecordId::from_position(i),
                format!("Student {}", i),
                format!("s{}@school.edu", i),
            )
        })
        .collect()
}

fn state_with(records: RecordSet) -> AppState {
    AppState::new(PaginatedFilterView::new(records), QueryDebouncer::default())
        .with_source_info("students.json", 0)
}

fn render(state: &AppState) -> String {
    let styles = RosterStyles::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &styles))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

// ===== Full screen =====

#[test]
fn first_page_shows_first_ten_records() {
    let text = render(&state_with(students(25)));
    assert!(text.contains("Student 1 "), "got:\n{}", text);
    assert!(text.contains("Student 10"));
    assert!(!text.contains("Student 11"));
    assert!(text.contains("s3@school.edu"));
}

#[test]
fn header_shows_source_and_counts() {
    let mut state = state_with(students(25));
    state.apply_query("s2");
    let text = render(&state);
    assert!(text.contains("students.json"));
    assert!(text.contains("7 of 25 records"), "got:\n{}", text);
}

#[test]
fn page_bar_shown_when_matches_exceed_page_size() {
    let text = render(&state_with(students(25)));
    assert!(text.contains(" 1  2  3 "), "got:\n{}", text);
    assert!(text.contains("Page 1/3"));
}

#[test]
fn page_bar_hidden_when_one_page_suffices() {
    let text = render(&state_with(students(10)));
    assert!(!text.contains('‹'), "got:\n{}", text);
    assert!(text.contains("Page 1/1"));
}

#[test]
fn empty_result_shows_no_results_message() {
    let mut state = state_with(students(25));
    state.apply_query("zzz");
    let text = render(&state);
    assert!(text.contains(NO_RESULTS_MESSAGE), "got:\n{}", text);
    assert!(text.contains("No matches"));
    assert!(!text.contains('‹'));
}

#[test]
fn second_page_shows_next_records() {
    let mut state = state_with(students(25));
    state.view_mut().select_page(3);
    let text = render(&state);
    assert!(text.contains("Student 21"));
    assert!(text.contains("Student 25"));
    assert!(!text.contains("Student 20"));
    assert!(text.contains("Page 3/3"));
}

#[test]
fn rows_show_record_ids() {
    let text = render(&state_with(students(3)));
    assert!(text.contains("#2"), "got:\n{}", text);
}

#[test]
fn joined_date_renders_as_month_day_year() {
    let record = Record::new(RecordId::from_position(1), "Ada", "ada@x.io")
        .with_joined(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    let text = render(&state_with(RecordSet::from(vec![record])));
    assert!(text.contains("03/05/24"), "got:\n{}", text);
}

#[test]
fn status_bar_reports_malformed_records() {
    let state = AppState::new(PaginatedFilterView::new(students(3)), QueryDebouncer::default())
        .with_source_info("<stdin>", 2);
    let text = render(&state);
    assert!(text.contains("2 malformed skipped"), "got:\n{}", text);
}

#[test]
fn search_focus_changes_hints() {
    let mut state = state_with(students(3));
    state.start_search();
    let text = render(&state);
    assert!(text.contains("Enter: apply"), "got:\n{}", text);
}

// ===== Helpers =====

#[test]
fn column_widths_split_remaining_space() {
    assert_eq!(column_widths(80), (23, 36));
    assert_eq!(column_widths(10), (0, 0));
}

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_to_width("Ada", 10), "Ada");
    assert_eq!(truncate_to_width("Ada", 3), "Ada");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("Alexandria", 8), "Alexand…");
    assert_eq!(truncate_to_width("Alexandria", 0), "");
}

#[test]
fn truncate_respects_wide_characters() {
    assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
}

#[test]
fn page_bar_highlights_active_label() {
    let styles = RosterStyles::default();
    let line = page_bar_line(&[1, 2, 3], 2, &styles);
    let active: Vec<_> = line
        .spans
        .iter()
        .filter(|s| s.style == styles.page_link_active)
        .map(|s| s.content.to_string())
        .collect();
    assert_eq!(active, vec![" 2 ".to_string()]);
}

#[test]
fn keyboard_hints_mention_clear_only_with_filter() {
    assert!(keyboard_hints(FocusPane::List, true).contains("clear filter"));
    assert!(!keyboard_hints(FocusPane::List, false).contains("clear filter"));
}

#[test]
fn page_bar_text_snapshot() {
    let styles = RosterStyles::default();
    let line = page_bar_line(&[1, 2, 3], 1, &styles);
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    insta::assert_snapshot!(text, @"‹  1  2  3  ›");
}
