//! Paging through a roster with the keyboard.

use crate::config::ResolvedConfig;
use crate::state::OutOfRangePolicy;
use crate::test_harness::AcceptanceTestHarness;
use crate::view::constants::NO_RESULTS_MESSAGE;
use crossterm::event::{KeyCode, KeyModifiers};
use std::num::NonZeroUsize;

fn numbered_students(n: usize) -> String {
    (1..=n)
        .map(|i| {
            format!(
                r#"{{"id":"{i}","name":"Student {i}","email":"s{i}@school.edu"}}"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn harness(n: usize, config: &ResolvedConfig) -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_contents(&numbered_students(n), config, 80, 24).unwrap()
}

#[test]
fn twenty_five_students_make_three_pages() {
    let mut h = harness(25, &ResolvedConfig::default());
    assert_eq!(h.state().view().page_labels(), vec![1, 2, 3]);

    let screen = h.render_to_string();
    assert!(screen.contains("Student 1 ") || screen.contains("Student 1\n"));
    assert!(screen.contains("Student 10"));
    assert!(!screen.contains("Student 11"));
    assert!(screen.contains("Page 1/3"));
}

#[test]
fn walking_forward_stops_at_last_page() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_keys(&[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right]);
    assert_eq!(h.state().view().active_page(), 3);

    let screen = h.render_to_string();
    assert!(screen.contains("Student 21"));
    assert!(screen.contains("Student 25"));
    assert!(screen.contains("Page 3/3"));
}

#[test]
fn shift_g_and_g_jump_to_ends() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    assert_eq!(h.state().view().active_page(), 3);
    h.send_key(KeyCode::Char('g'));
    assert_eq!(h.state().view().active_page(), 1);
}

#[test]
fn ten_students_show_no_page_links() {
    let mut h = harness(10, &ResolvedConfig::default());
    assert!(!h.state().view().show_page_controls());
    assert!(!h.render_to_string().contains('‹'));

    h.send_key(KeyCode::Char('2'));
    assert_eq!(h.state().view().active_page(), 1);
}

#[test]
fn configured_page_size_changes_page_count() {
    let config = ResolvedConfig {
        page_size: NonZeroUsize::new(4).unwrap(),
        ..ResolvedConfig::default()
    };
    let mut h = harness(10, &config);
    assert_eq!(h.state().view().page_labels(), vec![1, 2, 3]);
    h.send_key(KeyCode::Char('3'));
    assert_eq!(h.state().view().visible_records().len(), 2);
}

#[test]
fn page_bar_follows_filter() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_key(KeyCode::Char('/'));
    h.type_text("s2");
    h.send_key(KeyCode::Enter);

    assert_eq!(h.state().view().filtered_len(), 7);
    assert!(h.state().view().page_labels().len() == 1);
    assert!(!h.render_to_string().contains('‹'));
}

#[test]
fn query_with_no_match_shows_message() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_key(KeyCode::Char('/'));
    h.type_text("zzz");
    h.send_key(KeyCode::Enter);

    assert!(h.state().view().is_empty());
    assert!(h.state().view().page_labels().is_empty());
    assert!(h.render_to_string().contains(NO_RESULTS_MESSAGE));
}

#[test]
fn navigation_on_empty_result_is_a_no_op() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_key(KeyCode::Char('/'));
    h.type_text("zzz");
    h.send_key(KeyCode::Enter);
    h.send_key(KeyCode::Esc);

    h.send_keys(&[KeyCode::Right, KeyCode::End, KeyCode::Left]);
    assert_eq!(h.state().view().active_page(), 1);
    assert!(h.state().view().visible_records().is_empty());
}

#[test]
fn empty_policy_keeps_out_of_range_selection() {
    let config = ResolvedConfig {
        page_policy: OutOfRangePolicy::Empty,
        ..ResolvedConfig::default()
    };
    let mut h = harness(25, &config);
    h.send_key(KeyCode::Char('7'));
    assert_eq!(h.state().view().active_page(), 7);
    assert!(h.state().view().visible_records().is_empty());

    // Stepping back pulls the page into range
    h.send_key(KeyCode::Left);
    assert_eq!(h.state().view().active_page(), 2);
}

#[test]
fn clamp_policy_pulls_selection_into_range() {
    let mut h = harness(25, &ResolvedConfig::default());
    h.send_key(KeyCode::Char('7'));
    assert_eq!(h.state().view().active_page(), 3);
    assert_eq!(h.state().view().visible_records().len(), 5);
}
