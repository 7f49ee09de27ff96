//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive the TUI through key events
//! against a TestBackend.

mod acceptance_pagination;
