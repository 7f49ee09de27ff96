//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod debounce;
pub mod filter;
pub mod page_handler;
pub mod pagination;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use debounce::QueryDebouncer;
pub use filter::FilterQuery;
pub use page_handler::handle_page_action;
pub use pagination::{num_pages, OutOfRangePolicy, PageOutput, PaginatedFilterView};
pub use search::SearchState;
