//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod malformed_record;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use malformed_record::MalformedRecord;
pub use record::{InvalidRecordId, Record, RecordId, RecordSet};
