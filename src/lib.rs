//! Roster
//!
//! Terminal viewer that pages through a student directory and filters it
//! by name or email as you type.
//!
//! Pure core (`model`, `parser`, `state`) / impure shell (`source`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
