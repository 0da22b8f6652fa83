//! Filtering and ranking of cultural events.
//!
//! Everything in here is pure: no I/O, no shared state. The only async piece is the
//! [`source::EventSource`] trait, which the orchestrator in [`crate::api`] awaits.

pub mod date_range;
pub mod distance;
pub mod filter;
pub mod model;
pub mod ranker;
pub mod source;

/// Maximum number of ranked events handed to the display.
pub const DEFAULT_RESULT_CAP: usize = 10;
