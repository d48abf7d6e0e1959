//! Pipeline entry points for word-of-the-day operations.
//!
//! - `Enricher`: select, look up, and translate the day's word
//! - `DailyCache`: keep the computed record for a freshness window

pub mod cache;
pub mod enrich;

pub use cache::DailyCache;
pub use enrich::{Enricher, MISSING_EXAMPLE};
