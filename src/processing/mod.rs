//! Range processing logic.
//!
//! - [`parse`] - one input line to a normalized [`Range`](crate::models::Range)
//! - [`coalesce`] - sorted ranges to maximal disjoint runs

mod coalesce;
mod parse;

// Re-export public functions
pub use coalesce::{coalesce, Coalesce};
pub use parse::parse_range;
