//! Merge IPv4 addresses, CIDR blocks and `lo-hi` ranges into a minimal,
//! sorted set of disjoint ranges.
//!
//! Pipeline: input lines -> [`processing::parse_range`] ->
//! [`models::OrderedRangeSet`] -> [`processing::coalesce`] ->
//! [`output::write_runs`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use error::CidrError;
use std::io::Write;

pub use input::{read_inputs, Input};
pub use models::{OrderedRangeSet, Range};
pub use output::OutputMode;

/// Read every input, merge, and write the runs to `out`.
///
/// Nothing is written until all inputs have been read and parsed.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize, CidrError> {
    let set = read_inputs(&config.inputs)?;
    log::info!("merging {} range(s)", set.len());
    write_merged(out, config.mode, set)
}

/// Merge an already-filled set and write it out.
pub fn write_merged<W: Write>(
    out: &mut W,
    mode: OutputMode,
    set: OrderedRangeSet,
) -> Result<usize, CidrError> {
    output::write_runs(out, mode, set.coalesce())
}
