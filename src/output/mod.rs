//! Output formatting for merged runs.
//!
//! - [`cidr`] - splitting a run into minimal CIDR blocks
//! - [`printer`] - writing runs per [`OutputMode`]

mod cidr;
mod printer;

pub use cidr::{cidr_blocks, CidrBlock, CidrBlocks};
pub use printer::{write_runs, OutputMode};
