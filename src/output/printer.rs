//! Writing merged runs in the selected output format.

use super::cidr::cidr_blocks;
use crate::error::CidrError;
use crate::models::{format_address, Range};
use std::io::Write;

/// How each merged run is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Minimal CIDR blocks, one per line.
    #[default]
    Cidr,
    /// Every address, one per line.
    Enumerate,
    /// `lo-hi`, or `lo` for a single address.
    Range,
}

impl OutputMode {
    /// Write one run to `out`.
    pub fn write_range<W: Write>(&self, out: &mut W, range: Range) -> std::io::Result<()> {
        match self {
            OutputMode::Cidr => {
                for block in cidr_blocks(range) {
                    writeln!(out, "{block}")?;
                }
            }
            OutputMode::Enumerate => {
                for addr in range.lo..=range.hi {
                    writeln!(out, "{}", format_address(addr))?;
                }
            }
            OutputMode::Range => writeln!(out, "{range}")?,
        }
        Ok(())
    }
}

/// Write every run in order, returning how many runs were written.
pub fn write_runs<W, I>(out: &mut W, mode: OutputMode, runs: I) -> Result<usize, CidrError>
where
    W: Write,
    I: IntoIterator<Item = Range>,
{
    let mut count = 0;
    let mut addresses = 0u64;
    for run in runs {
        mode.write_range(out, run)?;
        count += 1;
        addresses += run.num_addresses();
    }
    out.flush()?;
    log::debug!("wrote {count} merged run(s) covering {addresses} address(es) as {mode:?}");
    Ok(count)
}
