//! Command-line surface: `cidr [-cer] [file ...]`.

use crate::output::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// Merge IPv4 addresses, CIDR blocks and lo-hi ranges, one per line, into a
/// sorted set of disjoint ranges.
#[derive(Debug, Parser)]
#[command(
    name = "cidr",
    version,
    override_usage = "cidr [-cer] [file ...]",
    args_override_self = true
)]
pub struct Cli {
    /// Print merged ranges as minimal CIDR blocks (default)
    #[arg(short = 'c', overrides_with_all = ["enumerate", "range"])]
    pub cidr: bool,

    /// Print every address of the merged ranges
    #[arg(short = 'e', overrides_with_all = ["cidr", "range"])]
    pub enumerate: bool,

    /// Print merged ranges as lo-hi
    #[arg(short = 'r', overrides_with_all = ["cidr", "enumerate"])]
    pub range: bool,

    /// Input files, read in order. Standard input when none are given
    #[arg(value_name = "file")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// The selected mode. The flags override each other, so at most one is set.
    pub fn mode(&self) -> OutputMode {
        if self.enumerate {
            OutputMode::Enumerate
        } else if self.range {
            OutputMode::Range
        } else {
            OutputMode::Cidr
        }
    }
}
