//! Error kinds for reading, parsing and printing address ranges.
//!
//! Every error is fatal: the binary reports it on stderr and exits with status 1.

use std::io;
use std::path::PathBuf;

/// Errors raised while turning input lines into merged output.
#[derive(Debug, thiserror::Error)]
pub enum CidrError {
    /// Bad command line. Holds the rendered usage message.
    #[error("{0}")]
    Usage(String),

    #[error("{}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}:{line}: input line too long")]
    LineTooLong { origin: String, line: usize },

    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("range ends are reversed: {0}")]
    InvalidRange(String),

    /// A parse error tagged with where it was found.
    #[error("{origin}:{line}: {source}")]
    Line {
        origin: String,
        line: usize,
        #[source]
        source: Box<CidrError>,
    },

    #[error("error reading {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

impl CidrError {
    /// The underlying error, with any line location stripped off.
    pub fn root(&self) -> &CidrError {
        match self {
            CidrError::Line { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when stdout was closed by the reader, e.g. `cidr -e | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CidrError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
