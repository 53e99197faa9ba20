//! Reading range lines from files or standard input.

use crate::error::CidrError;
use crate::models::OrderedRangeSet;
use crate::processing::parse_range;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Longest accepted line, fits `255.255.255.255/32-255.255.255.255/32`.
pub const MAX_LINE_LEN: usize = 37;

/// One source of range lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn open(&self) -> Result<Box<dyn BufRead>, CidrError> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path).map_err(|source| CidrError::FileOpen {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse every line of `reader` into `set`, returning the number of ranges read.
///
/// Stops at the first bad line. `origin` names the source in error messages.
pub fn read_ranges<R: BufRead>(
    reader: R,
    origin: &str,
    set: &mut OrderedRangeSet,
) -> Result<usize, CidrError> {
    let mut count = 0;
    for (i, line) in reader.split(b'\n').enumerate() {
        let mut line = line.map_err(|source| CidrError::Read {
            origin: origin.to_string(),
            source,
        })?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.len() > MAX_LINE_LEN {
            return Err(CidrError::LineTooLong {
                origin: origin.to_string(),
                line: i + 1,
            });
        }

        let text = String::from_utf8_lossy(&line);
        let range = parse_range(text.trim()).map_err(|e| CidrError::Line {
            origin: origin.to_string(),
            line: i + 1,
            source: Box::new(e),
        })?;
        set.insert(range);
        count += 1;
    }
    Ok(count)
}

/// Read all inputs, in order, into one sorted set.
pub fn read_inputs(inputs: &[Input]) -> Result<OrderedRangeSet, CidrError> {
    let mut set = OrderedRangeSet::new();
    for input in inputs {
        let reader = input.open()?;
        log::debug!("reading ranges from {input}");
        let count = read_ranges(reader, &input.to_string(), &mut set)?;
        log::info!("read {count} range(s) from {input}");
    }
    Ok(set)
}
