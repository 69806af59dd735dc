//! Jet stream input loading.
//!
//! The input format is line-oriented text:
//!
//! ```text
//! 1            # open-air weight
//! 5 8 1        # start end cost
//! 1 3 2
//! ```
//!
//! The first non-blank line holds the weight; every following non-blank line
//! holds one jet stream. Lines starting with `#` and anything after a `#` are
//! ignored. Segments may appear in any order.
//!
//! Every value must fit in an `i64`. Planning reports
//! [`Error::CostOverflow`] when an energy total would not.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::routing::FlightRequest;
use crate::segment::{Cost, Segment};

/// Weight and jet streams read from an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightInput {
    pub weight: Cost,
    pub segments: Vec<Segment>,
}

impl FlightInput {
    /// Load flight input from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load flight input from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut weight = None;
        let mut segments = Vec::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let content = strip_comment(&line).trim();
            if content.is_empty() {
                continue;
            }

            match weight {
                None => weight = Some(parse_weight(line_no, content)?),
                Some(_) => segments.push(parse_segment(line_no, content)?),
            }
        }

        let weight = weight.ok_or(Error::MissingWeight)?;
        debug!(weight, segments = segments.len(), "loaded flight input");

        Ok(Self { weight, segments })
    }

    /// Turn the input into a planning request with the default algorithm.
    pub fn into_request(self) -> FlightRequest {
        FlightRequest::new(self.weight, self.segments)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    }
}

fn parse_weight(line: usize, content: &str) -> Result<Cost> {
    let weight: Cost = content.parse().map_err(|_| Error::InvalidWeight {
        line,
        value: content.to_string(),
    })?;
    if weight < 0 {
        return Err(Error::NegativeWeight { value: weight });
    }
    Ok(weight)
}

fn parse_segment(line: usize, content: &str) -> Result<Segment> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::MalformedSegment {
            line,
            reason: format!("expected 3 fields (start end cost), found {}", fields.len()),
        });
    }

    let mut values = [0; 3];
    for (slot, (name, raw)) in values
        .iter_mut()
        .zip(["start", "end", "cost"].into_iter().zip(fields))
    {
        *slot = raw.parse().map_err(|_| Error::MalformedSegment {
            line,
            reason: format!("{name} '{raw}' is not an integer"),
        })?;
    }

    let segment = Segment::new(values[0], values[1], values[2]);
    segment.validate(line)?;
    Ok(segment)
}
