//! Jet stream segments and segment set preparation.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Coordinate along the flight axis.
pub type Position = i64;

/// Energy units; used for weights, segment costs and path totals.
pub type Cost = i64;

/// An accelerated interval that can only be entered at `start` and left at `end`.
///
/// Segments are opaque to the optimizer: nothing in the core checks
/// `start <= end` or a non-negative cost. Use [`Segment::validate`] at the
/// input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
    pub cost: Cost,
}

impl Segment {
    pub fn new(start: Position, end: Position, cost: Cost) -> Self {
        Self { start, end, cost }
    }

    /// Check the input-range rules for a segment read from `line`.
    pub fn validate(&self, line: usize) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvalidSegment {
                line,
                start: self.start,
                end: self.end,
            });
        }
        if self.cost < 0 {
            return Err(Error::NegativeCost {
                line,
                cost: self.cost,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// Sort segments into processing order: ascending `start`.
///
/// Equal starts are ordered by `(end, cost)` so that the same multiset of
/// segments always yields the same sequence regardless of input order.
pub fn prepare_segments<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut sorted: Vec<Segment> = segments.into_iter().collect();
    sorted.sort_unstable_by_key(|segment| (segment.start, segment.end, segment.cost));
    sorted
}

/// Furthest coordinate reachable through `segments`, never less than the origin.
pub fn furthest_end(segments: &[Segment]) -> Position {
    segments
        .iter()
        .map(|segment| segment.end)
        .fold(0, Position::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_start_end_pair() {
        assert_eq!(Segment::new(3, 7, 1).to_string(), "(3,7)");
    }

    #[test]
    fn prepare_sorts_by_start() {
        let sorted = prepare_segments(vec![
            Segment::new(5, 8, 1),
            Segment::new(1, 3, 2),
            Segment::new(2, 6, 100),
        ]);
        let starts: Vec<_> = sorted.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![1, 2, 5]);
    }

    #[test]
    fn prepare_orders_equal_starts_deterministically() {
        let a = prepare_segments(vec![Segment::new(4, 9, 3), Segment::new(4, 6, 1)]);
        let b = prepare_segments(vec![Segment::new(4, 6, 1), Segment::new(4, 9, 3)]);
        assert_eq!(a, b);
        assert_eq!(a[0], Segment::new(4, 6, 1));
    }

    #[test]
    fn prepare_keeps_duplicates() {
        let sorted = prepare_segments(vec![Segment::new(1, 2, 0), Segment::new(1, 2, 0)]);
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn serializes_as_plain_object() {
        let value = serde_json::to_value(Segment::new(3, 7, 1)).expect("serialize");
        let expected = serde_json::json!({ "start": 3, "end": 7, "cost": 1 });
        assert_eq!(value, expected);
    }

    #[test]
    fn validate_rejects_reversed_segment() {
        let err = Segment::new(7, 3, 1).validate(4).expect_err("reversed");
        assert!(matches!(
            err,
            Error::InvalidSegment {
                line: 4,
                start: 7,
                end: 3
            }
        ));
    }

    #[test]
    fn validate_rejects_negative_cost() {
        let err = Segment::new(1, 3, -2)
            .validate(2)
            .expect_err("negative cost");
        assert!(matches!(err, Error::NegativeCost { line: 2, cost: -2 }));
    }

    #[test]
    fn validate_accepts_zero_length_free_segment() {
        assert!(Segment::new(5, 5, 0).validate(1).is_ok());
    }

    #[test]
    fn furthest_end_defaults_to_origin() {
        assert_eq!(furthest_end(&[]), 0);
        assert_eq!(
            furthest_end(&[Segment::new(1, 9, 0), Segment::new(2, 4, 0)]),
            9
        );
    }
}
