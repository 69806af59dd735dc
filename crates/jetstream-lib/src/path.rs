//! Candidate paths: one way of reaching an open-air coordinate.
//!
//! A [`CandidatePath`] is an immutable value. Extending it with a jet stream
//! produces a new path that shares the predecessor's ridden list, so building
//! a path is O(1) and the predecessor stays usable on its own.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::segment::{Cost, Position, Segment};

/// Persistent, shared-tail list of ridden segments (newest first).
#[derive(Debug)]
struct RiddenNode {
    segment: Segment,
    previous: Option<Arc<RiddenNode>>,
}

/// A partial route ending in open air at `open`.
#[derive(Debug, Clone)]
pub struct CandidatePath {
    weight: Cost,
    open: Position,
    cost: Cost,
    ridden: Option<Arc<RiddenNode>>,
    ridden_len: usize,
}

impl CandidatePath {
    /// The zero-cost path standing at the origin with nothing ridden.
    pub fn seed(weight: Cost) -> Self {
        Self {
            weight,
            open: 0,
            cost: 0,
            ridden: None,
            ridden_len: 0,
        }
    }

    /// Fly in open air to `jet.start`, in either direction, then ride `jet`.
    ///
    /// The caller decides whether the extension is worthwhile.
    pub fn extend(&self, jet: Segment) -> Result<Self> {
        let cost = self
            .pathcost(jet.start)?
            .checked_add(jet.cost)
            .ok_or(Error::CostOverflow { position: jet.end })?;

        Ok(Self {
            weight: self.weight,
            open: jet.end,
            cost,
            ridden: Some(Arc::new(RiddenNode {
                segment: jet,
                previous: self.ridden.clone(),
            })),
            ridden_len: self.ridden_len + 1,
        })
    }

    /// Cost of reaching `position` from this path through open air.
    ///
    /// Fails with [`Error::CostOverflow`] when the total leaves the `i64` range.
    pub fn pathcost(&self, position: Position) -> Result<Cost> {
        position
            .checked_sub(self.open)
            .and_then(Position::checked_abs)
            .and_then(|distance| distance.checked_mul(self.weight))
            .and_then(|flight| flight.checked_add(self.cost))
            .ok_or(Error::CostOverflow { position })
    }

    /// Whether reaching `position` means moving forward (or staying put).
    pub fn is_forward(&self, position: Position) -> bool {
        position >= self.open
    }

    pub fn weight(&self) -> Cost {
        self.weight
    }

    pub fn open(&self) -> Position {
        self.open
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn ridden_len(&self) -> usize {
        self.ridden_len
    }

    /// Ridden segments in the order they were added.
    pub fn ridden(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.ridden_len);
        let mut node = self.ridden.as_deref();
        while let Some(current) = node {
            segments.push(current.segment);
            node = current.previous.as_deref();
        }
        segments.reverse();
        segments
    }
}
