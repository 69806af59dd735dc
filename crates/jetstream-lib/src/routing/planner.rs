//! Flight planning strategies implementing the Strategy pattern.
//!
//! This module provides the `FlightPlanner` trait and its implementations.
//! The frontier planner is the production algorithm; the exhaustive planner
//! enumerates every riding combination and exists to cross-check it on small
//! inputs.

use crate::error::{Error, Result};
use crate::frontier::{optimize, Optimization, Resolution};
use crate::path::CandidatePath;
use crate::segment::{furthest_end, Cost, Segment};

use super::FlightAlgorithm;

/// Largest segment count the exhaustive planner will enumerate.
pub const EXHAUSTIVE_SEGMENT_LIMIT: usize = 20;

/// Trait for flight planning strategies.
///
/// Implementations receive segments already sorted into processing order.
pub trait FlightPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> FlightAlgorithm;

    /// Find the cheapest route to the far end of the furthest-reaching segment.
    fn plan(&self, weight: Cost, segments: &[Segment]) -> Result<Optimization>;
}

/// Frontier planner: keeps every path that might still be optimal and folds
/// the segments through it once.
#[derive(Debug, Clone, Default)]
pub struct FrontierPlanner;

impl FlightPlanner for FrontierPlanner {
    fn algorithm(&self) -> FlightAlgorithm {
        FlightAlgorithm::Frontier
    }

    fn plan(&self, weight: Cost, segments: &[Segment]) -> Result<Optimization> {
        optimize(weight, segments)
    }
}

/// Reference planner that tries every subsequence of the segments.
///
/// Runs in O(n·2ⁿ) and refuses more than [`EXHAUSTIVE_SEGMENT_LIMIT`] segments.
#[derive(Debug, Clone, Default)]
pub struct ExhaustivePlanner;

impl FlightPlanner for ExhaustivePlanner {
    fn algorithm(&self) -> FlightAlgorithm {
        FlightAlgorithm::Exhaustive
    }

    fn plan(&self, weight: Cost, segments: &[Segment]) -> Result<Optimization> {
        if segments.len() > EXHAUSTIVE_SEGMENT_LIMIT {
            return Err(Error::TooManySegments {
                count: segments.len(),
                limit: EXHAUSTIVE_SEGMENT_LIMIT,
            });
        }

        let destination = furthest_end(segments);
        let seed = CandidatePath::seed(weight);
        let mut best = Resolution {
            cost: seed.pathcost(destination)?,
            path: seed.clone(),
            destination,
        };

        for mask in 1u32..(1u32 << segments.len()) {
            let path = segments
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .try_fold(seed.clone(), |path, (_, &jet)| path.extend(jet))?;
            let cost = path.pathcost(destination)?;
            if cost < best.cost {
                best = Resolution {
                    path,
                    destination,
                    cost,
                };
            }
        }

        Ok(Optimization {
            resolution: best,
            peak_frontier: None,
        })
    }
}

/// Select the planner for a given algorithm.
pub fn select_planner(algorithm: FlightAlgorithm) -> Box<dyn FlightPlanner> {
    match algorithm {
        FlightAlgorithm::Frontier => Box::new(FrontierPlanner),
        FlightAlgorithm::Exhaustive => Box::new(ExhaustivePlanner),
    }
}
