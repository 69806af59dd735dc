//! Flight planning module.
//!
//! This module provides:
//! - [`FlightAlgorithm`] - Supported planning algorithms
//! - [`FlightRequest`] - High-level planning request
//! - [`FlightPlan`] - Planned route result
//! - [`plan_flight`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in a [`FlightPlanner`] implementation and
//! chosen through [`select_planner`], so `plan_flight` only handles segment
//! preparation and packaging of the result.
//!
//! # Example
//!
//! ```
//! use jetstream_lib::{plan_flight, FlightRequest, Segment};
//!
//! let request = FlightRequest::new(1, vec![Segment::new(5, 8, 1), Segment::new(1, 3, 2)]);
//! let plan = plan_flight(&request).unwrap();
//! assert_eq!(plan.cost, 6);
//! ```

mod planner;

pub use planner::{
    select_planner, ExhaustivePlanner, FlightPlanner, FrontierPlanner, EXHAUSTIVE_SEGMENT_LIMIT,
};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::segment::{prepare_segments, Cost, Position, Segment};

/// Supported planning algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlightAlgorithm {
    /// Single pass over the segments maintaining a frontier of candidate paths.
    #[default]
    Frontier,
    /// Enumerate every combination of segments (small inputs only).
    Exhaustive,
}

impl fmt::Display for FlightAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FlightAlgorithm::Frontier => "frontier",
            FlightAlgorithm::Exhaustive => "exhaustive",
        };
        f.write_str(value)
    }
}

/// High-level planning request. Segments may be in any order.
#[derive(Debug, Clone)]
pub struct FlightRequest {
    /// Open-air cost per unit of distance.
    pub weight: Cost,
    pub segments: Vec<Segment>,
    pub algorithm: FlightAlgorithm,
}

impl FlightRequest {
    /// Request using the default frontier algorithm.
    pub fn new(weight: Cost, segments: Vec<Segment>) -> Self {
        Self {
            weight,
            segments,
            algorithm: FlightAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: FlightAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightPlan {
    pub algorithm: FlightAlgorithm,
    pub weight: Cost,
    /// Total energy spent reaching `destination`.
    pub cost: Cost,
    /// End of the furthest-reaching segment (or the origin if there are none).
    pub destination: Position,
    /// Segments ridden, in riding order.
    pub ridden: Vec<Segment>,
    pub segment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_frontier: Option<usize>,
}

impl FlightPlan {
    /// Number of jet streams ridden.
    pub fn jet_count(&self) -> usize {
        self.ridden.len()
    }
}

/// Compute the cheapest route for `request`.
///
/// Segments are sorted once into processing order, handed to the selected
/// planner, and the winning path is packaged into a [`FlightPlan`].
pub fn plan_flight(request: &FlightRequest) -> Result<FlightPlan> {
    let segments = prepare_segments(request.segments.iter().copied());
    let planner = select_planner(request.algorithm);

    debug!(
        algorithm = %request.algorithm,
        weight = request.weight,
        segments = segments.len(),
        "planning flight"
    );

    let outcome = planner.plan(request.weight, &segments)?;
    let resolution = outcome.resolution;

    debug!(
        cost = resolution.cost,
        destination = resolution.destination,
        jets = resolution.path.ridden_len(),
        peak_frontier = ?outcome.peak_frontier,
        "flight planned"
    );

    Ok(FlightPlan {
        algorithm: request.algorithm,
        weight: request.weight,
        cost: resolution.cost,
        destination: resolution.destination,
        ridden: resolution.path.ridden(),
        segment_count: segments.len(),
        peak_frontier: outcome.peak_frontier,
    })
}
