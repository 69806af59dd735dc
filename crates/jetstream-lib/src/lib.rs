//! Jet stream library entry points.
//!
//! This crate computes the minimum-energy route along a one-dimensional axis
//! from the origin to the far end of the furthest-reaching jet stream. It
//! exposes helpers to load jet stream input, sort segments into processing
//! order, run the planners, and summarise the result. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod frontier;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;
pub mod segment;

pub use error::{Error, Result};
pub use frontier::{optimize, Frontier, Optimization, Resolution};
pub use input::FlightInput;
pub use output::{format_with_separators, FlightLeg, FlightRenderMode, FlightSummary, RenderStyle};
pub use path::CandidatePath;
pub use routing::{
    plan_flight, select_planner, ExhaustivePlanner, FlightAlgorithm, FlightPlan, FlightPlanner,
    FlightRequest, FrontierPlanner, EXHAUSTIVE_SEGMENT_LIMIT,
};
pub use segment::{furthest_end, prepare_segments, Cost, Position, Segment};
