//! Jet stream CLI library.
//!
//! This crate provides command-line interface utilities for the jet stream
//! route optimizer, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
