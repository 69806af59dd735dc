//! Workspace tooling package for the jet stream planner.
//!
//! This crate carries no code. It exists so the workspace root has a package
//! to hang the rusty-hook pre-commit configuration on. The planner lives in
//! `crates/jetstream-lib` and the command-line front end in
//! `crates/jetstream-cli`.
