//! LRTA Harness: reference worlds, heuristic suppliers and an agent runner.
//!
//! The harness drives the planner the way an agent would: plan, walk the
//! partial plan, re-plan from wherever it ended up, optionally changing the
//! world in between.
//!
//! The harness does NOT implement planning logic; it delegates to
//! `lrta_search`. Worlds provide graph data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod heuristics;
pub mod runner;
pub mod worlds;

pub use error::HarnessError;
