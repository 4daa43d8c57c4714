//! LRTA Search: the LSS-LRTA* bounded learning real-time planner.
//!
//! This crate provides the planning layer. It depends only on `lrta_kernel`
//! and does NOT depend on `lrta_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lrta_kernel  ←  lrta_search  ←  lrta_harness
//! (contracts)     (planner)       (worlds, heuristics, agent runner)
//! ```
//!
//! # Key types
//!
//! - [`LssLrtaPlanner`] -- one bounded plan per call, learning into the supplier
//! - [`SharedPlanner`] -- mutex-guarded handle for multi-threaded callers
//! - [`PlanOutcome`] / [`NoPathReason`] -- found plan or routine no-path result
//! - [`PlannerError`] -- collaborator contract violations and internal faults
//! - [`PlannerPolicyV1`] -- lookahead configuration
//! - [`PlanningReportV1`] -- per-call audit record with a content digest

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod closed;
pub mod correction;
pub mod error;
pub mod expansion;
pub mod frontier;
pub mod node;
pub mod path;
pub mod planner;
pub mod policy;
pub mod registry;
pub mod report;
pub mod session;
pub mod shared;

pub use error::PlannerError;
pub use planner::{LssLrtaPlanner, NoPathReason, PlanOutcome};
pub use policy::PlannerPolicyV1;
pub use report::PlanningReportV1;
pub use shared::SharedPlanner;
