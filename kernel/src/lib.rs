//! LRTA Kernel: collaborator contracts for the real-time planner.
//!
//! # API Surface
//!
//! - [`domain::SearchDomain`] -- the graph/world the planner searches
//! - [`heuristic::DistanceHeuristic`] -- estimate + learning callback
//! - [`plan::Plan`] -- the product of a successful planning call
//! - [`cost::Cost`] -- total-ordered cost scalar with a `+∞` sentinel
//! - [`digest`] -- canonical JSON bytes and content hashing for artifacts
//!
//! # Module Dependency Direction
//!
//! `cost`, `digest` ← `domain` ← `heuristic`, `plan`
//!
//! One-way only. The kernel knows nothing about the planner's internals.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod digest;
pub mod domain;
pub mod heuristic;
pub mod plan;
