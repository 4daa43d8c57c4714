//! Reference worlds implementing [`lrta_kernel::domain::SearchDomain`].
//!
//! Blocked states never appear among another state's successors or
//! predecessors.

pub mod graph_world;
pub mod grid_world;

pub use graph_world::GraphWorld;
pub use grid_world::{Cell, Connectivity, GridWorld, ParsedGrid};
