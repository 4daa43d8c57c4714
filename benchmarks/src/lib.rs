//! Shared helpers for LRTA benchmark suites.

use lrta_harness::worlds::{Cell, Connectivity, GridWorld};

/// Benchmark grid with its endpoints.
pub struct GridSetup {
    pub world: GridWorld,
    pub start: Cell,
    pub goal: Cell,
}

/// Square grid with vertical walls every fourth column. Each wall has a single
/// gap, alternating between the bottom and top row, so the agent has to
/// zig-zag from the left edge to the right edge.
#[must_use]
pub fn serpentine_grid(size: i32, connectivity: Connectivity) -> GridSetup {
    let mut world = GridWorld::open(size, size, connectivity);
    for (n, x) in (2..size - 1).step_by(4).enumerate() {
        let gap = if n % 2 == 0 { size - 1 } else { 0 };
        for y in (0..size).filter(|&y| y != gap) {
            world.block(Cell::new(x, y));
        }
    }
    GridSetup {
        world,
        start: Cell::new(0, 0),
        goal: Cell::new(size - 1, size - 1),
    }
}

/// Fully open grid from one corner to the other.
#[must_use]
pub fn open_grid(size: i32, connectivity: Connectivity) -> GridSetup {
    GridSetup {
        world: GridWorld::open(size, size, connectivity),
        start: Cell::new(0, 0),
        goal: Cell::new(size - 1, size - 1),
    }
}
