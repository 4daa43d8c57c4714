//! `GridWorld`: rectangular grid with mutable blocked cells.
//!
//! Orthogonal moves cost 1, diagonal moves cost `√2`. With eight-way
//! connectivity a diagonal move is only allowed when both orthogonal cells it
//! passes between are open (no corner cutting).
//!
//! # Text format
//!
//! ```text
//! S..#
//! .#..
//! ...G
//! ```
//!
//! `.` open, `#` blocked, `S` start, `G` goal. All rows must have the same
//! length.

use std::collections::BTreeSet;
use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use lrta_kernel::domain::SearchDomain;

use crate::error::HarnessError;

/// Grid coordinate. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Neighbourhood used for successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Four,
    Eight,
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
    connectivity: Connectivity,
    blocked: BTreeSet<Cell>,
}

/// A grid parsed from text, with the optional `S` and `G` markers.
#[derive(Debug, Clone)]
pub struct ParsedGrid {
    pub world: GridWorld,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

impl GridWorld {
    /// Fully open grid.
    #[must_use]
    pub fn open(width: i32, height: i32, connectivity: Connectivity) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            connectivity,
            blocked: BTreeSet::new(),
        }
    }

    /// Parse the text format described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidGrid`] for an empty grid, ragged rows,
    /// unknown characters, or a repeated `S`/`G` marker.
    pub fn from_rows(rows: &[&str], connectivity: Connectivity) -> Result<ParsedGrid, HarnessError> {
        let invalid = |detail: String| HarnessError::InvalidGrid { detail };

        let Some(first) = rows.first() else {
            return Err(invalid("no rows".into()));
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(invalid("empty first row".into()));
        }

        let mut blocked = BTreeSet::new();
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(invalid(format!("row {y} has length {}, expected {width}", row.chars().count())));
            }
            let y = i32::try_from(y).map_err(|_| invalid("too many rows".into()))?;
            for (x, ch) in row.chars().enumerate() {
                let x = i32::try_from(x).map_err(|_| invalid("row too long".into()))?;
                let cell = Cell::new(x, y);
                match ch {
                    '.' => {}
                    '#' => {
                        blocked.insert(cell);
                    }
                    'S' if start.is_none() => start = Some(cell),
                    'G' if goal.is_none() => goal = Some(cell),
                    'S' | 'G' => return Err(invalid(format!("repeated marker {ch:?} at ({x}, {y})"))),
                    other => return Err(invalid(format!("unknown cell {other:?} at ({x}, {y})"))),
                }
            }
        }

        let width = i32::try_from(width).map_err(|_| invalid("row too long".into()))?;
        let height = i32::try_from(rows.len()).map_err(|_| invalid("too many rows".into()))?;
        Ok(ParsedGrid {
            world: Self {
                width,
                height,
                connectivity,
                blocked,
            },
            start,
            goal,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// In bounds and not blocked.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.blocked.contains(&cell)
    }

    pub fn block(&mut self, cell: Cell) {
        if self.contains(cell) {
            self.blocked.insert(cell);
        }
    }

    pub fn unblock(&mut self, cell: Cell) {
        self.blocked.remove(&cell);
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&c| !self.blocked.contains(&c))
    }

    fn neighbours(&self, cell: Cell) -> Vec<Cell> {
        if !self.contains(cell) {
            return Vec::new();
        }
        let mut out: Vec<Cell> = ORTHOGONAL
            .iter()
            .map(|&(dx, dy)| Cell::new(cell.x + dx, cell.y + dy))
            .filter(|&c| self.is_open(c))
            .collect();
        if self.connectivity == Connectivity::Eight {
            out.extend(
                DIAGONAL
                    .iter()
                    .filter(|&&(dx, dy)| {
                        self.is_open(Cell::new(cell.x + dx, cell.y))
                            && self.is_open(Cell::new(cell.x, cell.y + dy))
                    })
                    .map(|&(dx, dy)| Cell::new(cell.x + dx, cell.y + dy))
                    .filter(|&c| self.is_open(c)),
            );
        }
        out
    }
}

impl SearchDomain for GridWorld {
    type State = Cell;

    fn is_blocked(&self, state: &Cell) -> bool {
        !self.is_open(*state)
    }

    fn successors(&self, state: &Cell) -> Vec<Cell> {
        self.neighbours(*state)
    }

    // Moves are symmetric.
    fn predecessors(&self, state: &Cell) -> Vec<Cell> {
        self.neighbours(*state)
    }

    fn cost(&self, from: &Cell, to: &Cell) -> f64 {
        match ((to.x - from.x).abs(), (to.y - from.y).abs()) {
            (0, 0) => 0.0,
            (1, 0) | (0, 1) => 1.0,
            (1, 1) if self.connectivity == Connectivity::Eight => SQRT_2,
            _ => f64::INFINITY,
        }
    }
}
