//! Ship classes and per-ship damage tracking.

use core::fmt;

use crate::common::GameError;
use crate::geometry::{point_on_segment, segments_intersect, Point};

/// Class of ship in the fixed fleet: display name and length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: u8,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, size: u8) -> Self {
        Self { name, size }
    }

    /// Ship's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn size(&self) -> u8 {
        self.size
    }
}

/// A ship placed on the board as an axis-aligned segment from `start` to
/// `end` (inclusive). Damage is a count of distinct cells hit; the attack
/// log's deduplication guarantees no cell is counted twice.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    start: Point,
    end: Point,
    hits: u8,
}

impl Ship {
    /// Build a ship from its class and segment endpoints. Rejects segments
    /// that leave the grid, run diagonally, or whose cell count does not
    /// match the class size.
    pub fn new(class: ShipClass, start: Point, end: Point) -> Result<Self, GameError> {
        if !start.on_grid() || !end.on_grid() {
            return Err(GameError::ShipOutOfBounds);
        }
        let cells = if start.x == end.x {
            start.y.abs_diff(end.y) + 1
        } else if start.y == end.y {
            start.x.abs_diff(end.x) + 1
        } else {
            return Err(GameError::ShipMisaligned);
        };
        if cells != class.size() {
            return Err(GameError::ShipSizeMismatch);
        }
        Ok(Ship {
            class,
            start,
            end,
            hits: 0,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// `true` when `p` lies on this ship's segment.
    pub fn contains(&self, p: Point) -> bool {
        point_on_segment(p, self.start, self.end)
    }

    /// `true` when this ship shares at least one cell with `other`.
    pub fn overlaps(&self, other: &Ship) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }

    /// Register damage to one previously untouched cell. Callers guarantee
    /// the cell is distinct; the attack log enforces that upstream.
    pub(crate) fn register_hit(&mut self) {
        self.hits += 1;
    }

    /// Number of distinct cells hit so far.
    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// A ship is sunk once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.class.size()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", start: {}, end: {}, hits: {}/{} }}",
            self.class.name(),
            self.start,
            self.end,
            self.hits,
            self.class.size(),
        )
    }
}
