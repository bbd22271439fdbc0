//! Grid geometry: cell coordinates, cardinal directions and the axis-aligned
//! segment tests the board is built on.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A single cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// `true` when the point lies on the playing grid.
    pub fn on_grid(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The neighbouring cell one step in `dir`, or `None` when that step
    /// would leave the grid.
    pub fn step(&self, dir: Direction) -> Option<Point> {
        let (x, y) = match dir {
            Direction::North => (self.x, self.y.checked_sub(1)?),
            Direction::East => (self.x.checked_add(1)?, self.y),
            Direction::South => (self.x, self.y.checked_add(1)?),
            Direction::West => (self.x.checked_sub(1)?, self.y),
        };
        let p = Point::new(x, y);
        p.on_grid().then_some(p)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions. North is towards `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed probe order used when feeling around a fresh hit.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction from `a` towards `b` along a shared row or column. `None`
    /// when the points coincide or sit diagonally from one another. The
    /// points do not have to be adjacent; only the sign of the offset counts.
    pub fn between(a: Point, b: Point) -> Option<Direction> {
        if a.x == b.x && a.y != b.y {
            Some(if b.y > a.y {
                Direction::South
            } else {
                Direction::North
            })
        } else if a.y == b.y && a.x != b.x {
            Some(if b.x > a.x {
                Direction::East
            } else {
                Direction::West
            })
        } else {
            None
        }
    }
}

/// Inclusive range test that accepts its endpoints in either order.
pub fn range_contains(n: u8, a: u8, b: u8) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= n && n <= hi
}

/// `true` when `p` lies on the axis-aligned segment `start`..`end`.
pub fn point_on_segment(p: Point, start: Point, end: Point) -> bool {
    let vertical = start.x == p.x && end.x == p.x && range_contains(p.y, start.y, end.y);
    let horizontal = start.y == p.y && end.y == p.y && range_contains(p.x, start.x, end.x);
    vertical || horizontal
}

/// `true` when two axis-aligned segments share at least one cell. Walks the
/// cells of the first segment and tests each against the second.
pub fn segments_intersect(s1: Point, e1: Point, s2: Point, e2: Point) -> bool {
    if s1.x == e1.x {
        let (lo, hi) = if s1.y <= e1.y { (s1.y, e1.y) } else { (e1.y, s1.y) };
        (lo..=hi).any(|y| point_on_segment(Point::new(s1.x, y), s2, e2))
    } else {
        let (lo, hi) = if s1.x <= e1.x { (s1.x, e1.x) } else { (e1.x, s1.x) };
        (lo..=hi).any(|x| point_on_segment(Point::new(x, s1.y), s2, e2))
    }
}
