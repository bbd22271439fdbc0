//! Board state: the placed fleet and point queries against it.

use rand::Rng;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS, PLACEMENT_RETRIES};
use crate::geometry::{segments_intersect, Point};
use crate::ship::{Ship, ShipClass};

/// A player's own waters: up to [`NUM_SHIPS`] ships in placement order.
/// Empty slots stay `None`, and every query tolerates a partial fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
        }
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// `true` when the candidate segment crosses no already-placed ship.
    /// Ships are tested in placement order; the first conflict short-circuits.
    pub fn can_place(&self, start: Point, end: Point) -> bool {
        self.ships()
            .all(|ship| !segments_intersect(ship.start(), ship.end(), start, end))
    }

    /// Place a single ship into the first free slot.
    pub fn place(&mut self, ship: Ship) -> Result<(), GameError> {
        if !self.can_place(ship.start(), ship.end()) {
            return Err(GameError::ShipOverlaps);
        }
        let slot = self
            .ships
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or(GameError::FleetFull)?;
        *slot = Some(ship);
        Ok(())
    }

    /// Place the whole fleet at random, largest ship first. Each size keeps
    /// resampling until its segment lands clear of the others.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for class in FLEET {
            let ship = self.random_placement(rng, class)?;
            self.place(ship)?;
        }
        Ok(())
    }

    /// Sample a non-overlapping placement for `class`. Bounded retries guard
    /// against pathological sampling sequences.
    fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<Ship, GameError> {
        let span = class.size() - 1;
        for _ in 0..PLACEMENT_RETRIES {
            // Both coordinates are constrained so the segment fits the grid
            // whichever orientation is drawn.
            let start = Point::new(
                rng.random_range(0..BOARD_SIZE - span),
                rng.random_range(0..BOARD_SIZE - span),
            );
            let end = if rng.random() {
                Point::new(start.x + span, start.y)
            } else {
                Point::new(start.x, start.y + span)
            };
            if self.can_place(start, end) {
                return Ship::new(class, start, end);
            }
        }
        Err(GameError::UnableToPlaceShip(class.name()))
    }

    /// The ship occupying `point`, if any.
    pub fn ship_at(&self, point: Point) -> Option<&Ship> {
        self.ships
            .iter()
            .flatten()
            .find(|ship| ship.contains(point))
    }

    pub(crate) fn ship_at_mut(&mut self, point: Point) -> Option<&mut Ship> {
        self.ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.contains(point))
    }

    /// `true` once every placed ship is sunk. An empty board never counts as
    /// defeated.
    pub fn all_sunk(&self) -> bool {
        let mut any = false;
        for ship in self.ships() {
            if !ship.is_sunk() {
                return false;
            }
            any = true;
        }
        any
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
