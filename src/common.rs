//! Common types: attack outcomes and game errors.

use crate::geometry::Point;

/// Outcome of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Attack struck a ship cell.
    Hit,
    /// Attack landed in open water.
    Miss,
}

/// Report handed back by attack resolution: the hit/miss outcome plus, for
/// display purposes, the name of the struck ship when it is sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub result: AttackResult,
    /// Name of the struck ship if the ship at the target is sunk. On a
    /// replayed attack this reflects the ship's current state.
    pub sunk: Option<&'static str>,
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Attack target lies outside the grid.
    TargetOffGrid(Point),
    /// Ship segment is neither horizontal nor vertical.
    ShipMisaligned,
    /// Ship segment extends past the edge of the grid.
    ShipOutOfBounds,
    /// Ship segment length does not match its class size.
    ShipSizeMismatch,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Board already holds a full fleet.
    FleetFull,
    /// Random placement exhausted its retry budget for the named ship.
    UnableToPlaceShip(&'static str),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::TargetOffGrid(p) => write!(f, "target {} is off the grid", p),
            GameError::ShipMisaligned => write!(f, "ship segment is not axis-aligned"),
            GameError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            GameError::ShipSizeMismatch => {
                write!(f, "ship segment length does not match its class")
            }
            GameError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            GameError::FleetFull => write!(f, "board already holds a full fleet"),
            GameError::UnableToPlaceShip(name) => {
                write!(f, "unable to place {} within the retry budget", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
