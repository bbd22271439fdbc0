//! A player: display name, own fleet, and the ordered log of attacks this
//! player has issued against the opponent.

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::AttackResult;
use crate::config::MAX_ATTACKS;
use crate::geometry::Point;

/// One resolved attack, immutable once logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub target: Point,
    pub result: AttackResult,
}

/// A side of the game. The board is this player's own fleet (attacked by the
/// opponent); the log records attacks this player made, at most one entry per
/// distinct point.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    attacks: Vec<Attack>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Player {
            name: String::from(name),
            board: Board::new(),
            attacks: Vec::with_capacity(MAX_ATTACKS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attacks made so far, oldest first.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// The prior attack at `point`, if this player already fired there.
    /// Off-grid points never match.
    pub fn prior_attack(&self, point: Point) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.target == point)
    }

    pub fn has_attacked(&self, point: Point) -> bool {
        self.prior_attack(point).is_some()
    }

    /// Append a resolved attack to the log. The caller guarantees the point
    /// is new; attack resolution checks [`prior_attack`](Self::prior_attack)
    /// first.
    pub fn append_attack(&mut self, attack: Attack) {
        debug_assert!(!self.has_attacked(attack.target));
        self.attacks.push(attack);
    }
}
