//! Computer targeting: random hunting plus directional follow-up once a ship
//! has been found.
//!
//! The machine has two modes. `Hunt` samples unattacked cells uniformly at
//! random. The first hit flips it to `Target`, which reads the trailing run
//! of hits in the attack log (the streak) to infer the ship's orientation
//! and walk along it; once no candidate cell remains for the streak it falls
//! back to hunting.

use rand::Rng;

use crate::common::AttackResult;
use crate::config::{BOARD_SIZE, MAX_ATTACKS};
use crate::geometry::{Direction, Point};
use crate::player::Attack;

/// Current targeting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingMode {
    /// Random search for an unattacked cell.
    Hunt,
    /// Directional follow-up around an active hit streak.
    Target,
}

/// Targeting state for the computer-controlled side.
#[derive(Debug, Clone)]
pub struct AiState {
    mode: TargetingMode,
}

impl AiState {
    pub fn new() -> Self {
        AiState {
            mode: TargetingMode::Hunt,
        }
    }

    pub fn mode(&self) -> TargetingMode {
        self.mode
    }

    /// Record the outcome of the attack just made. A hit while hunting
    /// switches to target mode; target mode is left only by exhausting a
    /// streak in [`select_target`](Self::select_target).
    pub fn observe(&mut self, result: AttackResult) {
        if self.mode == TargetingMode::Hunt && result == AttackResult::Hit {
            log::debug!("ai: hit while hunting, switching to target mode");
            self.mode = TargetingMode::Target;
        }
    }

    /// Pick the next cell to attack given the attack log so far. Returns
    /// `None` once every cell on the grid has been attacked.
    pub fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        attacks: &[Attack],
    ) -> Option<Point> {
        if attacks.len() >= MAX_ATTACKS {
            return None;
        }
        if self.mode == TargetingMode::Target {
            if let Some(point) = target_probe(attacks) {
                return Some(point);
            }
            // Streak exhausted; abandon it and go back to random search.
            log::debug!("ai: streak exhausted, returning to hunt mode");
            self.mode = TargetingMode::Hunt;
        }
        Some(hunt(rng, attacks))
    }
}

impl Default for AiState {
    fn default() -> Self {
        Self::new()
    }
}

fn already_attacked(attacks: &[Attack], point: Point) -> bool {
    attacks.iter().any(|a| a.target == point)
}

/// Uniform random sampling of unattacked cells. The caller guarantees at
/// least one such cell remains, so rejection sampling terminates.
fn hunt<R: Rng + ?Sized>(rng: &mut R, attacks: &[Attack]) -> Point {
    loop {
        let point = Point::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if !already_attacked(attacks, point) {
            return point;
        }
    }
}

/// Directional follow-up around the current hit streak. `None` when the
/// streak has no remaining candidate cells (or there is no streak at all).
fn target_probe(attacks: &[Attack]) -> Option<Point> {
    let latest = *attacks.last()?;
    let start = attacks[streak_start(attacks)?].target;

    if latest.result == AttackResult::Hit && latest.target == start {
        // Lone hit: feel out the four neighbours in fixed order.
        return Direction::CARDINALS
            .iter()
            .find_map(|&dir| start.step(dir).filter(|p| !already_attacked(attacks, *p)));
    }

    let dir = Direction::between(start, latest.target)?;
    if latest.result == AttackResult::Miss {
        // Overshot past the far end; turn around from the first hit.
        return start
            .step(dir.opposite())
            .filter(|p| !already_attacked(attacks, *p));
    }
    // Streak of two or more hits: keep walking from the newest hit, else try
    // the other side of the streak start.
    latest
        .target
        .step(dir)
        .filter(|p| !already_attacked(attacks, *p))
        .or_else(|| {
            start
                .step(dir.opposite())
                .filter(|p| !already_attacked(attacks, *p))
        })
}

/// Index of the first hit in the streak under pursuit: the contiguous run of
/// hits at the end of the log, where one trailing miss (the probe that fell
/// off the far end of the ship) is skipped. A run reaching back to index 0
/// counts. `None` when the log's tail holds no such run.
fn streak_start(attacks: &[Attack]) -> Option<usize> {
    let mut i = attacks.len().checked_sub(1)?;
    if attacks[i].result == AttackResult::Miss {
        i = i.checked_sub(1)?;
        if attacks[i].result == AttackResult::Miss {
            return None;
        }
    }
    while i > 0 && attacks[i - 1].result == AttackResult::Hit {
        i -= 1;
    }
    Some(i)
}
