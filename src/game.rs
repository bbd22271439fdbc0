//! Game state and attack resolution. [`attack_player`] is the single
//! mutation point for both boards (ship damage) and attack logs.

use rand::Rng;

use crate::ai::AiState;
use crate::common::{AttackReport, AttackResult, GameError};
use crate::config::AI_NAMES;
use crate::geometry::Point;
use crate::player::{Attack, Player};

/// Resolve one attack by `offense` against `defense`'s board.
///
/// Re-attacking a point is idempotent: the stored result comes back and
/// nothing is mutated, so a ship can never take damage twice from one cell.
/// Off-grid targets are rejected before any state is touched.
pub fn attack_player(
    offense: &mut Player,
    defense: &mut Player,
    point: Point,
) -> Result<AttackReport, GameError> {
    if !point.on_grid() {
        return Err(GameError::TargetOffGrid(point));
    }

    if let Some(prior) = offense.prior_attack(point) {
        let sunk = match prior.result {
            AttackResult::Hit => defense
                .board()
                .ship_at(point)
                .filter(|ship| ship.is_sunk())
                .map(|ship| ship.class().name()),
            AttackResult::Miss => None,
        };
        return Ok(AttackReport {
            result: prior.result,
            sunk,
        });
    }

    let result = if defense.board().ship_at(point).is_some() {
        AttackResult::Hit
    } else {
        AttackResult::Miss
    };
    log::debug!("{} fires at {}: {:?}", offense.name(), point, result);
    offense.append_attack(Attack {
        target: point,
        result,
    });

    let mut sunk = None;
    if result == AttackResult::Hit {
        if let Some(ship) = defense.board_mut().ship_at_mut(point) {
            ship.register_hit();
            if ship.is_sunk() {
                sunk = Some(ship.class().name());
            }
        }
    }
    if let Some(name) = sunk {
        log::info!("{} sank the {}", offense.name(), name);
    }
    Ok(AttackReport { result, sunk })
}

/// Overall result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
}

/// One game: the human side, the computer side, and the computer's targeting
/// state.
#[derive(Debug, Clone)]
pub struct Game {
    human: Player,
    computer: Player,
    ai: AiState,
}

impl Game {
    /// Start a game between `human_name` and a freshly christened computer
    /// admiral.
    pub fn new<R: Rng + ?Sized>(human_name: &str, rng: &mut R) -> Self {
        let ai_name = AI_NAMES[rng.random_range(0..AI_NAMES.len())];
        Game {
            human: Player::new(human_name),
            computer: Player::new(ai_name),
            ai: AiState::new(),
        }
    }

    /// Place both fleets at random.
    pub fn place_fleets<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.human.board_mut().place_fleet(rng)?;
        self.computer.board_mut().place_fleet(rng)?;
        Ok(())
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn targeting_mode(&self) -> crate::ai::TargetingMode {
        self.ai.mode()
    }

    /// One human turn against the computer's fleet.
    pub fn human_attack(&mut self, point: Point) -> Result<AttackReport, GameError> {
        attack_player(&mut self.human, &mut self.computer, point)
    }

    /// One computer turn against the human's fleet. Returns `Ok(false)` when
    /// no further turn is possible: the human fleet is already sunk or every
    /// cell has been attacked.
    pub fn ai_attack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        if self.human.board().all_sunk() {
            return Ok(false);
        }
        let Some(point) = self.ai.select_target(rng, self.computer.attacks()) else {
            return Ok(false);
        };
        let report = attack_player(&mut self.computer, &mut self.human, point)?;
        self.ai.observe(report.result);
        Ok(true)
    }

    pub fn status(&self) -> GameStatus {
        if self.computer.board().all_sunk() {
            GameStatus::HumanWon
        } else if self.human.board().all_sunk() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }
}
