//! Battle execution loop
//!
//! Each round: snapshot turn order in reading order, then every living unit
//! moves and/or attacks in sequence. The battle ends the moment a unit finds
//! no living enemies at the start of its turn; that round is not counted.

use serde::{Deserialize, Serialize};

use crate::battle::grid::CaveGrid;
use crate::battle::pathfinding;
use crate::battle::units::UnitRoster;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Faction, UnitId};

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Ongoing,
    Finished,
}

/// What happened during one call to `execute_round`
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundReport {
    pub battle_ended: bool,
    pub any_movement: bool,
    pub any_damage: bool,
}

/// Final score of a finished battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub completed_rounds: u32,
    pub surviving_hit_points: i32,
    pub winner: Faction,
    pub elf_losses: u32,
    pub goblin_losses: u32,
}

impl Outcome {
    /// Completed rounds times the hit points of all survivors
    pub fn score(&self) -> i64 {
        self.completed_rounds as i64 * self.surviving_hit_points as i64
    }
}

/// Complete battle state, owned by a single simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub grid: CaveGrid,
    pub units: UnitRoster,
    pub completed_rounds: u32,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn new(grid: CaveGrid, units: UnitRoster) -> Self {
        Self {
            grid,
            units,
            completed_rounds: 0,
            phase: BattlePhase::Ongoing,
        }
    }

    /// Is the battle finished?
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished)
    }

    /// Run rounds until one faction is wiped out
    ///
    /// Fails with [`SkirmishError::Stalemate`] if a full round passes with no
    /// movement and no damage: the simulation is deterministic, so such a
    /// round would repeat forever.
    pub fn run_to_completion(&mut self) -> Result<Outcome> {
        tracing::debug!(
            "battle begins: {} elves vs {} goblins",
            self.units.count_living(Faction::Elf),
            self.units.count_living(Faction::Goblin)
        );

        while !self.is_finished() {
            let report = self.execute_round();
            if !report.battle_ended && !report.any_movement && !report.any_damage {
                return Err(SkirmishError::Stalemate {
                    completed_rounds: self.completed_rounds,
                });
            }
        }

        let outcome = self.outcome();
        tracing::info!(
            "battle ended: {:?} win after {} rounds with {} hit points left",
            outcome.winner,
            outcome.completed_rounds,
            outcome.surviving_hit_points
        );
        Ok(outcome)
    }

    /// Execute a single round of combat
    ///
    /// Turn order is snapshotted from unit positions at round start and not
    /// re-sorted as units move; units that die mid-round are skipped.
    pub fn execute_round(&mut self) -> RoundReport {
        let mut report = RoundReport::default();
        if self.is_finished() {
            report.battle_ended = true;
            return report;
        }

        let mut order: Vec<UnitId> = self.units.living().map(|u| u.id).collect();
        order.sort_by_key(|id| self.units.get(*id).position);

        for id in order {
            if !self.units.get(id).alive {
                continue;
            }
            if !self.take_turn(id, &mut report) {
                // A unit found no living enemies: the battle is over and
                // this round does not count as completed.
                self.phase = BattlePhase::Finished;
                report.battle_ended = true;
                return report;
            }
        }

        self.completed_rounds += 1;
        report
    }

    /// One unit's turn. Returns false when no living enemies remain.
    fn take_turn(&mut self, id: UnitId, report: &mut RoundReport) -> bool {
        let faction = self.units.get(id).faction;
        if self.units.count_living(faction.opponent()) == 0 {
            return false;
        }

        // Already in range: attack without moving. Otherwise take one step
        // toward the nearest reachable in-range cell, then attack if the
        // step closed the distance.
        if self.attack_target(id).is_none() {
            if let Some(step) = pathfinding::choose_step(&self.grid, &self.units, id) {
                self.units.get_mut(id).position = step;
                report.any_movement = true;
            }
        }

        if let Some(target_id) = self.attack_target(id) {
            let power = self.units.get(id).attack_power;
            let target = self.units.get_mut(target_id);
            target.receive_damage(power);
            report.any_damage = true;
            if !target.alive {
                tracing::debug!(
                    "{:?} {:?} dies at ({}, {})",
                    target.faction,
                    target.id,
                    target.position.x,
                    target.position.y
                );
            }
        }

        true
    }

    /// Adjacent living enemy with the fewest hit points, reading order on ties
    fn attack_target(&self, attacker: UnitId) -> Option<UnitId> {
        let attacker = self.units.get(attacker);
        self.units
            .living_of(attacker.faction.opponent())
            .filter(|enemy| attacker.is_adjacent_to(enemy))
            .min_by_key(|enemy| (enemy.hit_points, enemy.position))
            .map(|enemy| enemy.id)
    }

    /// Score the current state
    ///
    /// Meaningful once the battle has finished; the winner is the faction
    /// that still has living units.
    pub fn outcome(&self) -> Outcome {
        let winner = if self.units.count_living(Faction::Goblin) == 0 {
            Faction::Elf
        } else {
            Faction::Goblin
        };
        let losses = |faction| {
            self.units
                .iter()
                .filter(|u| u.faction == faction && !u.alive)
                .count() as u32
        };

        Outcome {
            completed_rounds: self.completed_rounds,
            surviving_hit_points: self.units.living().map(|u| u.hit_points).sum(),
            winner,
            elf_losses: losses(Faction::Elf),
            goblin_losses: losses(Faction::Goblin),
        }
    }
}
