//! Elf attack power tuning
//!
//! Finds the minimal elf attack power that wins the battle without a single
//! elf death. The scan is linear from the base power upward: elf losses
//! never increase with elf power, so the first zero-loss power is minimal.
//! A binary search would also work; the linear scan is kept for simplicity
//! and is plenty fast at this scale.

use crate::battle::constants::{BASE_ATTACK_POWER, MAX_ELF_ATTACK_POWER};
use crate::battle::execution::{BattleState, Outcome};
use crate::core::error::{Result, SkirmishError};
use crate::core::types::Faction;

/// Result of a successful power search
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TunedOutcome {
    /// The minimal elf attack power with zero elf losses
    pub attack_power: i32,
    pub outcome: Outcome,
}

/// Find the minimal elf attack power with zero elf losses
///
/// Every attempt runs on a fresh copy of `initial`; unit records are mutated
/// in place during a run, so no state is ever reused across attempts.
pub fn minimal_winning_power(initial: &BattleState) -> Result<TunedOutcome> {
    minimal_winning_power_bounded(initial, MAX_ELF_ATTACK_POWER)
}

/// Power search with an explicit ceiling
///
/// Surfaces [`SkirmishError::PowerSearchDiverged`] once the ceiling is
/// exceeded instead of looping forever on maps the elves cannot win cleanly.
pub fn minimal_winning_power_bounded(
    initial: &BattleState,
    max_power: i32,
) -> Result<TunedOutcome> {
    for attack_power in BASE_ATTACK_POWER..=max_power {
        let mut attempt = initial.clone();
        attempt
            .units
            .set_faction_attack_power(Faction::Elf, attack_power);

        let outcome = attempt.run_to_completion()?;
        tracing::debug!(
            "attack power {}: {} elf losses, score {}",
            attack_power,
            outcome.elf_losses,
            outcome.score()
        );

        if outcome.elf_losses == 0 {
            return Ok(TunedOutcome {
                attack_power,
                outcome,
            });
        }
    }

    Err(SkirmishError::PowerSearchDiverged { max_power })
}
