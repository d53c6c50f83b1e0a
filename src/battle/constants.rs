//! Engine constants

/// Hit points every unit starts with
pub const STARTING_HIT_POINTS: i32 = 200;

/// Attack power every unit starts with
pub const BASE_ATTACK_POWER: i32 = 3;

/// Ceiling for the elf power search
///
/// At this power a single blow kills a full-health unit, so larger values
/// cannot change any battle. A search that reaches it has diverged.
pub const MAX_ELF_ATTACK_POWER: i32 = STARTING_HIT_POINTS;
