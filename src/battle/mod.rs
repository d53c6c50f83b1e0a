//! Cavern combat engine - deterministic turn-based battles
//!
//! Two factions fight on a bounded cavern map. Rounds resolve in reading
//! order with fully deterministic tie-breaking, so identical input always
//! produces identical outcomes.

pub mod constants;
pub mod execution;
pub mod grid;
pub mod loader;
pub mod pathfinding;
pub mod render;
pub mod scenario;
pub mod tuning;
pub mod units;

// Re-exports for convenient access
pub use constants::*;
pub use execution::{BattlePhase, BattleState, Outcome, RoundReport};
pub use grid::{CaveGrid, Terrain};
pub use loader::{load_from_lines, load_from_text};
pub use pathfinding::{bfs_distances, choose_step};
pub use render::{render_map, render_with_hit_points};
pub use scenario::{run_baseline, run_tuned};
pub use tuning::{minimal_winning_power, minimal_winning_power_bounded, TunedOutcome};
pub use units::{Unit, UnitRoster};
