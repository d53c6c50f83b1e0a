//! Text rendering of a battle state
//!
//! Presentation helpers for the runner binary and for test diagnostics; the
//! engine itself never renders.

use ahash::AHashMap;

use crate::battle::execution::BattleState;
use crate::core::types::{Coordinate, Faction};

fn faction_glyph(faction: Faction) -> char {
    match faction {
        Faction::Elf => 'E',
        Faction::Goblin => 'G',
    }
}

/// Render the map with unit glyphs
pub fn render_map(state: &BattleState) -> String {
    render_rows(state, false)
}

/// Render the map with per-row hit point annotations, e.g. `G(200), E(197)`
pub fn render_with_hit_points(state: &BattleState) -> String {
    render_rows(state, true)
}

fn render_rows(state: &BattleState, annotate: bool) -> String {
    let occupants: AHashMap<Coordinate, Faction> = state
        .units
        .living()
        .map(|u| (u.position, u.faction))
        .collect();

    let mut rows = Vec::with_capacity(state.grid.height() as usize);
    for y in 0..state.grid.height() {
        let mut row = String::with_capacity(state.grid.width() as usize);
        for x in 0..state.grid.width() {
            let coord = Coordinate::new(x, y);
            let glyph = match occupants.get(&coord) {
                Some(faction) => faction_glyph(*faction),
                None if state.grid.is_wall(coord) => '#',
                None => '.',
            };
            row.push(glyph);
        }

        if annotate {
            let mut row_units: Vec<_> = state
                .units
                .living()
                .filter(|u| u.position.y == y)
                .collect();
            row_units.sort_by_key(|u| u.position);
            if !row_units.is_empty() {
                let notes: Vec<String> = row_units
                    .iter()
                    .map(|u| format!("{}({})", faction_glyph(u.faction), u.hit_points))
                    .collect();
                row.push_str("   ");
                row.push_str(&notes.join(", "));
            }
        }

        rows.push(row);
    }
    rows.join("\n")
}
