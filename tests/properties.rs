//! Engine-wide properties over generated maps
//!
//! Fixture tests pin exact outcomes; these pin the structural guarantees:
//! determinism, occupancy discipline, and the alive/hit-point invariant.

use cavern_combat::battle::{load_from_text, BattleState};
use cavern_combat::core::types::Coordinate;
use proptest::prelude::*;

/// Generated maps are tiny; no battle on them runs anywhere near this long.
const ROUND_CAP: u32 = 500;

fn run_capped(state: &mut BattleState) {
    for _ in 0..ROUND_CAP {
        let report = state.execute_round();
        if report.battle_ended || (!report.any_movement && !report.any_damage) {
            break;
        }
    }
}

fn unit_snapshot(state: &BattleState) -> Vec<(Coordinate, i32, bool)> {
    state
        .units
        .iter()
        .map(|u| (u.position, u.hit_points, u.alive))
        .collect()
}

fn arb_cell() -> impl Strategy<Value = char> {
    prop_oneof![
        5 => Just('.'),
        2 => Just('#'),
        1 => Just('E'),
        1 => Just('G'),
    ]
}

/// A bordered rectangular map with random interior terrain and units
fn arb_map() -> impl Strategy<Value = String> {
    (2usize..6, 2usize..6).prop_flat_map(|(width, height)| {
        proptest::collection::vec(arb_cell(), width * height).prop_map(move |cells| {
            let mut lines = vec!["#".repeat(width + 2)];
            for row in cells.chunks(width) {
                let mut line = String::from("#");
                line.extend(row.iter());
                line.push('#');
                lines.push(line);
            }
            lines.push("#".repeat(width + 2));
            lines.join("\n")
        })
    })
}

proptest! {
    #[test]
    fn prop_identical_maps_produce_identical_battles(map in arb_map()) {
        prop_assume!(map.contains('E') && map.contains('G'));

        let mut first = load_from_text(&map).unwrap();
        let mut second = load_from_text(&map).unwrap();
        run_capped(&mut first);
        run_capped(&mut second);

        prop_assert_eq!(first.completed_rounds, second.completed_rounds);
        prop_assert_eq!(first.is_finished(), second.is_finished());
        prop_assert_eq!(unit_snapshot(&first), unit_snapshot(&second));
    }

    #[test]
    fn prop_living_units_never_stack_or_stand_in_walls(map in arb_map()) {
        prop_assume!(map.contains('E') && map.contains('G'));

        let mut state = load_from_text(&map).unwrap();
        for _ in 0..ROUND_CAP {
            let report = state.execute_round();

            let mut positions: Vec<Coordinate> =
                state.units.living().map(|u| u.position).collect();
            for position in &positions {
                prop_assert!(!state.grid.is_wall(*position));
            }
            let total = positions.len();
            positions.sort();
            positions.dedup();
            prop_assert_eq!(positions.len(), total);

            for unit in state.units.iter() {
                prop_assert_eq!(unit.alive, unit.hit_points > 0);
            }

            if report.battle_ended || (!report.any_movement && !report.any_damage) {
                break;
            }
        }
    }
}
