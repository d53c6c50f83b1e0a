//! BFS pathfinding for cavern combat
//!
//! Movement cost is uniform, so plain breadth-first search is enough. Step
//! selection runs two independent distance computations (forward from the
//! mover, backward from the chosen destination) instead of reconstructing
//! paths with parent pointers, which keeps the tie-breaks explicit.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::battle::grid::CaveGrid;
use crate::battle::units::UnitRoster;
use crate::core::types::{Coordinate, UnitId};

/// BFS distance from `origin` to every reachable cell
///
/// Passable cells are open cavern not occupied by any cell in `occupied`.
/// The origin itself is always at distance 0.
pub fn bfs_distances(
    grid: &CaveGrid,
    occupied: &AHashSet<Coordinate>,
    origin: Coordinate,
) -> AHashMap<Coordinate, u32> {
    let mut distances = AHashMap::new();
    let mut queue = VecDeque::new();

    distances.insert(origin, 0);
    queue.push_back((origin, 0u32));

    while let Some((current, distance)) = queue.pop_front() {
        let next_distance = distance + 1;

        for neighbor in current.neighbors() {
            if grid.is_wall(neighbor) || occupied.contains(&neighbor) {
                continue;
            }
            if distances.contains_key(&neighbor) {
                continue;
            }
            distances.insert(neighbor, next_distance);
            queue.push_back((neighbor, next_distance));
        }
    }

    distances
}

/// Positions of all living units except the mover
fn occupancy_snapshot(roster: &UnitRoster, mover: UnitId) -> AHashSet<Coordinate> {
    roster
        .living()
        .filter(|u| u.id != mover)
        .map(|u| u.position)
        .collect()
}

/// Open, unoccupied cells adjacent to any living enemy of the mover
fn in_range_cells(
    grid: &CaveGrid,
    roster: &UnitRoster,
    mover: UnitId,
    occupied: &AHashSet<Coordinate>,
) -> Vec<Coordinate> {
    let enemy_faction = roster.get(mover).faction.opponent();
    let mut cells: Vec<Coordinate> = roster
        .living_of(enemy_faction)
        .flat_map(|enemy| enemy.position.neighbors())
        .filter(|c| !grid.is_wall(*c) && !occupied.contains(c))
        .collect();
    cells.sort();
    cells.dedup();
    cells
}

/// Pick the single cell the mover steps to this turn
///
/// Returns `None` when no in-range cell is reachable; the unit simply does
/// not move. Ties at every stage resolve to the reading-order-first
/// candidate.
pub fn choose_step(grid: &CaveGrid, roster: &UnitRoster, mover: UnitId) -> Option<Coordinate> {
    let position = roster.get(mover).position;
    let occupied = occupancy_snapshot(roster, mover);

    let targets = in_range_cells(grid, roster, mover, &occupied);
    if targets.is_empty() {
        return None;
    }

    // Phase one: nearest reachable in-range cell, reading order on ties.
    let from_mover = bfs_distances(grid, &occupied, position);
    let (distance, destination) = targets
        .iter()
        .filter_map(|c| from_mover.get(c).map(|d| (*d, *c)))
        .min()?;

    // Phase two: adjacent cell on a shortest path to that destination,
    // reading order on ties.
    let from_destination = bfs_distances(grid, &occupied, destination);
    position
        .neighbors()
        .into_iter()
        .filter(|c| !grid.is_wall(*c) && !occupied.contains(c))
        .filter(|c| from_destination.get(c) == Some(&(distance - 1)))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::loader::load_from_text;

    #[test]
    fn test_step_toward_single_goblin_prefers_reading_order() {
        // The elf can close the distance by stepping down or right; both lie
        // on a shortest path, so the reading-order-first step (right) wins.
        let state = load_from_text(
            "#######\n\
             #.E...#\n\
             #.....#\n\
             #...G.#\n\
             #######",
        )
        .unwrap();
        let elf = state.units.living().next().unwrap().id;
        let step = choose_step(&state.grid, &state.units, elf);
        assert_eq!(step, Some(Coordinate::new(3, 1)));
    }

    #[test]
    fn test_nearest_destination_breaks_ties_in_reading_order() {
        // Three goblins, several in-range cells tied at distance 2; the
        // reading-order-first of those is chosen and the elf steps right.
        let state = load_from_text(
            "#######\n\
             #E..G.#\n\
             #...#.#\n\
             #.G.#G#\n\
             #######",
        )
        .unwrap();
        let elf = state.units.living().next().unwrap().id;
        let step = choose_step(&state.grid, &state.units, elf);
        assert_eq!(step, Some(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_unreachable_targets_mean_no_move() {
        let state = load_from_text(
            "#######\n\
             #E#.G.#\n\
             #######",
        )
        .unwrap();
        let elf = state
            .units
            .living_of(crate::core::types::Faction::Elf)
            .next()
            .unwrap()
            .id;
        assert_eq!(choose_step(&state.grid, &state.units, elf), None);
    }

    #[test]
    fn test_living_units_block_paths() {
        // The corridor to the goblin is plugged by a friendly elf, and the
        // goblin's far side is walled off: nothing is reachable.
        let state = load_from_text(
            "######\n\
             #E.EG#\n\
             ######",
        )
        .unwrap();
        let mover = state
            .units
            .living()
            .find(|u| u.position == Coordinate::new(1, 1))
            .unwrap()
            .id;
        assert_eq!(choose_step(&state.grid, &state.units, mover), None);
    }

    #[test]
    fn test_dead_units_do_not_block_paths() {
        let mut state = load_from_text(
            "######\n\
             #E.EG#\n\
             ######",
        )
        .unwrap();
        let blocker = state
            .units
            .living()
            .find(|u| u.position == Coordinate::new(3, 1))
            .unwrap()
            .id;
        state.units.get_mut(blocker).receive_damage(200);

        let mover = state
            .units
            .living()
            .find(|u| u.position == Coordinate::new(1, 1))
            .unwrap()
            .id;
        assert_eq!(
            choose_step(&state.grid, &state.units, mover),
            Some(Coordinate::new(2, 1))
        );
    }

    #[test]
    fn test_bfs_distances_respect_walls() {
        let state = load_from_text(
            "#####\n\
             #E#G#\n\
             #...#\n\
             #####",
        )
        .unwrap();
        let distances = bfs_distances(&state.grid, &AHashSet::new(), Coordinate::new(1, 1));
        // Around the wall: down, right, right, up.
        assert_eq!(distances.get(&Coordinate::new(3, 1)), Some(&4));
        assert_eq!(distances.get(&Coordinate::new(2, 1)), None);
    }
}
