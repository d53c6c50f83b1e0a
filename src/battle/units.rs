//! Combat units and the roster arena that owns them
//!
//! Units are created once at parse time and mutated in place. Death marks the
//! record dead instead of removing it; every query skips dead handles.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{BASE_ATTACK_POWER, STARTING_HIT_POINTS};
use crate::core::types::{Coordinate, Faction, UnitId};

/// A single combat unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub faction: Faction,
    pub position: Coordinate,
    pub hit_points: i32,
    pub attack_power: i32,
    pub alive: bool,
}

impl Unit {
    fn new(id: UnitId, faction: Faction, position: Coordinate) -> Self {
        Self {
            id,
            faction,
            position,
            hit_points: STARTING_HIT_POINTS,
            attack_power: BASE_ATTACK_POWER,
            alive: true,
        }
    }

    /// True iff the other unit stands on an orthogonally adjacent cell
    pub fn is_adjacent_to(&self, other: &Unit) -> bool {
        self.position.is_adjacent_to(&other.position)
    }

    /// Apply incoming damage; a unit at or below zero hit points dies
    pub fn receive_damage(&mut self, amount: i32) {
        self.hit_points -= amount;
        if self.hit_points <= 0 {
            self.alive = false;
        }
    }
}

/// Arena of units addressed by stable [`UnitId`] handles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitRoster {
    units: Vec<Unit>,
}

impl UnitRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, faction: Faction, position: Coordinate) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(Unit::new(id, faction, position));
        id
    }

    pub fn get(&self, id: UnitId) -> &Unit {
        &self.units[id.index()]
    }

    pub fn get_mut(&mut self, id: UnitId) -> &mut Unit {
        &mut self.units[id.index()]
    }

    /// All units, dead ones included
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Living units only
    pub fn living(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.alive)
    }

    /// Living units of one faction
    pub fn living_of(&self, faction: Faction) -> impl Iterator<Item = &Unit> + '_ {
        self.living().filter(move |u| u.faction == faction)
    }

    pub fn count_living(&self, faction: Faction) -> usize {
        self.living_of(faction).count()
    }

    /// Is the cell occupied by a living unit other than `exclude`?
    pub fn is_occupied(&self, coord: Coordinate, exclude: Option<UnitId>) -> bool {
        self.living()
            .any(|u| Some(u.id) != exclude && u.position == coord)
    }

    /// Set the attack power of every unit in a faction
    pub fn set_faction_attack_power(&mut self, faction: Faction, power: i32) {
        for unit in self.units.iter_mut().filter(|u| u.faction == faction) {
            unit.attack_power = power;
        }
    }
}
