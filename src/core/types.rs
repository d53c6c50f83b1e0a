//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Grid coordinate on the cavern map
///
/// Ordered in reading order: top-to-bottom, then left-to-right. Every
/// tie-break in the engine goes through this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 4 orthogonal neighbors, in reading order (up, left, right, down)
    pub fn neighbors(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.x, self.y - 1),
            Coordinate::new(self.x - 1, self.y),
            Coordinate::new(self.x + 1, self.y),
            Coordinate::new(self.x, self.y + 1),
        ]
    }

    /// Manhattan distance (4-directional, no diagonals)
    pub fn manhattan_distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True iff the two coordinates are orthogonally adjacent
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Combat faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Elf,
    Goblin,
}

impl Faction {
    /// The opposing faction
    pub fn opponent(&self) -> Faction {
        match self {
            Faction::Elf => Faction::Goblin,
            Faction::Goblin => Faction::Elf,
        }
    }
}

/// Stable arena handle for a combat unit
///
/// Handles index into the roster and stay valid for the whole simulation;
/// dead units keep their handle and are skipped, never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
