//! Load a battle from its map text
//!
//! The map is a rectangular block of `#` (wall), `.` (open cavern), `E`
//! (elf start) and `G` (goblin start). Units always start on open cavern.

use crate::battle::execution::BattleState;
use crate::battle::grid::{CaveGrid, Terrain};
use crate::battle::units::UnitRoster;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Coordinate, Faction};

/// Parse a battle state from raw map lines
pub fn load_from_lines(lines: &[&str]) -> Result<BattleState> {
    let height = lines.len();
    let width = lines.first().map_or(0, |line| line.chars().count());

    let mut cells = Vec::with_capacity(width * height);
    let mut units = UnitRoster::new();

    for (row, line) in lines.iter().enumerate() {
        let row_width = line.chars().count();
        if row_width != width {
            return Err(SkirmishError::MapNotRectangular {
                row,
                found: row_width,
                expected: width,
            });
        }

        for (column, glyph) in line.chars().enumerate() {
            let position = Coordinate::new(column as i32, row as i32);
            let terrain = match glyph {
                '#' => Terrain::Wall,
                '.' => Terrain::OpenCavern,
                'E' => {
                    units.spawn(Faction::Elf, position);
                    Terrain::OpenCavern
                }
                'G' => {
                    units.spawn(Faction::Goblin, position);
                    Terrain::OpenCavern
                }
                _ => {
                    return Err(SkirmishError::UnknownGlyph { glyph, column, row });
                }
            };
            cells.push(terrain);
        }
    }

    for faction in [Faction::Elf, Faction::Goblin] {
        if units.count_living(faction) == 0 {
            return Err(SkirmishError::MissingFaction(faction));
        }
    }

    let grid = CaveGrid::from_cells(width as i32, height as i32, cells);
    Ok(BattleState::new(grid, units))
}

/// Parse a battle state from a whole map text
pub fn load_from_text(text: &str) -> Result<BattleState> {
    let lines: Vec<&str> = text.lines().collect();
    load_from_lines(&lines)
}
