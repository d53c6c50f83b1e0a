use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("map is not rectangular: row {row} has width {found}, expected {expected}")]
    MapNotRectangular {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown map glyph '{glyph}' at column {column}, row {row}")]
    UnknownGlyph {
        glyph: char,
        column: usize,
        row: usize,
    },

    #[error("map contains no {0:?} units")]
    MissingFaction(crate::core::types::Faction),

    #[error("no winning attack power for the elves up to {max_power}")]
    PowerSearchDiverged { max_power: i32 },

    #[error("battle can no longer progress after {completed_rounds} rounds")]
    Stalemate { completed_rounds: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
