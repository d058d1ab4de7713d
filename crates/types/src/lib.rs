//! Shared types and constants.
//!
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (fixed, never resized)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Delay between gravity steps (milliseconds).
///
/// Consumed only by the presentation layer; the core itself is unpaced.
pub const STEP_MS: u32 = 500;

/// Piece shape kinds.
///
/// Three fixed templates, each made of exactly 4 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Tee,
    Bar,
}

impl PieceKind {
    /// All kinds, in catalog order (index matches `cell_code` - 1).
    pub const ALL: [PieceKind; 3] = [PieceKind::Square, PieceKind::Tee, PieceKind::Bar];

    /// Non-zero code used in exported snapshot grids (0 means empty).
    pub fn cell_code(&self) -> u8 {
        match self {
            PieceKind::Square => 1,
            PieceKind::Tee => 2,
            PieceKind::Bar => 3,
        }
    }

    /// Inverse of [`cell_code`](Self::cell_code).
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Square),
            2 => Some(PieceKind::Tee),
            3 => Some(PieceKind::Bar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::Tee => "tee",
            PieceKind::Bar => "bar",
        }
    }
}

/// Cell on the board (None = empty, Some = settled block of that kind)
pub type Cell = Option<PieceKind>;
