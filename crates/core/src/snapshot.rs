//! Between-tick observation structs consumed by renderers.

use crate::game_state::FallingShape;
use crate::pieces::get_shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute positions of the active shape's blocks
    pub fn blocks(&self) -> [(i8, i8); 4] {
        get_shape(self.kind).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<FallingShape> for ActiveSnapshot {
    fn from(value: FallingShape) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells as cell codes (0 = empty)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub piece_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.game_over = false;
        self.piece_id = 0;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            game_over: false,
            piece_id: 0,
            seed: 0,
        }
    }
}
