//! Pieces module - the fixed shape catalog
//!
//! Three templates, each defined as 4 block offsets from the shape origin.
//! All templates spawn with their topmost row at y = 0 and sit horizontally
//! around the grid's midpoint (columns 4..=7).

use crate::types::PieceKind;

/// Offset of a single block relative to the shape origin
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the shape origin
pub type PieceShape = [BlockOffset; 4];

/// Spawn position for new shapes (x, y)
pub const SPAWN_POSITION: (i8, i8) = (4, 0);

/// Get the block offsets for a piece kind.
///
/// Every template has exactly 4 blocks. There is no rotation; the catalog
/// is the complete set of orientations.
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        // 2x2 block
        PieceKind::Square => [(0, 0), (1, 0), (0, 1), (1, 1)],
        // three across with a stem below the middle
        PieceKind::Tee => [(0, 0), (1, 0), (2, 0), (1, 1)],
        // four across
        PieceKind::Bar => [(0, 0), (1, 0), (2, 0), (3, 0)],
    }
}
