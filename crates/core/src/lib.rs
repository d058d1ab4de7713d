//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the falling-block game.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit or integration tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with row clearing and compaction
//! - [`pieces`]: the fixed three-template shape catalog and spawn position
//! - [`rng`]: seeded LCG plus the shape generator (scriptable for tests)
//! - [`game_state`]: the step engine that drives gravity, commit, and respawn
//! - [`snapshot`]: between-tick observation structs for renderers
//!
//! # Game Rules
//!
//! - A shape falls one row per [`GameState::tick`].
//! - When a downward move would be invalid, the shape is committed to the
//!   grid at its current position (the last valid one), full rows are
//!   cleared, and the next shape spawns.
//! - A spawn into an occupied area ends the game.
//! - Block positions above the visible top (`y < 0`) never collide.
//!
//! # Example
//!
//! ```
//! use gridfall_core::{GameState, StepOutcome};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Drive the game until it ends.
//! loop {
//!     match game.tick() {
//!         StepOutcome::GameOver => break,
//!         _ => {}
//!     }
//! }
//! assert!(game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{FallingShape, GameState, StepOutcome};
pub use pieces::{get_shape, SPAWN_POSITION};
pub use rng::{ShapeGenerator, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
