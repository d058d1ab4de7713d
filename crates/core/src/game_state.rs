//! Game state module - the step engine
//!
//! Ties together the board, the shape catalog, and the generator. Each call
//! to [`GameState::tick`] advances gravity by one row; when the move is
//! blocked, the same tick commits the shape, clears full rows, and spawns
//! the next shape. All board mutation happens inside that chain.

use crate::board::Board;
use crate::pieces::{get_shape, PieceShape, SPAWN_POSITION};
use crate::rng::ShapeGenerator;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::PieceKind;

/// The currently falling shape.
///
/// Trial moves go through [`translated`](Self::translated), which returns a
/// copy; the active shape itself is only replaced after the new position has
/// been validated, so a failed check never loses the last valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingShape {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

impl FallingShape {
    /// Create a new shape at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self { kind, x, y }
    }

    /// Get the block offsets for this shape's kind
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind)
    }

    /// Absolute positions of the shape's blocks
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// A copy of this shape moved by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Check that every block may occupy its position on the board.
    ///
    /// Pure query, safe to call on speculative positions.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.blocks().iter().all(|&(x, y)| board.is_free(x, y))
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The active shape moved down one row.
    Fell,
    /// The shape was committed, rows were cleared, and a new shape spawned.
    Locked { rows_cleared: u32 },
    /// A freshly spawned shape collided; the game just ended.
    ///
    /// Emitted exactly once. Hosts are expected to stop ticking afterwards.
    GameOver,
    /// Nothing happened (not started, or already over).
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<FallingShape>,
    generator: ShapeGenerator,
    /// Monotonic id for spawned shapes (increments only on successful spawn).
    piece_id: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_generator(ShapeGenerator::new(seed))
    }

    /// Create a new game around an injected generator.
    ///
    /// Tests pass a scripted generator for a reproducible spawn order.
    pub fn with_generator(generator: ShapeGenerator) -> Self {
        Self {
            board: Board::new(),
            active: None,
            generator,
            piece_id: 0,
            started: false,
            game_over: false,
        }
    }

    /// Create a not-yet-started game over a prepared board.
    ///
    /// Used to set up mid-game positions directly.
    pub fn with_board(board: Board, generator: ShapeGenerator) -> Self {
        Self {
            board,
            ..Self::with_generator(generator)
        }
    }

    /// Start the game and spawn the first shape.
    ///
    /// A blocked spawn position ends the game immediately.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_shape();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<FallingShape> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Advance the game by one gravity step.
    ///
    /// In the falling state the shape's trial copy moves down one row. If
    /// the new position is valid it becomes the active shape. Otherwise the
    /// shape has come to rest: it is committed where it is, full rows are
    /// cleared, and the next shape spawns, all within the same tick. A
    /// spawn collision transitions to game over.
    ///
    /// Once the game is over, further ticks return [`StepOutcome::Idle`]
    /// and mutate nothing.
    pub fn tick(&mut self) -> StepOutcome {
        if !self.started || self.game_over {
            return StepOutcome::Idle;
        }
        let Some(active) = self.active else {
            return StepOutcome::Idle;
        };

        let moved = active.translated(0, 1);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
            return StepOutcome::Fell;
        }

        // Blocked: the shape rests at its current (last valid) position.
        let rows_cleared = self.lock_shape(active);

        if self.spawn_shape() {
            StepOutcome::Locked { rows_cleared }
        } else {
            StepOutcome::GameOver
        }
    }

    /// Commit the shape into the board and clear full rows.
    ///
    /// Returns the number of rows cleared.
    fn lock_shape(&mut self, shape: FallingShape) -> u32 {
        self.board.lock_blocks(&shape.blocks(), shape.kind);
        self.active = None;
        self.board.clear_full_rows().len() as u32
    }

    /// Spawn the next shape from the generator.
    ///
    /// Returns false (and flags game over) when the spawn position collides
    /// with the settled stack. The board is not touched on that path.
    fn spawn_shape(&mut self) -> bool {
        let kind = self.generator.draw();
        let shape = FallingShape::spawn(kind);

        if !shape.is_valid(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(shape);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Write a between-tick observation into an existing snapshot.
    ///
    /// This is what renderers consume; they never see mid-tick state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
        out.seed = self.generator.seed();
    }

    /// Allocate and fill a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
