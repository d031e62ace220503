//! A single maze run: the generated grid, the player's position and the
//! Active → Won / TimedOut state machine.
//!
//! Every run owns its grid outright. Replaying builds a new session.

use super::generation::{generate_maze, GeneratedMaze};
use super::grid::MazeGrid;
use super::timer::SessionTimer;
use super::types::{Cell, Direction, MazeConfig, MazeDifficulty, MazeError, Position, SessionState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Player stepped onto an open cell.
    Moved(Position),
    /// Wall or edge in the way; nothing changed.
    Blocked,
    /// Step landed on the exit; the session is now Won.
    Won(Position),
    /// Session already over.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct MazeSession {
    difficulty: Option<MazeDifficulty>,
    seed: u64,
    grid: MazeGrid,
    entrance: Position,
    exit: Position,
    player: Position,
    state: SessionState,
    moves: u32,
    pub(crate) timer: SessionTimer,
    /// Sub-second time carried between ticks (milliseconds).
    pub(crate) accumulated_time_ms: u64,
}

impl MazeSession {
    /// Generates a fresh maze from `seed` and starts the run.
    pub fn new(config: MazeConfig, seed: u64) -> Result<Self, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let maze = generate_maze(config.rows, config.columns, &mut rng)?;
        let mut session = Self::with_maze(maze, config.timer_secs);
        session.seed = seed;
        Ok(session)
    }

    pub fn from_difficulty(difficulty: MazeDifficulty, seed: u64) -> Result<Self, MazeError> {
        let mut session = Self::new(difficulty.config(), seed)?;
        session.difficulty = Some(difficulty);
        Ok(session)
    }

    /// Starts a run on an already generated maze.
    pub fn with_maze(maze: GeneratedMaze, timer_secs: u32) -> Self {
        let GeneratedMaze {
            grid,
            entrance,
            exit,
        } = maze;
        Self {
            difficulty: None,
            seed: 0,
            grid,
            entrance,
            exit,
            player: entrance,
            state: SessionState::Active,
            moves: 0,
            timer: SessionTimer::new(timer_secs),
            accumulated_time_ms: 0,
        }
    }

    pub fn difficulty(&self) -> Option<MazeDifficulty> {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn entrance(&self) -> Position {
        self.entrance
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Accepted moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs
    }

    /// Try to step the player one cell.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Ignored;
        }

        let Some(target) = self.player.step(direction) else {
            return MoveOutcome::Blocked;
        };
        if !self.grid.is_open(target) {
            return MoveOutcome::Blocked;
        }

        self.player = target;
        self.moves += 1;

        if self.player == self.exit {
            self.state = SessionState::Won;
            self.timer.cancel();
            MoveOutcome::Won(target)
        } else {
            MoveOutcome::Moved(target)
        }
    }

    /// Timer ran out. Only an Active session times out; a win stands.
    /// Returns true when this call ended the session.
    pub fn on_timer_expired(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = SessionState::TimedOut;
        true
    }

    /// Read-only view for renderers and `--dump`.
    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            rows: self.grid.rows(),
            columns: self.grid.columns(),
            cells: self.grid.cells().to_vec(),
            entrance: self.entrance,
            exit: self.exit,
            player: self.player,
            state: self.state,
            remaining_secs: self.timer.remaining_secs,
            seed: self.seed,
            difficulty: self.difficulty,
        }
    }
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<Cell>>,
    pub entrance: Position,
    pub exit: Position,
    pub player: Position,
    pub state: SessionState,
    pub remaining_secs: u32,
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<MazeDifficulty>,
}
