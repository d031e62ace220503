//! Maze run challenge.
//!
//! A perfect maze is carved with a randomized depth-first search, an exit is
//! placed somewhere provably reachable from the entrance, and the player has
//! a fixed number of seconds to walk from one to the other.

pub mod generation;
pub mod grid;
pub mod logic;
pub mod placement;
pub mod session;
pub mod timer;
pub mod types;

pub use generation::{carve_passages, generate_maze, GeneratedMaze, ENTRANCE};
pub use grid::MazeGrid;
pub use logic::*;
pub use placement::{direction_between, find_path, is_reachable, place_exit, reachable_from};
pub use session::{MazeSession, MazeSnapshot, MoveOutcome};
pub use timer::{SessionTimer, TimerStatus, TimerTick};
pub use types::*;
