//! Maze game data structures.
//!
//! Cells, coordinates, difficulty presets and the error type shared by the
//! generator, the exit placer and the session controller.

use crate::core::constants::MIN_GRID_DIMENSION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors surfaced while building a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{columns}: both must be odd and at least {min}", min = MIN_GRID_DIMENSION)]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("no reachable exit cell in a {rows}x{columns} maze")]
    NoViableExit { rows: usize, columns: usize },
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    /// Character used by the plain-text rendering.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
        }
    }
}

/// Cardinal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (row, col) delta for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A (row, col) coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves `distance` cells in `direction`. `None` if that leaves the
    /// non-negative quadrant; upper bounds are the grid's concern.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let distance = distance as isize;
        Some(Position {
            row: self.row.checked_add_signed(dr * distance)?,
            col: self.col.checked_add_signed(dc * distance)?,
        })
    }

    /// One-cell step in `direction`.
    pub fn step(self, direction: Direction) -> Option<Position> {
        self.offset(direction, 1)
    }

    /// Both coordinates odd: a carving lattice node.
    pub fn is_lattice_node(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Difficulty presets for the maze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MazeDifficulty {
    Easy,
    Medium,
    Hard,
}

impl MazeDifficulty {
    pub const ALL: [MazeDifficulty; 3] = [
        MazeDifficulty::Easy,
        MazeDifficulty::Medium,
        MazeDifficulty::Hard,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(MazeDifficulty::Easy)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            Self::Easy => 21,
            Self::Medium => 31,
            Self::Hard => 45,
        }
    }

    /// Square mazes: same as `rows`.
    pub fn columns(&self) -> usize {
        self.rows()
    }

    /// Countdown length in seconds.
    pub fn timer_secs(&self) -> u32 {
        match self {
            Self::Easy => 90,
            Self::Medium => 120,
            Self::Hard => 150,
        }
    }

    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows(),
            columns: self.columns(),
            timer_secs: self.timer_secs(),
        }
    }
}

impl FromStr for MazeDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Grid size and timer for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub timer_secs: u32,
}

/// Session lifecycle. Won and TimedOut are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Active,
    Won,
    TimedOut,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
        }
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.step(Direction::Up), Some(Position::new(2, 3)));
        assert_eq!(pos.step(Direction::Down), Some(Position::new(4, 3)));
        assert_eq!(pos.step(Direction::Left), Some(Position::new(3, 2)));
        assert_eq!(pos.step(Direction::Right), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_position_step_below_zero_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(Position::new(1, 1).offset(Direction::Up, 2), None);
    }

    #[test]
    fn test_position_offset_stride_two() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset(Direction::Down, 2), Some(Position::new(3, 1)));
        assert_eq!(pos.offset(Direction::Right, 2), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_lattice_node() {
        assert!(Position::new(1, 1).is_lattice_node());
        assert!(Position::new(3, 5).is_lattice_node());
        assert!(!Position::new(1, 2).is_lattice_node());
        assert!(!Position::new(2, 2).is_lattice_node());
    }

    #[test]
    fn test_difficulty_table() {
        assert_eq!(MazeDifficulty::Easy.config(), MazeConfig { rows: 21, columns: 21, timer_secs: 90 });
        assert_eq!(MazeDifficulty::Medium.config(), MazeConfig { rows: 31, columns: 31, timer_secs: 120 });
        assert_eq!(MazeDifficulty::Hard.config(), MazeConfig { rows: 45, columns: 45, timer_secs: 150 });
    }

    #[test]
    fn test_difficulty_dimensions_are_odd() {
        for d in &MazeDifficulty::ALL {
            assert_eq!(d.rows() % 2, 1, "{:?} rows must be odd", d);
            assert_eq!(d.columns() % 2, 1, "{:?} columns must be odd", d);
            assert!(d.rows() >= MIN_GRID_DIMENSION);
        }
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(MazeDifficulty::from_index(0), MazeDifficulty::Easy);
        assert_eq!(MazeDifficulty::from_index(1), MazeDifficulty::Medium);
        assert_eq!(MazeDifficulty::from_index(2), MazeDifficulty::Hard);
        assert_eq!(MazeDifficulty::from_index(99), MazeDifficulty::Easy);
        for d in MazeDifficulty::ALL {
            assert_eq!(MazeDifficulty::from_index(d.index()), d);
        }
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<MazeDifficulty>(), Ok(MazeDifficulty::Easy));
        assert_eq!("Medium".parse::<MazeDifficulty>(), Ok(MazeDifficulty::Medium));
        assert_eq!("HARD".parse::<MazeDifficulty>(), Ok(MazeDifficulty::Hard));
        assert!("impossible".parse::<MazeDifficulty>().is_err());
    }

    #[test]
    fn test_session_state_terminal() {
        assert!(!SessionState::Active.is_terminal());
        assert!(SessionState::Won.is_terminal());
        assert!(SessionState::TimedOut.is_terminal());
    }

    #[test]
    fn test_error_messages() {
        let err = MazeError::InvalidDimensions { rows: 4, columns: 7 };
        assert_eq!(
            err.to_string(),
            "invalid maze dimensions 4x7: both must be odd and at least 5"
        );
        let err = MazeError::NoViableExit { rows: 3, columns: 3 };
        assert_eq!(err.to_string(), "no reachable exit cell in a 3x3 maze");
    }

    #[test]
    fn test_cell_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Cell::Wall).unwrap(), "\"wall\"");
        assert_eq!(serde_json::to_string(&Cell::Open).unwrap(), "\"open\"");
    }
}
