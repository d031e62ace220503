//! Maze procedural generation.
//!
//! Passages are carved with a randomized depth-first search (recursive
//! backtracker) over the lattice of odd-coordinate cells. Nodes sit two cells
//! apart, so every corridor keeps a full wall between itself and its
//! neighbours. The search is driven by an explicit stack of frames; each frame
//! shuffles its four directions once, when the node is first entered, which
//! gives the same carving order as the recursive formulation.

use super::grid::MazeGrid;
use super::placement::place_exit;
use super::types::{Direction, MazeError, Position};
use crate::core::constants::{ENTRANCE_COL, ENTRANCE_ROW, LATTICE_STRIDE};
use rand::seq::SliceRandom;
use rand::Rng;

pub const ENTRANCE: Position = Position::new(ENTRANCE_ROW, ENTRANCE_COL);

/// A carved grid with its verified exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: MazeGrid,
    pub entrance: Position,
    pub exit: Position,
}

/// Generates a complete maze: carve passages, then place a reachable exit.
pub fn generate_maze<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<GeneratedMaze, MazeError> {
    let mut grid = MazeGrid::initialize(rows, columns)?;
    carve_passages(&mut grid, ENTRANCE, rng);
    let exit = place_exit(&grid, ENTRANCE, rng)?;

    Ok(GeneratedMaze {
        grid,
        entrance: ENTRANCE,
        exit,
    })
}

/// One node on the carving stack: where we are and which shuffled
/// directions are still left to try.
struct Frame {
    node: Position,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(node: Position, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            node,
            directions,
            next: 0,
        }
    }
}

/// Carves a perfect maze into `grid`, starting from `start`.
///
/// Doors are only opened towards unvisited nodes, so the open cells always
/// form a tree rooted at `start`.
pub fn carve_passages<R: Rng + ?Sized>(grid: &mut MazeGrid, start: Position, rng: &mut R) {
    let mut visited = vec![vec![false; grid.columns()]; grid.rows()];

    if !grid.open_cell(start) {
        return;
    }
    visited[start.row][start.col] = true;

    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.directions.len() {
            // Every direction tried: backtrack
            stack.pop();
            continue;
        }

        let direction = frame.directions[frame.next];
        frame.next += 1;
        let current = frame.node;

        let Some(neighbor) = current.offset(direction, LATTICE_STRIDE) else {
            continue;
        };
        if !grid.is_interior(neighbor) || visited[neighbor.row][neighbor.col] {
            continue;
        }

        grid.open_door(current, neighbor);
        grid.open_cell(neighbor);
        visited[neighbor.row][neighbor.col] = true;
        stack.push(Frame::enter(neighbor, rng));
    }
}
