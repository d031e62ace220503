//! Exit placement and reachability checks.
//!
//! The exit is drawn uniformly from the interior, away from the outer ring,
//! and accepted only once a breadth-first search from the entrance reaches
//! it. With the backtracking carver every open candidate passes; the search
//! still runs so a different carver cannot yield an unreachable exit.

use super::grid::MazeGrid;
use super::types::{Direction, MazeError, Position};
use crate::core::constants::EXIT_RETRY_FACTOR;
use rand::Rng;
use std::collections::VecDeque;

/// Picks a random open, reachable, non-entrance cell as the exit.
///
/// Candidates come from rows `2..=rows-2` and columns `2..=cols-2`. Fails
/// with `NoViableExit` when that window is empty or when no candidate is
/// accepted within `EXIT_RETRY_FACTOR * rows * columns` draws.
pub fn place_exit<R: Rng + ?Sized>(
    grid: &MazeGrid,
    entrance: Position,
    rng: &mut R,
) -> Result<Position, MazeError> {
    let no_exit = MazeError::NoViableExit {
        rows: grid.rows(),
        columns: grid.columns(),
    };

    let (row_max, col_max) = (grid.rows() - 2, grid.columns() - 2);
    if row_max < 2 || col_max < 2 {
        return Err(no_exit);
    }

    let max_draws = EXIT_RETRY_FACTOR * grid.rows() * grid.columns();
    // Computed lazily: only needed once an open candidate shows up
    let mut reachable: Option<Vec<Vec<bool>>> = None;

    for _ in 0..max_draws {
        let candidate = Position::new(rng.gen_range(2..=row_max), rng.gen_range(2..=col_max));
        if candidate == entrance || !grid.is_open(candidate) {
            continue;
        }

        let visited = reachable.get_or_insert_with(|| reachable_from(grid, entrance));
        if visited[candidate.row][candidate.col] {
            return Ok(candidate);
        }
    }

    Err(no_exit)
}

/// Breadth-first flood from `start` over open cells.
///
/// Returns a `rows x columns` matrix; `true` marks cells reached. A closed
/// `start` reaches nothing.
pub fn reachable_from(grid: &MazeGrid, start: Position) -> Vec<Vec<bool>> {
    let mut visited = vec![vec![false; grid.columns()]; grid.rows()];
    if !grid.is_open(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited[start.row][start.col] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        for next in open_neighbors(grid, pos) {
            if !visited[next.row][next.col] {
                visited[next.row][next.col] = true;
                queue.push_back(next);
            }
        }
    }

    visited
}

pub fn is_reachable(grid: &MazeGrid, from: Position, to: Position) -> bool {
    grid.contains(to) && reachable_from(grid, from)[to.row][to.col]
}

/// Cell sequence from `from` to `to` (both inclusive), recovered from BFS
/// parent pointers. `None` when `to` cannot be reached.
pub fn find_path(grid: &MazeGrid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.is_open(from) || !grid.is_open(to) {
        return None;
    }

    let mut parent: Vec<Vec<Option<Position>>> = vec![vec![None; grid.columns()]; grid.rows()];
    let mut seen = vec![vec![false; grid.columns()]; grid.rows()];
    let mut queue = VecDeque::new();
    seen[from.row][from.col] = true;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            break;
        }
        for next in open_neighbors(grid, pos) {
            if !seen[next.row][next.col] {
                seen[next.row][next.col] = true;
                parent[next.row][next.col] = Some(pos);
                queue.push_back(next);
            }
        }
    }

    if !seen[to.row][to.col] {
        return None;
    }

    let mut path = vec![to];
    let mut cursor = to;
    while let Some(prev) = parent[cursor.row][cursor.col] {
        path.push(prev);
        cursor = prev;
    }
    path.reverse();
    Some(path)
}

/// Direction of a single step between orthogonally adjacent cells.
pub fn direction_between(from: Position, to: Position) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| from.step(d) == Some(to))
}

fn open_neighbors(grid: &MazeGrid, pos: Position) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |d| pos.step(d))
        .filter(move |&p| grid.is_open(p))
}
