//! Key mapping for each screen.
//!
//! Keeps crossterm out of the game logic: every screen gets its own small
//! input enum and the app dispatches on those.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mazerun::maze::MazeInput;

/// Map a key to a maze move. WASD (either case) and arrows are equivalent.
pub fn map_maze_key(key: KeyEvent) -> MazeInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => MazeInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => MazeInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => MazeInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => MazeInput::Right,
        _ => MazeInput::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    /// Direct pick by list position (0-based).
    Pick(usize),
    Quit,
    Other,
}

pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => MenuInput::Down,
        KeyCode::Enter => MenuInput::Select,
        KeyCode::Char(c @ '1'..='3') => MenuInput::Pick(c as usize - '1' as usize),
        KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverInput {
    Replay,
    ChangeDifficulty,
    Quit,
    Other,
}

pub fn map_game_over_key(key: KeyEvent) -> GameOverInput {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => GameOverInput::Replay,
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Enter | KeyCode::Esc => {
            GameOverInput::ChangeDifficulty
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => GameOverInput::Quit,
        _ => GameOverInput::Other,
    }
}

/// Leave a run in progress.
pub fn is_abandon_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Ctrl+C quits from any screen (raw mode swallows SIGINT).
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
