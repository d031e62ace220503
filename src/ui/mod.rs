//! Terminal rendering for the menu and the maze run.

pub mod difficulty_menu;
pub mod game_common;
pub mod maze_scene;
