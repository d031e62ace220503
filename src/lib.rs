//! Mazerun - terminal maze runner library.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod maze;

// UI and key mapping live in the binary; they are tied to the terminal
