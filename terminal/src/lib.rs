//! Terminal frontend: asks for the board settings, then plays the board out on stdout.

pub mod config;
pub mod game;
pub mod prompt;
pub mod render;
