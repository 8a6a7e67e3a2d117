//! Board model for Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! Each generation, a live cell with two or three live neighbors survives and any
//! other live cell dies; a dead cell with exactly three live neighbors is born.

pub mod grid;
