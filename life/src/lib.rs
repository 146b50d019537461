// lib.rs - Conway's Game of Life engine
//
// Any live cell with fewer than two live neighbours dies, as if caused by under-population.
// Any live cell with two or three live neighbours lives on to the next generation.
// Any live cell with more than three live neighbours dies, as if by over-population.
// Any dead cell with exactly three live neighbours becomes a live cell, as if by reproduction.

mod engine;
mod error;
mod grid;

pub use engine::{DEFAULT_INTERVAL, Engine, MAX_INTERVAL, MIN_INTERVAL, SPEED_STEP};
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
