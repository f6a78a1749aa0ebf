//! # Maze Muncher
//!
//! An arcade-style character simulation on a graph-based maze.
//!
//! This library provides the core functionality for discrete-node movement,
//! input-buffered direction changes, collectible consumption and the timed
//! power mode with its flicker warning.

pub mod board;
pub mod cli;
pub mod direction;
pub mod error;
pub mod player;
pub mod power;
pub mod simulation;
pub mod utils;

pub use board::Board;
pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SimError};
pub use player::Player;
pub use power::{PowerConfig, PowerTimer};
pub use simulation::SimulationEngine;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Board, Direction, Player, PowerConfig, PowerTimer, Result, SimError,
        SimulationEngine,
    };
}
