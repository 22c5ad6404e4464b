//! Headless core of a first-person maze game.
//!
//! [`engine::MazeGraph`] carves a random spanning-tree maze, [`engine::WallGeometry`]
//! turns it into axis-aligned wall boxes, and [`session::Session`] drives a
//! collision-checked navigator plus autonomous wanderers through it, one level at a time.

pub mod config;
pub mod engine;
pub mod error;
pub mod session;

pub use config::{MazeConfig, MazeLayout};
pub use error::{MazeError, Result};
pub use session::{Facing, Level, Session, TickReport};
