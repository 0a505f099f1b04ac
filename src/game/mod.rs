//! Game Logic Module
//!
//! Everything the single-writer scheduler mutates lives here.
//!
//! ## Module Structure
//!
//! - `command`: canonical command set and normalization
//! - `state`: snake geometry, waves, scalars, screen modes
//! - `tick`: timers and the discrete simulation step
//! - `wave`: constraint-respecting food/obstacle placement
//! - `routing`: the `(mode, command)` finite-state machine

pub mod command;
pub mod routing;
pub mod state;
pub mod tick;
pub mod wave;

// Re-export key types
pub use command::{normalize, Command, Source};
pub use routing::{apply_command, RouteEffect};
pub use state::{Food, FoodType, GameState, Mode, Obstacle, Snapshot};
pub use tick::{advance, GameEvent, GameOverCause, TickResult};
