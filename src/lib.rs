//! # Snake Waves
//!
//! Grid-based snake arcade simulation with multi-source input merging.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SNAKE WAVES                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Simulation primitives                     │
//! │  ├── grid.rs     - Grid positions, directions, toroidal wrap │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (single-writer)                │
//! │  ├── command.rs  - Command vocabulary and normalization      │
//! │  ├── state.rs    - Snake, foods, obstacles, scalars, modes   │
//! │  ├── tick.rs     - Simulation tick and timers                │
//! │  ├── wave.rs     - Food/obstacle wave spawning               │
//! │  └── routing.rs  - Mode-keyed command routing                │
//! │                                                              │
//! │  input/          - Concurrent command producers              │
//! │  ├── channel.rs  - MPSC input channel                        │
//! │  ├── udp.rs      - UDP datagram listener                     │
//! │  ├── serial.rs   - Serial line listener (feature "serial")   │
//! │  └── keyboard.rs - Local line-based keyboard reader          │
//! │                                                              │
//! │  runtime.rs      - Scheduler loop (drain, route, tick, draw) │
//! │  config.rs       - Runtime configuration                     │
//! │  persist.rs      - Best-score persistence                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//!
//! The scheduler loop is the **only** writer of simulation state. Listener
//! tasks (UDP, serial, keyboard) run concurrently but may only push
//! `(Source, Command)` pairs into the input channel. Each loop iteration
//! drains the channel to empty, routes every command through the mode
//! state machine, advances the hunger and movement timers by measured
//! wall-clock time, and triggers at most one simulation tick.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod input;
pub mod persist;
pub mod runtime;

// Re-export commonly used types
pub use self::core::grid::{Direction, GridPos};
pub use self::core::rng::DeterministicRng;
pub use game::command::{normalize, Command, Source};
pub use game::state::{FoodType, GameState, Mode, Snapshot};
pub use input::channel::{InputChannel, InputSender};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Playable grid width in tiles
pub const GRID_W: i32 = 56;

/// Playable grid height in tiles
pub const GRID_H: i32 = 24;

/// Minimum snake length; dropping below it is a terminal transition
pub const MIN_SEGMENTS: usize = 3;

/// Starting speed in tiles per second
pub const START_SPEED: f64 = 8.0;

/// Lower speed clamp
pub const MIN_SPEED: f64 = 4.0;

/// Upper speed clamp
pub const MAX_SPEED: f64 = 25.0;

/// Seconds without eating before starvation forces game over
pub const HUNGER_LIMIT_SECS: f64 = 20.0;

/// Cumulative foods eaten before obstacles start spawning
pub const OBSTACLES_AFTER_EATEN: u32 = 10;

/// First wave number in which orange food may appear
pub const ORANGE_ALLOWED_WAVE: u32 = 3;

/// Render frame-rate cap (Hz)
pub const FRAME_RATE: u32 = 60;
