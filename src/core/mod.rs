//! Simulation Primitives
//!
//! Deterministic building blocks shared by the game logic:
//! - `grid`: integer grid positions and the four movement directions
//! - `rng`: seeded Xorshift128+ PRNG for reproducible spawning

pub mod grid;
pub mod rng;
