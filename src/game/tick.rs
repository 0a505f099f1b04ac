//! Simulation Tick and Timers
//!
//! Advances the hunger and movement accumulators against measured
//! wall-clock time and executes at most one discrete snake step per
//! call. Every rule here is a total function over the current state:
//! collisions, starvation and under-length are defined terminal
//! transitions into game over, never errors.

use tracing::info;

use crate::game::state::{FoodType, GameState, Mode};
use crate::game::wave::spawn_wave;
use crate::{MAX_SPEED, MIN_SEGMENTS, MIN_SPEED};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    /// Head moved onto a stone cell
    ObstacleCollision,
    /// Head moved onto the snake's own body
    SelfCollision,
    /// Hunger timer reached its limit
    Starvation,
    /// Snake length dropped below the minimum
    TooShort,
}

/// Event generated during a tick, consumed by the scheduler for
/// logging and best-score persistence.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A food was eaten
    FoodEaten {
        /// Variety eaten
        kind: FoodType,
        /// Score after the bite
        score: u32,
    },
    /// The active wave was fully consumed and a new one spawned
    WaveCleared {
        /// Wave number of the freshly spawned wave
        wave_number: u32,
    },
    /// Terminal transition into game over
    GameOver {
        /// What ended the game
        cause: GameOverCause,
        /// Final score
        score: u32,
        /// Improved best score, if the final score beat it
        new_best: Option<u32>,
    },
}

/// Result of one scheduler-driven advance.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this advance
    pub events: Vec<GameEvent>,
    /// Whether a terminal transition occurred
    pub game_over: bool,
}

/// Advance the timers by `dt` seconds and run at most one snake step.
///
/// Does nothing outside `Playing` mode; paused and menu screens freeze
/// both accumulators. The step is atomic: it either completes fully or
/// ends in a terminal transition, never half-applied.
pub fn advance(state: &mut GameState, dt: f64) -> TickResult {
    let mut result = TickResult::default();

    if state.mode != Mode::Playing {
        return result;
    }

    state.hunger_timer += dt;
    if state.hunger_timer >= state.hunger_limit {
        terminal(state, GameOverCause::Starvation, &mut result);
        return result;
    }

    state.move_timer += dt;
    if state.move_timer >= state.move_delay {
        // Commit the pending direction only at the tick boundary
        state.direction = state.pending_direction;
        step(state, &mut result);
        // Resync pace so a speed change takes effect on the next tick
        state.move_delay = 1.0 / state.speed;
        state.move_timer = 0.0;
    }

    result
}

/// One discrete snake step: move, collide, eat, grow.
fn step(state: &mut GameState, result: &mut TickResult) {
    let new_head = state.snake[0].step(state.direction);

    if state.obstacle_at(new_head) {
        terminal(state, GameOverCause::ObstacleCollision, result);
        return;
    }

    // Tail cells count too: moving into the current tail is death even
    // though the tail would vacate this tick
    if state.snake_contains(new_head) {
        terminal(state, GameOverCause::SelfCollision, result);
        return;
    }

    state.snake.push_front(new_head);

    if let Some(idx) = state.food_at(new_head) {
        let kind = state.foods[idx].kind;
        state.score += 1;
        state.eaten_count += 1;

        state.speed = (state.speed + kind.speed_delta()).clamp(MIN_SPEED, MAX_SPEED);
        state.pending_grow += kind.growth();

        if kind == FoodType::Orange {
            state.snake.pop_back();
            if state.snake.len() < MIN_SEGMENTS {
                // The bite still counts: the food leaves the wave first
                state.foods.remove(idx);
                result.events.push(GameEvent::FoodEaten {
                    kind,
                    score: state.score,
                });
                terminal(state, GameOverCause::TooShort, result);
                return;
            }
        }

        state.hunger_timer = 0.0;
        state.foods.remove(idx);
        result.events.push(GameEvent::FoodEaten {
            kind,
            score: state.score,
        });

        // Only a fully eaten wave triggers regeneration
        if state.foods.is_empty() {
            state.wave_number += 1;
            let count = state.rng.next_int_range(1, 3) as u32;
            spawn_wave(state, count);
            result.events.push(GameEvent::WaveCleared {
                wave_number: state.wave_number,
            });
        }
    }

    // Growth resolution: consume one owed segment or pop the tail
    if state.pending_grow > 0 {
        state.pending_grow -= 1;
    } else {
        state.snake.pop_back();
    }

    // Shrink foods can leave the snake too short even after the bite
    // check above
    if state.snake.len() < MIN_SEGMENTS {
        terminal(state, GameOverCause::TooShort, result);
    }
}

/// Perform a terminal transition: best score first, then the mode flip.
fn terminal(state: &mut GameState, cause: GameOverCause, result: &mut TickResult) {
    let new_best = state.update_best_score();
    state.mode = Mode::GameOver;
    state.selection = 0;
    result.game_over = true;
    result.events.push(GameEvent::GameOver {
        cause,
        score: state.score,
        new_best,
    });
    info!(?cause, score = state.score, "game over");
}
