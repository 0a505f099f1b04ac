//! Wave Spawning
//!
//! Randomized, constraint-respecting placement of foods and stones.
//! Invoked at game start and each time the active wave is fully eaten.
//! Waves are all-or-nothing: the previous wave's foods and stones are
//! cleared before the new wave is populated.

use tracing::{debug, warn};

use crate::core::grid::GridPos;
use crate::game::state::{Food, FoodType, GameState, Obstacle};
use crate::{GRID_H, GRID_W, OBSTACLES_AFTER_EATEN, ORANGE_ALLOWED_WAVE};

/// Random placement attempts per item before giving up.
const PLACEMENT_TRIES: u32 = 500;

/// Populate a fresh wave of `n_foods` foods (clamped to 1..=3) and,
/// once the cumulative eaten-food counter has crossed
/// [`OBSTACLES_AFTER_EATEN`], 1-2 stones.
///
/// The exhaustive fallback guarantees at least one food exists after
/// this call on any grid the snake does not fully cover.
pub fn spawn_wave(state: &mut GameState, n_foods: u32) {
    let n_foods = n_foods.clamp(1, 3);

    state.foods.clear();
    state.obstacles.clear();

    for _ in 0..n_foods {
        if let Some(food) = food_candidate(state) {
            state.foods.push(food);
        }
    }

    if state.eaten_count >= OBSTACLES_AFTER_EATEN {
        let n_stones = state.rng.next_int_range(1, 2);
        for _ in 0..n_stones {
            if let Some(stone) = obstacle_candidate(state) {
                state.obstacles.push(stone);
            }
        }
    }

    // The engine must never end up with zero spawnable food.
    if state.foods.is_empty() {
        if let Some(food) = fallback_food(state) {
            warn!("wave spawn exhausted random attempts, used fallback scan");
            state.foods.push(food);
        }
    }

    debug!(
        wave = state.wave_number,
        foods = state.foods.len(),
        stones = state.obstacles.len(),
        "spawned wave"
    );
}

/// Food types allowed for the current wave. Orange is excluded until
/// the wave gate is reached.
fn allowed_types(wave_number: u32) -> &'static [FoodType] {
    const UNGATED: [FoodType; 3] = [FoodType::Red, FoodType::Blue, FoodType::Purple];
    if wave_number < ORANGE_ALLOWED_WAVE {
        &UNGATED
    } else {
        &FoodType::ALL
    }
}

/// Sample a food on a free cell, bounded random retry.
fn food_candidate(state: &mut GameState) -> Option<Food> {
    for _ in 0..PLACEMENT_TRIES {
        let pos = GridPos::new(
            state.rng.next_int_range(0, GRID_W - 1),
            state.rng.next_int_range(0, GRID_H - 1),
        );
        if !state.cell_free(pos) {
            continue;
        }
        let kind = *state.rng.pick(allowed_types(state.wave_number))?;
        return Some(Food { pos, kind });
    }
    None
}

/// Last-resort exhaustive scan: any non-snake cell qualifies, even one
/// already holding a stone or food.
fn fallback_food(state: &mut GameState) -> Option<Food> {
    for x in 0..GRID_W {
        for y in 0..GRID_H {
            let pos = GridPos::new(x, y);
            if !state.snake_contains(pos) {
                let kind = *state.rng.pick(allowed_types(state.wave_number))?;
                return Some(Food { pos, kind });
            }
        }
    }
    None
}

/// Sample a stone that overlaps nothing, bounded random retry.
fn obstacle_candidate(state: &mut GameState) -> Option<Obstacle> {
    for _ in 0..PLACEMENT_TRIES {
        let x = state.rng.next_int_range(0, (GRID_W - Obstacle::WIDTH).max(0));
        let y = state.rng.next_int_range(0, (GRID_H - Obstacle::HEIGHT).max(0));
        let stone = Obstacle::anchored_at(x, y);

        let hits_snake = stone.cells().iter().any(|c| state.snake_contains(*c));
        let hits_food = stone.cells().iter().any(|c| state.food_at(*c).is_some());
        let hits_stone = state.obstacles.iter().any(|o| stone.overlaps(o));

        if hits_snake || hits_food || hits_stone {
            continue;
        }
        return Some(stone);
    }
    None
}
