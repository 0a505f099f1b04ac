//! Game State Definitions
//!
//! All simulation state owned by the single scheduler loop: the snake,
//! the active food wave, obstacles, scalars and the current screen mode.
//! One `GameState` instance exists per process; `start_new_game`
//! reinitializes it in place, it is never rebuilt around I/O handles.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::grid::{Direction, GridPos};
use crate::core::rng::DeterministicRng;
use crate::{GRID_H, GRID_W, START_SPEED};

// =============================================================================
// SCREEN MODE
// =============================================================================

/// Current screen mode; selects the active command vocabulary and
/// whether the timers advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, waiting for Enter
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, timers halted
    Paused,
    /// Terminal screen with restart/exit selection
    GameOver,
}

// =============================================================================
// FOOD
// =============================================================================

/// Food variety; each carries a distinct effect on eat.
///
/// Score is +1 per food regardless of type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FoodType {
    /// Growth +2
    Red = 0,
    /// Speed -0.5, growth +1
    Blue = 1,
    /// Speed +0.5, growth +1
    Purple = 2,
    /// Pops one tail segment immediately; gated behind later waves
    Orange = 3,
}

impl FoodType {
    /// All food types, in spawn-table order.
    pub const ALL: [FoodType; 4] = [
        FoodType::Red,
        FoodType::Blue,
        FoodType::Purple,
        FoodType::Orange,
    ];

    /// Speed change applied on eat (before clamping).
    #[inline]
    pub fn speed_delta(self) -> f64 {
        match self {
            FoodType::Blue => -0.5,
            FoodType::Purple => 0.5,
            FoodType::Red | FoodType::Orange => 0.0,
        }
    }

    /// Deferred growth granted on eat.
    #[inline]
    pub fn growth(self) -> u32 {
        match self {
            FoodType::Red => 2,
            FoodType::Blue | FoodType::Purple => 1,
            FoodType::Orange => 0,
        }
    }
}

/// One food item of the active wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Tile the food occupies
    pub pos: GridPos,
    /// Variety, decides the eat effect
    pub kind: FoodType,
}

// =============================================================================
// OBSTACLE
// =============================================================================

/// A fixed 4-cell triangular stone: apex on top, 3-cell base below.
///
/// Treated as an atomic unit; placed and discarded whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    cells: [GridPos; 4],
}

impl Obstacle {
    /// Width of the bounding box in tiles.
    pub const WIDTH: i32 = 3;

    /// Height of the bounding box in tiles.
    pub const HEIGHT: i32 = 2;

    /// Build the triangle whose bounding box has its top-left corner at
    /// `(x, y)`: apex at `(x+1, y)`, base `(x..x+2, y+1)`.
    pub fn anchored_at(x: i32, y: i32) -> Self {
        Self {
            cells: [
                GridPos::new(x + 1, y),
                GridPos::new(x, y + 1),
                GridPos::new(x + 1, y + 1),
                GridPos::new(x + 2, y + 1),
            ],
        }
    }

    /// Whether `pos` is one of this stone's cells.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    /// The four cells of the stone.
    pub fn cells(&self) -> &[GridPos; 4] {
        &self.cells
    }

    /// Whether any cell is shared with another stone.
    pub fn overlaps(&self, other: &Obstacle) -> bool {
        self.cells.iter().any(|c| other.contains(*c))
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete simulation state.
///
/// Owned exclusively by the scheduler loop; listener tasks never touch it.
/// Mutated only through command routing and [`crate::game::tick`].
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current screen mode
    pub mode: Mode,

    /// Snake segments, head first; strictly unique while alive
    pub snake: VecDeque<GridPos>,

    /// Committed direction, used by the tick in progress
    pub direction: Direction,

    /// Requested direction, applied at the next tick boundary
    pub pending_direction: Direction,

    /// Active food wave (1-3 items)
    pub foods: Vec<Food>,

    /// Active stones, regenerated each wave
    pub obstacles: Vec<Obstacle>,

    /// Foods eaten this game, +1 per bite
    pub score: u32,

    /// Best score seen this process (persisted externally)
    pub best_score: u32,

    /// Cumulative foods eaten; gates obstacle spawning
    pub eaten_count: u32,

    /// Wave counter; 1 for the initial wave, +1 per consumed wave
    pub wave_number: u32,

    /// Tiles per second, clamped to `[MIN_SPEED, MAX_SPEED]`
    pub speed: f64,

    /// Deferred segment growth still owed
    pub pending_grow: u32,

    /// Seconds since last food while playing
    pub hunger_timer: f64,

    /// Seconds of hunger before starvation ends the game
    pub hunger_limit: f64,

    /// Seconds accumulated toward the next movement tick
    pub move_timer: f64,

    /// Seconds between movement ticks (`1.0 / speed`)
    pub move_delay: f64,

    /// Game-over cursor: 0 = restart, 1 = exit
    pub selection: u8,

    /// Spawner RNG; survives resets
    pub rng: DeterministicRng,
}

impl GameState {
    /// Create a fresh state in menu mode.
    ///
    /// `best_score` comes from the external store, read once at startup.
    pub fn new(hunger_limit: f64, best_score: u32, rng: DeterministicRng) -> Self {
        let mut state = Self {
            mode: Mode::Menu,
            snake: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            foods: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            best_score,
            eaten_count: 0,
            wave_number: 1,
            speed: START_SPEED,
            pending_grow: 0,
            hunger_timer: 0.0,
            hunger_limit,
            move_timer: 0.0,
            move_delay: 1.0 / START_SPEED,
            selection: 0,
            rng,
        };
        state.start_new_game(true);
        state
    }

    /// Reinitialize all per-game data in place and spawn the first wave.
    ///
    /// `to_menu` selects the resulting mode. The RNG and best score
    /// survive; no I/O handle is touched.
    pub fn start_new_game(&mut self, to_menu: bool) {
        let center = GridPos::center();
        self.snake = VecDeque::from([
            center,
            GridPos::new(center.x - 1, center.y),
            GridPos::new(center.x - 2, center.y),
        ]);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;

        self.foods.clear();
        self.obstacles.clear();
        self.eaten_count = 0;
        self.wave_number = 1;

        let count = self.rng.next_int_range(1, 3) as u32;
        crate::game::wave::spawn_wave(self, count);

        self.score = 0;
        self.speed = START_SPEED;
        self.move_timer = 0.0;
        self.move_delay = 1.0 / self.speed;
        self.pending_grow = 0;
        self.hunger_timer = 0.0;
        self.selection = 0;

        self.mode = if to_menu { Mode::Menu } else { Mode::Playing };
    }

    /// Request a direction change, applied at the next tick boundary.
    ///
    /// Rejected when it is the exact reverse of the committed direction
    /// or of the currently pending request, so the committed direction
    /// can never flip 180° in one tick. Returns whether it was accepted.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() || dir == self.pending_direction.opposite() {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    /// Whether any snake segment occupies `pos`.
    #[inline]
    pub fn snake_contains(&self, pos: GridPos) -> bool {
        self.snake.contains(&pos)
    }

    /// Index of the food at `pos` in the active wave, if any.
    #[inline]
    pub fn food_at(&self, pos: GridPos) -> Option<usize> {
        self.foods.iter().position(|f| f.pos == pos)
    }

    /// Whether any stone cell occupies `pos`.
    #[inline]
    pub fn obstacle_at(&self, pos: GridPos) -> bool {
        self.obstacles.iter().any(|o| o.contains(pos))
    }

    /// Whether `pos` is free of snake, food and stones.
    #[inline]
    pub fn cell_free(&self, pos: GridPos) -> bool {
        !self.snake_contains(pos) && self.food_at(pos).is_none() && !self.obstacle_at(pos)
    }

    /// Seconds left before starvation.
    #[inline]
    pub fn time_remaining(&self) -> f64 {
        (self.hunger_limit - self.hunger_timer).max(0.0)
    }

    /// Record a new best score if the current score beats it.
    ///
    /// Returns the improved value so the caller can persist it. Called on
    /// every terminal transition before the mode flips to game over.
    pub fn update_best_score(&mut self) -> Option<u32> {
        if self.score > self.best_score {
            self.best_score = self.score;
            Some(self.best_score)
        } else {
            None
        }
    }

    /// Read-only view for the render/HUD collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            score: self.score,
            best_score: self.best_score,
            time_remaining: self.time_remaining(),
            snake: self.snake.iter().copied().collect(),
            foods: self.foods.clone(),
            obstacle_cells: self
                .obstacles
                .iter()
                .flat_map(|o| o.cells().iter().copied())
                .collect(),
            wave_number: self.wave_number,
            selection: self.selection,
        }
    }
}

// =============================================================================
// RENDER SNAPSHOT
// =============================================================================

/// Read-only state snapshot consumed by the renderer once per loop
/// iteration. The core never depends on anything the renderer produces.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// Current screen mode
    pub mode: Mode,
    /// Current score
    pub score: u32,
    /// Best score so far
    pub best_score: u32,
    /// Seconds until starvation
    pub time_remaining: f64,
    /// Snake cells, head first
    pub snake: Vec<GridPos>,
    /// Active foods with their types
    pub foods: Vec<Food>,
    /// Every occupied stone cell
    pub obstacle_cells: Vec<GridPos>,
    /// Current wave number
    pub wave_number: u32,
    /// Game-over cursor position
    pub selection: u8,
}
