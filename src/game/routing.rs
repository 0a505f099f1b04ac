//! Mode-Keyed Command Routing
//!
//! The finite-state machine over `(mode, command)`. Each drained command
//! is applied exactly once, immediately, in drain order; nothing is ever
//! queued or retried.

use tracing::debug;

use crate::game::command::Command;
use crate::game::state::{GameState, Mode};

/// Side effect a routed command asks of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteEffect {
    /// Keep running
    Continue,
    /// Terminate the process (game-over exit selection)
    Quit,
}

/// Route one command against the current mode.
///
/// Pure over `(mode, command)`: all branches either mutate the engine
/// through its public operations or return an effect for the scheduler.
pub fn apply_command(state: &mut GameState, cmd: Command) -> RouteEffect {
    if state.mode == Mode::GameOver {
        return apply_gameover_command(state, cmd);
    }

    match cmd {
        Command::Up | Command::Down | Command::Left | Command::Right => {
            if let Some(dir) = cmd.direction() {
                let accepted = state.request_direction(dir);
                debug!(?dir, accepted, "direction request");
            }
        }
        Command::Pause => match state.mode {
            // Strict toggle; Pause does nothing in the menu
            Mode::Playing => state.mode = Mode::Paused,
            Mode::Paused => state.mode = Mode::Playing,
            _ => {}
        },
        Command::Reset => state.start_new_game(false),
        Command::Enter => {
            if state.mode == Mode::Menu {
                state.mode = Mode::Playing;
            }
        }
        Command::Esc => state.start_new_game(true),
    }

    RouteEffect::Continue
}

/// Game-over screen: cursor movement over {restart, exit} plus confirm.
fn apply_gameover_command(state: &mut GameState, cmd: Command) -> RouteEffect {
    match cmd {
        Command::Up | Command::Left => {
            state.selection = state.selection.saturating_sub(1);
        }
        Command::Down | Command::Right => {
            state.selection = (state.selection + 1).min(1);
        }
        Command::Enter => {
            if state.selection == 0 {
                state.start_new_game(false);
            } else {
                return RouteEffect::Quit;
            }
        }
        Command::Esc => state.start_new_game(true),
        // Pause and Reset have no meaning on this screen
        Command::Pause | Command::Reset => {}
    }

    RouteEffect::Continue
}
