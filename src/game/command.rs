//! Command Vocabulary and Normalization
//!
//! Every input source (keyboard, UDP, serial) is reduced to the same
//! canonical command set here. Normalization is total: malformed tokens
//! map to `None` and are dropped, they can never fault the simulation.

use serde::{Deserialize, Serialize};

use crate::core::grid::Direction;

/// Canonical game command, shared by all input sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Request upward movement
    Up,
    /// Request downward movement
    Down,
    /// Request leftward movement
    Left,
    /// Request rightward movement
    Right,
    /// Toggle playing/paused
    Pause,
    /// Restart into a fresh playing game
    Reset,
    /// Confirm (menu start, game-over selection)
    Enter,
    /// Back out to the menu via a full reset
    Esc,
}

impl Command {
    /// The movement direction this command requests, if any.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Which producer a command arrived from.
///
/// Carried through the input channel for logging; routing treats all
/// sources identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Local keyboard
    Local,
    /// UDP control socket
    Udp,
    /// Serial line
    Serial,
}

/// Normalize a raw token from any source into a canonical command.
///
/// Case-insensitive and whitespace-trimmed. Accepts the word forms
/// (`UP`, `ARROWUP`, ...), the WASD synonyms and the single-character
/// shorthand used by remote senders (`U/D/L/R/P/X`). Unknown or empty
/// tokens yield `None`.
pub fn normalize(raw: &str) -> Option<Command> {
    let token = raw.trim().to_ascii_uppercase();

    match token.as_str() {
        "UP" | "ARROWUP" | "U" | "W" => Some(Command::Up),
        "DOWN" | "ARROWDOWN" | "D" | "S" => Some(Command::Down),
        "LEFT" | "ARROWLEFT" | "L" | "A" => Some(Command::Left),
        "RIGHT" | "ARROWRIGHT" | "R" => Some(Command::Right),
        "PAUSE" | "P" => Some(Command::Pause),
        "RESET" | "X" => Some(Command::Reset),
        "ENTER" => Some(Command::Enter),
        "ESC" => Some(Command::Esc),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_forms() {
        assert_eq!(normalize("UP"), Some(Command::Up));
        assert_eq!(normalize("down"), Some(Command::Down));
        assert_eq!(normalize("Left"), Some(Command::Left));
        assert_eq!(normalize("RIGHT"), Some(Command::Right));
        assert_eq!(normalize("pause"), Some(Command::Pause));
        assert_eq!(normalize("RESET"), Some(Command::Reset));
        assert_eq!(normalize("enter"), Some(Command::Enter));
        assert_eq!(normalize("ESC"), Some(Command::Esc));
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(normalize("u"), Some(Command::Up));
        assert_eq!(normalize("D"), Some(Command::Down));
        assert_eq!(normalize("l"), Some(Command::Left));
        assert_eq!(normalize("R"), Some(Command::Right));
        assert_eq!(normalize("p"), Some(Command::Pause));
        assert_eq!(normalize("X"), Some(Command::Reset));
    }

    #[test]
    fn test_wasd_synonyms() {
        assert_eq!(normalize("w"), Some(Command::Up));
        assert_eq!(normalize("a"), Some(Command::Left));
        assert_eq!(normalize("s"), Some(Command::Down));
        // Single "d" is the DOWN shorthand, matching the remote protocol
        assert_eq!(normalize("d"), Some(Command::Down));
        assert_eq!(normalize("ARROWRIGHT"), Some(Command::Right));
    }

    #[test]
    fn test_trimming_and_case() {
        assert_eq!(normalize("  up \n"), Some(Command::Up));
        assert_eq!(normalize("\tRiGhT "), Some(Command::Right));
    }

    #[test]
    fn test_garbage_is_dropped() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("UPWARD"), None);
        assert_eq!(normalize("Q"), None);
        assert_eq!(normalize("\u{1F40D}"), None);
        assert_eq!(normalize("UP DOWN"), None);
    }

    #[test]
    fn test_direction_mapping() {
        assert_eq!(Command::Up.direction(), Some(Direction::Up));
        assert_eq!(Command::Right.direction(), Some(Direction::Right));
        assert_eq!(Command::Pause.direction(), None);
        assert_eq!(Command::Enter.direction(), None);
    }
}
