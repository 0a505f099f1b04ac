//! Best-Score Persistence
//!
//! A single decimal integer in a plain text file. The store is
//! fail-soft on both directions: an unreadable or malformed file loads
//! as zero and a failed save is logged, never propagated, so score
//! persistence can never take the simulation down.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Handle on the best-score file.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    /// Create a store over the given file path. The file need not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted best score, or 0 if the file is missing,
    /// unreadable, or not a decimal integer.
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => {
                    debug!(score, path = %self.path.display(), "loaded best score");
                    score
                }
                Err(_) => {
                    warn!(path = %self.path.display(), "best score file is malformed, using 0");
                    0
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read best score: {}", e);
                0
            }
        }
    }

    /// Overwrite the persisted best score. Failures are logged only.
    pub fn save(&self, score: u32) {
        if let Err(e) = std::fs::write(&self.path, score.to_string()) {
            warn!(score, path = %self.path.display(), "failed to save best score: {}", e);
        } else {
            debug!(score, path = %self.path.display(), "saved best score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake-waves-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = BestScoreStore::new(temp_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_path("roundtrip");
        let store = BestScoreStore::new(&path);
        store.save(42);
        assert_eq!(store.load(), 42);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not a number\n").unwrap();
        let store = BestScoreStore::new(&path);
        assert_eq!(store.load(), 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let path = temp_path("whitespace");
        std::fs::write(&path, "  17 \n").unwrap();
        let store = BestScoreStore::new(&path);
        assert_eq!(store.load(), 17);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_overwrites() {
        let path = temp_path("overwrite");
        let store = BestScoreStore::new(&path);
        store.save(10);
        store.save(25);
        assert_eq!(store.load(), 25);
        std::fs::remove_file(path).unwrap();
    }
}
