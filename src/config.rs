//! Runtime configuration.
//!
//! Board size, the room catalog and the viewport sizes are compile-time
//! constants in `tui_dungeon_types`. Only the knobs below are read at startup:
//!
//! - `DUNGEON_SEED`: fixed seed for a reproducible layout (default: from the clock)
//! - `DUNGEON_MAX_ATTEMPTS`: random samples per placement before the
//!   deterministic scan (default: 1000)
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{BoardGenerator, GameSession, GenerateError};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_MAX_PLACEMENT_ATTEMPTS, ROOM_CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u32>().ok());

        Self {
            seed: parse("DUNGEON_SEED").unwrap_or_else(clock_seed),
            max_attempts: parse("DUNGEON_MAX_ATTEMPTS").unwrap_or(DEFAULT_MAX_PLACEMENT_ATTEMPTS),
        }
    }

    pub fn generator(&self) -> BoardGenerator {
        BoardGenerator::new(BOARD_WIDTH, BOARD_HEIGHT).with_max_attempts(self.max_attempts)
    }

    /// Generate the reference board with this configuration.
    pub fn start_session(&self) -> Result<GameSession, GenerateError> {
        GameSession::generate(&self.generator(), &ROOM_CATALOG, self.seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
