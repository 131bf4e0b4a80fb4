//! User configuration loaded from ~/.cluedo/config.json.
//!
//! Every field has a default, so the file may be absent or partial.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::warn;

use crate::constants::{
    CONFIG_FILE, DEFAULT_ROOM_ART_DIR, FEEDBACK_DISPLAY_MS, HINT_DISPLAY_MS, ROOM_DISPLAY_MS,
    VICTORY_DISPLAY_MS,
};
use crate::errors::Result;
use crate::utils::persistence;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feedback_display_ms: u64,
    pub hint_display_ms: u64,
    pub room_display_ms: u64,
    pub victory_display_ms: u64,
    /// Fixed seed for a reproducible mansion. Random when unset.
    pub seed: Option<u64>,
    /// Directory holding one `<Room>.txt` art file per room.
    pub room_art_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feedback_display_ms: FEEDBACK_DISPLAY_MS,
            hint_display_ms: HINT_DISPLAY_MS,
            room_display_ms: ROOM_DISPLAY_MS,
            victory_display_ms: VICTORY_DISPLAY_MS,
            seed: None,
            room_art_dir: PathBuf::from(DEFAULT_ROOM_ART_DIR),
        }
    }
}

/// How long each timed screen stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub feedback: Duration,
    pub hint: Duration,
    pub room: Duration,
    pub victory: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Config::default().timings()
    }
}

impl Config {
    /// Load from a specific file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(persistence::read_json::<Self>(path)?.unwrap_or_default())
    }

    /// Load from ~/.cluedo/config.json, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = match persistence::data_path(CONFIG_FILE) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "config directory unavailable, using defaults");
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "config not loaded, using defaults");
                Self::default()
            }
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            feedback: Duration::from_millis(self.feedback_display_ms),
            hint: Duration::from_millis(self.hint_display_ms),
            room: Duration::from_millis(self.room_display_ms),
            victory: Duration::from_millis(self.victory_display_ms),
        }
    }

    /// Generator for the session: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
