use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::export::ExportFormat;
use crate::store;

/// Palette sizes offered by the count selector.
pub const PALETTE_COUNT_CHOICES: [usize; 6] = [1, 2, 3, 4, 5, 10];

pub const MAX_PALETTE_COUNT: usize = 10;

/// User-tunable settings, stored as `config.json` in the base directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette_count: usize,
    pub export_format: ExportFormat,
    /// Pause before a generated palette is shown.
    pub generation_delay_ms: u64,
    pub notification_ms: u64,
    /// Lifetime of the per-card "copied" marker.
    pub copy_feedback_ms: u64,
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette_count: 5,
            export_format: ExportFormat::Hex,
            generation_delay_ms: 800,
            notification_ms: 3000,
            copy_feedback_ms: 1500,
            data_dir: None,
        }
    }
}

impl Settings {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn copy_feedback_ttl(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Clamp values a hand-edited file could leave out of range.
    pub fn normalized(mut self) -> Self {
        self.palette_count = self.palette_count.clamp(1, MAX_PALETTE_COUNT);
        self
    }
}

pub fn config_path() -> PathBuf {
    store::base_dir().join("config.json")
}

pub fn load_settings() -> Settings {
    let path = config_path();
    let settings = match fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Settings::default()
        }),
        Err(_) => Settings::default(),
    };
    settings.normalized()
}

pub fn save_settings(settings: &Settings) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create config dir: {}", e))?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|e| format!("Failed to write config: {}", e))
}

/// The next entry of `PALETTE_COUNT_CHOICES` after `current`, wrapping.
pub fn next_count(current: usize) -> usize {
    PALETTE_COUNT_CHOICES
        .iter()
        .copied()
        .find(|c| *c > current)
        .unwrap_or(PALETTE_COUNT_CHOICES[0])
}

/// The previous entry of `PALETTE_COUNT_CHOICES` before `current`, wrapping.
pub fn prev_count(current: usize) -> usize {
    PALETTE_COUNT_CHOICES
        .iter()
        .rev()
        .copied()
        .find(|c| *c < current)
        .unwrap_or(PALETTE_COUNT_CHOICES[PALETTE_COUNT_CHOICES.len() - 1])
}
