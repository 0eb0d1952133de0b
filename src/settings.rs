use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::history::HISTORY_LIMIT;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Index into the engine registry, restored on the next start. Clamped
    /// against the registry when the widget is created.
    #[serde(default)]
    pub selected_engine: usize,
    /// Hint text shown in the empty query box.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Maximum number of entries kept in the history list.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_placeholder() -> String {
    "Search...".into()
}

fn default_history_limit() -> usize {
    HISTORY_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_engine: 0,
            placeholder: default_placeholder(),
            history_limit: default_history_limit(),
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields the
    /// defaults; so does a file that no longer parses, with the parse error
    /// logged rather than surfaced.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("failed to parse settings file {path}: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
