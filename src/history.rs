use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const HISTORY_FILE: &str = "history.json";

/// Maximum number of entries kept when no limit is configured.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Id of the engine the query was submitted with.
    pub engine: String,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, engine: &str) -> Self {
        Self {
            query: query.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine: engine.to_string(),
        }
    }
}

/// Most-recent-first list of past queries, mirrored to a JSON file after
/// every mutation. In-memory state is authoritative for the session; the
/// file is read exactly once, here.
pub struct SearchHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl SearchHistory {
    /// Load from `path`. A missing or empty file yields an empty history;
    /// unreadable content is logged and treated the same way.
    pub fn load(path: impl Into<PathBuf>, limit: usize) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("failed to load history from {}: {e}", path.display());
                Vec::new()
            }
        };
        let mut history = Self {
            path,
            entries,
            limit,
        };
        history.entries.truncate(history.limit);
        history
    }

    /// Insert at the head, dropping any older entry with the same query
    /// text, then truncate to the limit and persist.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.query != entry.query);
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        if let Err(e) = self.save() {
            tracing::error!("failed to save history to {}: {e}", self.path.display());
        }
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Suggestion list for the current input: case-insensitive substring
    /// match, or the whole list while the input is blank. Order is the
    /// stored most-recent-first order either way.
    pub fn filtered(&self, input: &str) -> Vec<&HistoryEntry> {
        if input.trim().is_empty() {
            return self.entries.iter().collect();
        }
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.query.to_lowercase().contains(&needle))
            .collect()
    }
}

fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}
