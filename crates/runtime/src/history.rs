use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::state_dir;

pub const HISTORY_VERSION: u8 = 1;

pub const HISTORY_DISABLED_ENV: &str = "FILECAT_HISTORY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HistoryEvent {
    Search(SearchEvent),
    Lifecycle(LifecycleEvent),
}

impl HistoryEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            HistoryEvent::Search(e) => e.timestamp,
            HistoryEvent::Lifecycle(e) => e.timestamp,
        }
    }

    /// One-line description used by the `history` command.
    pub fn describe(&self) -> String {
        match self {
            HistoryEvent::Search(e) => {
                format!("search {:?} -> {} hits in {}ms", e.raw_query, e.hits, e.duration_ms)
            }
            HistoryEvent::Lifecycle(e) => format!("{} {}", e.action.as_str(), e.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchEvent {
    pub version: u8,
    pub timestamp: DateTime<Utc>,
    /// Criteria text as typed
    pub raw_query: String,
    pub hits: usize,
    pub duration_ms: u32,
}

impl SearchEvent {
    pub fn new(raw_query: String, hits: usize, duration_ms: u32) -> Self {
        Self {
            version: HISTORY_VERSION,
            timestamp: Utc::now(),
            raw_query,
            hits,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Archived,
    Deleted,
    Imported,
}

impl LifecycleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleAction::Archived => "archived",
            LifecycleAction::Deleted => "deleted",
            LifecycleAction::Imported => "imported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LifecycleEvent {
    pub version: u8,
    pub timestamp: DateTime<Utc>,
    pub action: LifecycleAction,
    /// Record name, or the source path for imports
    pub name: String,
}

impl LifecycleEvent {
    pub fn new(action: LifecycleAction, name: impl Into<String>) -> Self {
        Self {
            version: HISTORY_VERSION,
            timestamp: Utc::now(),
            action,
            name: name.into(),
        }
    }
}

pub fn history_log_path() -> Option<PathBuf> {
    state_dir().map(|d| d.join("history.log"))
}

fn history_disabled() -> bool {
    match env::var(HISTORY_DISABLED_ENV) {
        Ok(val) => val == "0" || val.eq_ignore_ascii_case("false"),
        Err(_) => false,
    }
}

/// Append-only JSON-lines log of searches and catalog changes.
///
/// Writing is best effort: failures are logged at debug and dropped.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new() -> Option<Self> {
        if history_disabled() {
            return None;
        }

        let path = history_log_path()?;
        Some(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, event: HistoryEvent) {
        if let Err(e) = self.append_event(&event) {
            debug!("Failed to log history event: {}", e);
        }
    }

    pub fn log_search(&self, event: SearchEvent) {
        self.record(HistoryEvent::Search(event));
    }

    pub fn log_lifecycle(&self, action: LifecycleAction, name: &str) {
        self.record(HistoryEvent::Lifecycle(LifecycleEvent::new(action, name)));
    }

    fn append_event(&self, event: &HistoryEvent) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(event).map_err(io::Error::other)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // One write per event; O_APPEND keeps lines from interleaving in practice.
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    pub fn iter_events(&self) -> impl Iterator<Item = HistoryEvent> {
        self.read_events().into_iter().flatten()
    }

    fn read_events(&self) -> Option<Vec<HistoryEvent>> {
        let file = File::open(&self.path).ok()?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();
        for line in reader.lines() {
            match line {
                Ok(line) => match serde_json::from_str(&line) {
                    Ok(ev) => events.push(ev),
                    Err(e) => debug!("Skipping malformed history line: {e}"),
                },
                Err(e) => {
                    debug!("Error reading history log: {e}");
                    break;
                }
            }
        }
        Some(events)
    }

    /// Most recent events first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEvent> {
        let mut events: Vec<HistoryEvent> = self.iter_events().collect();
        events.reverse();
        events.truncate(limit);
        events
    }

    pub fn count(&self) -> usize {
        self.iter_events().count()
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
