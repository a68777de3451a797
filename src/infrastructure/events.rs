use crate::entities::DateKey;
use anyhow::{Context, Result};
use log::{debug, info};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Source of the event day set shown on the calendar.
pub trait EventStore {
    fn load(&self) -> Result<HashSet<DateKey>>;
    fn save(&self, events: &HashSet<DateKey>) -> Result<()>;
}

/// Events kept as a sorted JSON array of `YYYY-MM-DD` strings.
pub struct JsonEventFile {
    path: PathBuf,
}

impl JsonEventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonEventFile {
    fn load(&self) -> Result<HashSet<DateKey>> {
        if !self.path.exists() {
            debug!("No event file at {}, starting empty", self.path.display());
            return Ok(HashSet::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read event file {}", self.path.display()))?;
        let keys: Vec<DateKey> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse event file {}", self.path.display()))?;

        debug!("Loaded {} events from {}", keys.len(), self.path.display());
        Ok(keys.into_iter().collect())
    }

    fn save(&self, events: &HashSet<DateKey>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut keys: Vec<&DateKey> = events.iter().collect();
        keys.sort();

        let content =
            serde_json::to_string_pretty(&keys).context("Failed to serialize events to JSON")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write event file {}", self.path.display()))?;

        info!("Wrote {} events to {}", keys.len(), self.path.display());
        Ok(())
    }
}

/// In-process store for callers that already hold their events.
#[derive(Default)]
pub struct MemoryEventStore {
    events: RefCell<HashSet<DateKey>>,
}

impl MemoryEventStore {
    pub fn new(events: impl IntoIterator<Item = DateKey>) -> Self {
        Self {
            events: RefCell::new(events.into_iter().collect()),
        }
    }
}

impl EventStore for MemoryEventStore {
    fn load(&self) -> Result<HashSet<DateKey>> {
        Ok(self.events.borrow().clone())
    }

    fn save(&self, events: &HashSet<DateKey>) -> Result<()> {
        *self.events.borrow_mut() = events.clone();
        Ok(())
    }
}
