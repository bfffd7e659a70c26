//! Configuration for the progression engine and its reminder.

use std::path::PathBuf;

use crate::catalog::DAILY_QUEST_ID;
use crate::quest::QuestId;
use crate::store::FileStore;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct AriseConfig {
    /// Directory for saved state. `None` means the per-user default.
    pub data_dir: Option<PathBuf>,
    /// Local hour of the daily reminder (0-23).
    pub reminder_hour: u32,
    /// Minute within `reminder_hour` (0-59).
    pub reminder_minute: u32,
    /// Quest whose completion silences the reminder.
    pub reminder_quest: QuestId,
}

impl Default for AriseConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            reminder_hour: 20,
            reminder_minute: 0,
            reminder_quest: DAILY_QUEST_ID,
        }
    }
}

impl AriseConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the reminder time (clamped to a valid hour and minute).
    pub fn with_reminder_at(mut self, hour: u32, minute: u32) -> Self {
        self.reminder_hour = hour.min(23);
        self.reminder_minute = minute.min(59);
        self
    }

    /// Set the quest the reminder watches.
    pub fn with_reminder_quest(mut self, id: QuestId) -> Self {
        self.reminder_quest = id;
        self
    }

    /// Open a file store in the configured data directory.
    pub fn file_store(&self) -> FileStore {
        match &self.data_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::open_default(),
        }
    }
}
