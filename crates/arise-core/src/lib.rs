//! Progression engine for Arise, a status-screen style self-improvement
//! tracker.
//!
//! The player completes quests for experience, gold, and stat points,
//! levels up along a compounding experience curve, and spends stat points
//! on five attributes. All state lives in an [`Engine`] that loads from and
//! writes through to a key-value [`Store`], and asks a [`Feedback`] port to
//! play sound cues and raise notifications.

/// The default quest board.
pub mod catalog;
/// Engine configuration.
pub mod config;
/// The progression engine and its intents.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Sound cues and notifications.
pub mod feedback;
/// Player level, experience, vitals, and gold.
pub mod player;
/// The experience curve and level-up procedure.
pub mod progression;
/// Quests, rewards, and the quest board.
pub mod quest;
/// The daily reminder check.
pub mod reminder;
/// Attributes and stat points.
pub mod stats;
/// Key-value persistence.
pub mod store;

/// Re-export the starting quest board.
pub use catalog::{DAILY_QUEST_ID, default_quests};
/// Re-export configuration.
pub use config::AriseConfig;
/// Re-export engine types.
pub use engine::{Completion, Engine};
/// Re-export error types.
pub use error::{AriseError, AriseResult};
/// Re-export feedback types.
pub use feedback::{Cue, Feedback, Notice, Silent};
/// Re-export player types.
pub use player::{PlayerState, normalize_name};
/// Re-export progression types.
pub use progression::{LevelUp, exp_required, level_up};
/// Re-export quest types.
pub use quest::{Quest, QuestBoard, QuestId, QuestKind, Rewards};
/// Re-export stat types.
pub use stats::{Attribute, Stats};
/// Re-export store types.
pub use store::{FileStore, MemoryStore, Store};
