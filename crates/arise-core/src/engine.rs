//! The progression engine.
//!
//! [`Engine`] owns the player's stats, state, and quest board. The
//! presentation layer reads snapshots through the accessors and changes
//! state only through three intents: [`Engine::complete_quest`],
//! [`Engine::add_stat_point`], and [`Engine::set_player_name`]. Every
//! mutation is written through to the [`Store`] before the intent returns.

use chrono::NaiveTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::default_quests;
use crate::config::AriseConfig;
use crate::error::AriseError;
use crate::feedback::{Cue, Feedback, Notice};
use crate::player::PlayerState;
use crate::progression;
use crate::quest::{QuestBoard, QuestId};
use crate::reminder::reminder_due;
use crate::stats::{Attribute, Stats};
use crate::store::{PLAYER_KEY, QUESTS_KEY, STATS_KEY, Store};

/// Summary of a successful quest completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The quest that was completed.
    pub quest: QuestId,
    /// Experience awarded.
    pub exp: u64,
    /// Gold awarded.
    pub gold: u64,
    /// Stat points awarded directly by the quest.
    pub reward_points: u32,
    /// Levels crossed by the awarded experience.
    pub levels_gained: u32,
    /// Stat points earned from the levels crossed.
    pub level_points: u32,
    /// Level after the completion.
    pub level: u32,
}

impl Completion {
    /// Whether at least one level was gained.
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }

    /// All unallocated points granted by the completion.
    pub fn stat_points(&self) -> u32 {
        self.reward_points.saturating_add(self.level_points)
    }
}

/// Owns progression state and applies player intents to it.
pub struct Engine<S, F> {
    stats: Stats,
    player: PlayerState,
    quests: QuestBoard,
    store: S,
    feedback: F,
    config: AriseConfig,
}

impl<S: Store, F: Feedback> Engine<S, F> {
    /// Load saved state from `store`, falling back to defaults for anything
    /// missing or unreadable.
    pub fn initialize(store: S, feedback: F) -> Self {
        Self::with_config(store, feedback, AriseConfig::default())
    }

    /// Like [`Engine::initialize`] with an explicit configuration.
    pub fn with_config(store: S, feedback: F, config: AriseConfig) -> Self {
        let stats = load_or_default(&store, STATS_KEY, Stats::default);
        let player = load_or_default(&store, PLAYER_KEY, PlayerState::default);
        let quests = load_or_default(&store, QUESTS_KEY, default_quests);

        Self {
            stats,
            player,
            quests,
            store,
            feedback,
            config,
        }
    }

    /// Current stats.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Current player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Current quest board.
    pub fn quests(&self) -> &QuestBoard {
        &self.quests
    }

    /// Active configuration.
    pub fn config(&self) -> &AriseConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register (or rename) the player.
    ///
    /// The name is stored verbatim. Callers trim and reject blank input
    /// first (see [`normalize_name`](crate::normalize_name)); an empty name
    /// leaves the player unregistered.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player.name = name.into();
        debug!(name = %self.player.name, "player name set");
        self.persist();
    }

    /// Spend one unallocated point on `attribute`.
    ///
    /// Returns false, touching nothing, when no points are left or the
    /// attribute cannot grow any further.
    pub fn add_stat_point(&mut self, attribute: Attribute) -> bool {
        if !self.stats.allocate(attribute) {
            debug!(%attribute, points = self.stats.points, "stat point not allocated");
            return false;
        }
        debug!(%attribute, remaining = self.stats.points, "stat point allocated");
        self.play(Cue::Click);
        self.persist();
        true
    }

    /// Complete quest `id` and pay out its rewards.
    ///
    /// Unknown and already-completed quests are ignored and `None` is
    /// returned; nothing is changed or written in that case.
    pub fn complete_quest(&mut self, id: QuestId) -> Option<Completion> {
        let Some(quest) = self.quests.get_mut(id).filter(|q| !q.completed) else {
            debug!(quest = id, "quest unknown or already completed");
            return None;
        };
        quest.completed = true;
        let rewards = quest.rewards.clone();
        self.play(Cue::Success);

        let previous_level = self.player.level;
        self.player.gold = self.player.gold.saturating_add(rewards.gold);

        let total = self.player.current_exp.saturating_add(rewards.exp);
        let outcome = progression::level_up(total, self.player.level);
        for _ in 0..outcome.levels_gained {
            self.play(Cue::LevelUp);
        }
        self.stats.grant_points(outcome.stat_points());

        self.player.level = outcome.level;
        self.player.current_exp = outcome.current_exp;
        self.player.max_exp = outcome.max_exp;
        if self.player.level > previous_level {
            self.player.restore();
        }

        let reward_points = rewards.stat_points.unwrap_or(0);
        if reward_points > 0 {
            self.stats.grant_points(reward_points);
        }

        debug!(
            quest = id,
            exp = rewards.exp,
            gold = rewards.gold,
            level = self.player.level,
            levels_gained = outcome.levels_gained,
            "quest completed"
        );
        self.persist();

        Some(Completion {
            quest: id,
            exp: rewards.exp,
            gold: rewards.gold,
            reward_points,
            levels_gained: outcome.levels_gained,
            level_points: outcome.stat_points(),
            level: self.player.level,
        })
    }

    /// Raise the daily reminder if it is due at `now`.
    ///
    /// Read-only: returns the notice that was raised, if any.
    pub fn check_reminder(&self, now: NaiveTime) -> Option<Notice> {
        if !reminder_due(now, &self.quests, &self.config) {
            return None;
        }
        let notice = Notice::daily_reminder();
        self.notify(&notice);
        Some(notice)
    }

    /// Confirm to the player that notifications are wired up.
    pub fn announce_connection(&self) -> Notice {
        self.play(Cue::Click);
        let notice = Notice::connection_established();
        self.notify(&notice);
        notice
    }

    /// Write all three entities through to the store. Failures are logged
    /// and otherwise ignored.
    fn persist(&mut self) {
        save(&mut self.store, STATS_KEY, &self.stats);
        save(&mut self.store, PLAYER_KEY, &self.player);
        save(&mut self.store, QUESTS_KEY, &self.quests);
    }

    fn play(&self, cue: Cue) {
        if let Err(e) = self.feedback.play(cue) {
            debug!(%cue, error = %e, "cue dropped");
        }
    }

    fn notify(&self, notice: &Notice) {
        if let Err(e) = self.feedback.notify(notice) {
            debug!(title = %notice.title, error = %e, "notice dropped");
        }
    }
}

fn load_or_default<T, S>(store: &S, key: &str, default: impl FnOnce() -> T) -> T
where
    T: DeserializeOwned,
    S: Store,
{
    let blob = match store.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return default(),
        Err(e) => {
            warn!(key, error = %e, "could not read saved state, using defaults");
            return default();
        }
    };
    match serde_json::from_str(&blob) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "saved state is corrupt, using defaults");
            default()
        }
    }
}

fn save<T: Serialize, S: Store>(store: &mut S, key: &str, value: &T) {
    let result = serde_json::to_string_pretty(value)
        .map_err(AriseError::from)
        .and_then(|blob| store.write(key, &blob));
    match result {
        Ok(()) => debug!(key, "state saved"),
        Err(e) => warn!(key, error = %e, "could not save state"),
    }
}
