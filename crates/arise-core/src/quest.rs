//! Quests, their one-time rewards, and the quest board.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::Attribute;

/// Identifier of a quest on the board.
pub type QuestId = u32;

/// Quest classification. Kinds only affect presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestKind {
    /// Repeats every day.
    Daily,
    /// A regular quest.
    Normal,
    /// An urgent quest.
    Emergency,
}

impl fmt::Display for QuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "DAILY"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Emergency => write!(f, "EMERGENCY"),
        }
    }
}

/// What a quest pays out on completion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    /// Experience awarded.
    pub exp: u64,
    /// Gold awarded.
    pub gold: u64,
    /// Unallocated stat points awarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_points: Option<u32>,
    /// Reserved; item grants are not applied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Reserved; any other reward entries, such as attribute bonuses.
    /// Kept verbatim and never applied.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Rewards {
    /// Rewards of `exp` experience and `gold` gold.
    pub fn new(exp: u64, gold: u64) -> Self {
        Self {
            exp,
            gold,
            ..Self::default()
        }
    }

    /// Add a stat point grant.
    pub fn with_stat_points(mut self, points: u32) -> Self {
        self.stat_points = Some(points);
        self
    }

    /// Add a reserved attribute bonus.
    pub fn with_bonus(mut self, attribute: Attribute, amount: i64) -> Self {
        self.extra
            .insert(attribute.key().to_string(), serde_json::Value::from(amount));
        self
    }

    /// The reserved bonus for `attribute`, if saved as an integer.
    pub fn bonus(&self, attribute: Attribute) -> Option<i64> {
        self.extra.get(attribute.key()).and_then(serde_json::Value::as_i64)
    }
}

impl fmt::Display for Rewards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXP +{}, Gold +{}", self.exp, self.gold)?;
        if let Some(points) = self.stat_points.filter(|p| *p > 0) {
            write!(f, ", Stat Points +{points}")?;
        }
        Ok(())
    }
}

/// A completable task with a one-time reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique id.
    pub id: QuestId,
    /// Short title.
    pub title: String,
    /// What the player has to do.
    pub description: String,
    /// Classification.
    #[serde(rename = "type")]
    pub kind: QuestKind,
    /// Set once, never cleared.
    pub completed: bool,
    /// Payout on completion.
    pub rewards: Rewards,
}

impl Quest {
    /// Create an incomplete quest.
    pub fn new(
        id: QuestId,
        kind: QuestKind,
        title: impl Into<String>,
        description: impl Into<String>,
        rewards: Rewards,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind,
            completed: false,
            rewards,
        }
    }
}

/// The ordered collection of quests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestBoard {
    quests: Vec<Quest>,
}

impl QuestBoard {
    /// Build a board from quests in display order.
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// Look up a quest by id.
    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// Look up a quest by id for mutation.
    pub(crate) fn get_mut(&mut self, id: QuestId) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    /// Whether `id` exists and has not been completed.
    pub fn is_open(&self, id: QuestId) -> bool {
        self.get(id).is_some_and(|q| !q.completed)
    }

    /// Iterate quests in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    /// Number of quests.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether the board has no quests.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Number of completed quests.
    pub fn completed_count(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }
}
