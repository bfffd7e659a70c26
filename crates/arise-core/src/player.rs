//! The player's level, experience, vitals, and purse.

use serde::{Deserialize, Serialize};

use crate::progression;

/// Job assigned to every player until job changes exist.
pub const DEFAULT_JOB: &str = "NONE";

/// The single local player.
///
/// An empty `name` means the player has not registered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Registered name, empty until registration.
    pub name: String,
    /// Job title.
    pub job: String,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience banked towards the next level.
    pub current_exp: u64,
    /// Experience required to reach the next level.
    pub max_exp: u64,
    /// Hit points.
    pub hp: u32,
    /// Hit point ceiling.
    pub max_hp: u32,
    /// Mana points.
    pub mp: u32,
    /// Mana point ceiling.
    pub max_mp: u32,
    /// Accumulated fatigue, cleared on level up.
    pub fatigue: u32,
    /// Gold on hand.
    pub gold: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: String::new(),
            job: DEFAULT_JOB.to_string(),
            level: 1,
            current_exp: 0,
            max_exp: progression::exp_required(1),
            hp: 100,
            max_hp: 100,
            mp: 10,
            max_mp: 10,
            fatigue: 0,
            gold: 0,
        }
    }
}

impl PlayerState {
    /// Whether a name has been registered.
    pub fn is_registered(&self) -> bool {
        !self.name.is_empty()
    }

    /// Refill hp and mp and clear fatigue.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
        self.fatigue = 0;
    }
}

/// Trim a raw name and reject it if nothing is left.
pub fn normalize_name(raw: &str) -> crate::AriseResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(crate::AriseError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AriseError;

    #[test]
    fn default_player_is_unregistered() {
        let player = PlayerState::default();
        assert!(!player.is_registered());
        assert_eq!(player.job, "NONE");
        assert_eq!(player.level, 1);
        assert_eq!(player.max_exp, 100);
        assert_eq!((player.hp, player.max_hp), (100, 100));
        assert_eq!((player.mp, player.max_mp), (10, 10));
    }

    #[test]
    fn restore_refills_vitals() {
        let mut player = PlayerState {
            hp: 3,
            mp: 0,
            fatigue: 42,
            ..PlayerState::default()
        };
        player.restore();
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.mp, player.max_mp);
        assert_eq!(player.fatigue, 0);
    }

    #[test]
    fn camel_case_keys() {
        let json = serde_json::to_value(PlayerState::default()).unwrap();
        assert_eq!(json["currentExp"], 0);
        assert_eq!(json["maxExp"], 100);
        assert_eq!(json["maxHp"], 100);
        assert_eq!(json["maxMp"], 10);
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_name("  Jinwoo \n").unwrap(), "Jinwoo");
    }

    #[test]
    fn normalize_rejects_blank() {
        assert!(matches!(normalize_name("   "), Err(AriseError::EmptyName)));
        assert!(matches!(normalize_name(""), Err(AriseError::EmptyName)));
    }
}
