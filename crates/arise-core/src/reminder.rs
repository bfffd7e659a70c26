//! The evening daily-quest reminder.
//!
//! A timer polls once a minute; the reminder fires only during the
//! configured minute, and only while the watched quest is still open.

use chrono::{NaiveTime, Timelike};

use crate::config::AriseConfig;
use crate::error::{AriseError, AriseResult};
use crate::quest::QuestBoard;

/// Whether the reminder should fire at `now`.
pub fn reminder_due(now: NaiveTime, quests: &QuestBoard, config: &AriseConfig) -> bool {
    now.hour() == config.reminder_hour
        && now.minute() == config.reminder_minute
        && quests.is_open(config.reminder_quest)
}

/// Parse a wall-clock time written as `HH:MM`.
pub fn parse_time(s: &str) -> AriseResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| AriseError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_quests;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn fires_at_eight_pm() {
        let quests = default_quests();
        let cfg = AriseConfig::default();
        assert!(reminder_due(at(20, 0, 0), &quests, &cfg));
        assert!(reminder_due(at(20, 0, 59), &quests, &cfg));
    }

    #[test]
    fn quiet_outside_the_minute() {
        let quests = default_quests();
        let cfg = AriseConfig::default();
        assert!(!reminder_due(at(20, 1, 0), &quests, &cfg));
        assert!(!reminder_due(at(19, 59, 59), &quests, &cfg));
        assert!(!reminder_due(at(8, 0, 0), &quests, &cfg));
    }

    #[test]
    fn quiet_when_quest_missing() {
        let cfg = AriseConfig::default().with_reminder_quest(99);
        assert!(!reminder_due(at(20, 0, 0), &default_quests(), &cfg));
    }

    #[test]
    fn custom_time() {
        let cfg = AriseConfig::default().with_reminder_at(6, 45);
        assert!(reminder_due(at(6, 45, 10), &default_quests(), &cfg));
        assert!(!reminder_due(at(20, 0, 0), &default_quests(), &cfg));
    }

    #[test]
    fn parse_valid_time() {
        assert_eq!(parse_time("20:00").unwrap(), at(20, 0, 0));
        assert_eq!(parse_time(" 07:05 ").unwrap(), at(7, 5, 0));
    }

    #[test]
    fn parse_invalid_time() {
        assert!(matches!(parse_time("25:00"), Err(AriseError::InvalidTime(_))));
        assert!(matches!(parse_time("evening"), Err(AriseError::InvalidTime(_))));
    }
}
