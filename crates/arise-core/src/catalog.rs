//! The quest board every new player starts with.

use crate::quest::{Quest, QuestBoard, QuestId, QuestKind, Rewards};
use crate::stats::Attribute;

/// Id of the daily quest the evening reminder watches.
pub const DAILY_QUEST_ID: QuestId = 1;

/// Build the starting quest board.
pub fn default_quests() -> QuestBoard {
    QuestBoard::new(vec![
        Quest::new(
            DAILY_QUEST_ID,
            QuestKind::Daily,
            "Player Enhancement (Daily)",
            "100 push-ups, 100 sit-ups, 100 squats, 10km run.",
            Rewards::new(100, 50).with_stat_points(3),
        ),
        Quest::new(
            2,
            QuestKind::Normal,
            "Scholarship (Daily)",
            "Read a book or learn a new skill for 2 hours.",
            Rewards::new(50, 10).with_bonus(Attribute::Intelligence, 1),
        ),
        Quest::new(
            3,
            QuestKind::Normal,
            "Home Workout: Core (Plank)",
            "Plank 3 sets x 60s.",
            Rewards::new(30, 10).with_bonus(Attribute::Vitality, 1),
        ),
        Quest::new(
            4,
            QuestKind::Normal,
            "Home Workout: Legs (Squat)",
            "Squat 4 sets x 20 reps.",
            Rewards::new(40, 15).with_bonus(Attribute::Strength, 1),
        ),
        Quest::new(
            5,
            QuestKind::Normal,
            "Home Workout: Push-ups",
            "Push-ups 4 sets x 15 reps.",
            Rewards::new(40, 15).with_bonus(Attribute::Strength, 1),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let board = default_quests();
        let ids: HashSet<_> = board.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), board.len());
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn nothing_starts_completed() {
        assert_eq!(default_quests().completed_count(), 0);
    }

    #[test]
    fn daily_quest_rewards() {
        let board = default_quests();
        let daily = board.get(DAILY_QUEST_ID).unwrap();
        assert_eq!(daily.kind, QuestKind::Daily);
        assert_eq!(daily.rewards.exp, 100);
        assert_eq!(daily.rewards.gold, 50);
        assert_eq!(daily.rewards.stat_points, Some(3));
    }
}
