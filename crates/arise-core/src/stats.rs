//! Allocatable attributes and the pool of unspent stat points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AriseError;

/// Starting value of every attribute.
pub const BASE_ATTRIBUTE: u32 = 10;

/// One of the five attributes a stat point can be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Physical power.
    #[serde(rename = "str")]
    Strength,
    /// Speed and reflexes.
    #[serde(rename = "agl")]
    Agility,
    /// Perception.
    #[serde(rename = "sen")]
    Sense,
    /// Endurance.
    #[serde(rename = "vit")]
    Vitality,
    /// Learning and reasoning.
    #[serde(rename = "int")]
    Intelligence,
}

impl Attribute {
    /// All attributes in status-screen order.
    pub const ALL: [Attribute; 5] = [
        Self::Strength,
        Self::Vitality,
        Self::Agility,
        Self::Intelligence,
        Self::Sense,
    ];

    /// The three-letter key used in saved state and on the status screen.
    pub fn key(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Agility => "agl",
            Self::Sense => "sen",
            Self::Vitality => "vit",
            Self::Intelligence => "int",
        }
    }

    /// The full attribute name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Sense => "sense",
            Self::Vitality => "vitality",
            Self::Intelligence => "intelligence",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.key().to_uppercase())
    }
}

impl FromStr for Attribute {
    type Err = AriseError;

    /// Accepts the short key or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == lower || a.name() == lower)
            .ok_or_else(|| AriseError::UnknownAttribute(s.to_string()))
    }
}

/// Attribute values plus unallocated points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Strength.
    #[serde(rename = "str")]
    pub strength: u32,
    /// Agility.
    #[serde(rename = "agl")]
    pub agility: u32,
    /// Sense.
    #[serde(rename = "sen")]
    pub sense: u32,
    /// Vitality.
    #[serde(rename = "vit")]
    pub vitality: u32,
    /// Intelligence.
    #[serde(rename = "int")]
    pub intelligence: u32,
    /// Unallocated stat points.
    pub points: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: BASE_ATTRIBUTE,
            agility: BASE_ATTRIBUTE,
            sense: BASE_ATTRIBUTE,
            vitality: BASE_ATTRIBUTE,
            intelligence: BASE_ATTRIBUTE,
            points: 0,
        }
    }
}

impl Stats {
    /// Current value of an attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Sense => self.sense,
            Attribute::Vitality => self.vitality,
            Attribute::Intelligence => self.intelligence,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Sense => &mut self.sense,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Intelligence => &mut self.intelligence,
        }
    }

    /// Spend one point on `attribute`. Returns false and changes nothing
    /// when no points are left or the attribute is already at its ceiling.
    pub fn allocate(&mut self, attribute: Attribute) -> bool {
        if self.points == 0 {
            return false;
        }
        let slot = self.slot_mut(attribute);
        let Some(raised) = slot.checked_add(1) else {
            return false;
        };
        *slot = raised;
        self.points -= 1;
        true
    }

    /// Add unallocated points.
    pub fn grant_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults() {
        let stats = Stats::default();
        for attribute in Attribute::ALL {
            assert_eq!(stats.get(attribute), 10);
        }
        assert_eq!(stats.points, 0);
    }

    #[test]
    fn allocate_without_points_is_noop() {
        let mut stats = Stats::default();
        assert!(!stats.allocate(Attribute::Sense));
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn allocate_moves_one_point() {
        let mut stats = Stats::default();
        stats.grant_points(2);
        assert!(stats.allocate(Attribute::Vitality));
        assert_eq!(stats.vitality, 11);
        assert_eq!(stats.points, 1);
        assert_eq!(stats.strength, 10);
    }

    #[test]
    fn allocate_at_ceiling_is_noop() {
        let mut stats = Stats {
            strength: u32::MAX,
            points: 1,
            ..Stats::default()
        };
        let before = stats.clone();
        assert!(!stats.allocate(Attribute::Strength));
        assert_eq!(stats, before);
        assert!(stats.allocate(Attribute::Agility));
        assert_eq!(stats.points, 0);
    }

    #[test]
    fn parse_short_and_long_names() {
        assert_eq!("str".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("Agility".parse::<Attribute>().unwrap(), Attribute::Agility);
        assert_eq!(" SEN ".parse::<Attribute>().unwrap(), Attribute::Sense);
        assert_eq!("intelligence".parse::<Attribute>().unwrap(), Attribute::Intelligence);
        assert!(matches!(
            "luck".parse::<Attribute>(),
            Err(AriseError::UnknownAttribute(s)) if s == "luck"
        ));
    }

    #[test]
    fn serializes_with_short_keys() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "str": 10, "agl": 10, "sen": 10, "vit": 10, "int": 10, "points": 0
            })
        );
    }

    #[test]
    fn display_is_uppercase_key() {
        assert_eq!(Attribute::Intelligence.to_string(), "INT");
        assert_eq!(format!("{:<5}|", Attribute::Vitality), "VIT  |");
    }

    fn attribute() -> impl Strategy<Value = Attribute> {
        prop::sample::select(Attribute::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn allocation_moves_exactly_one_point(points in 1u32..1000, target in attribute()) {
            let mut stats = Stats { points, ..Stats::default() };
            let before = stats.clone();
            prop_assert!(stats.allocate(target));
            prop_assert_eq!(stats.points, before.points - 1);
            for attribute in Attribute::ALL {
                let expected = before.get(attribute) + u32::from(attribute == target);
                prop_assert_eq!(stats.get(attribute), expected);
            }
        }
    }
}
