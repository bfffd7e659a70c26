//! Experience curve and the level-up procedure.
//!
//! Advancing from level `L` to `L + 1` costs `floor(100 * 1.2^(L - 1))`
//! experience: 100, 120, 144, 172, ... Experience beyond the current
//! requirement carries over, so a single large award can cross several
//! levels at once.

/// Experience needed to leave level 1.
pub const BASE_EXP: f64 = 100.0;

/// Per-level growth of the requirement.
pub const EXP_GROWTH: f64 = 1.2;

/// Unallocated stat points granted for every level gained.
pub const STAT_POINTS_PER_LEVEL: u32 = 3;

/// Experience required to advance from `level` to `level + 1`.
///
/// Computed in double precision and floored. Never zero.
pub fn exp_required(level: u32) -> u64 {
    let exponent = f64::from(level.saturating_sub(1));
    let required = (BASE_EXP * EXP_GROWTH.powf(exponent)).floor();
    // `as` saturates at u64::MAX once the curve leaves the representable range
    (required as u64).max(1)
}

/// Outcome of running banked experience through the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level after all advances.
    pub level: u32,
    /// Experience left over, always below `max_exp`.
    pub current_exp: u64,
    /// Requirement for the next level.
    pub max_exp: u64,
    /// Number of levels crossed.
    pub levels_gained: u32,
}

impl LevelUp {
    /// Stat points earned by the levels crossed.
    pub fn stat_points(&self) -> u32 {
        self.levels_gained.saturating_mul(STAT_POINTS_PER_LEVEL)
    }
}

/// Spend `total_exp` on level advances starting from `level`.
pub fn level_up(total_exp: u64, level: u32) -> LevelUp {
    let mut exp = total_exp;
    let mut level = level.max(1);
    let mut levels_gained = 0u32;
    let mut required = exp_required(level);

    while exp >= required {
        exp -= required;
        level = level.saturating_add(1);
        levels_gained += 1;
        required = exp_required(level);
    }

    LevelUp {
        level,
        current_exp: exp,
        max_exp: required,
        levels_gained,
    }
}
