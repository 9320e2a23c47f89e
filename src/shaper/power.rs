//! # Power Levels
//!
//! Fixed output reductions a driver can engage mid-match, e.g. half power
//! for lining up on a goal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Power reduction level, each mapping to a fixed multiplier.
///
/// At most one level is engaged on an axis at a time; engaging one
/// disengages the rest.
///
/// # Examples
///
/// ```
/// use teleop_shaper::shaper::power::PowerLevel;
///
/// assert_eq!(PowerLevel::Full.multiplier(), 1.0);
/// assert_eq!(PowerLevel::Quarter.multiplier(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerLevel {
    /// No reduction (1.0).
    #[default]
    Full,
    /// 50% power.
    Half,
    /// 30% power.
    ThirtyPercent,
    /// 25% power.
    Quarter,
    /// 20% power.
    TwentyPercent,
    /// 10% power.
    TenPercent,
}

impl PowerLevel {
    /// Every level, strongest first.
    pub const ALL: [PowerLevel; 6] = [
        PowerLevel::Full,
        PowerLevel::Half,
        PowerLevel::ThirtyPercent,
        PowerLevel::Quarter,
        PowerLevel::TwentyPercent,
        PowerLevel::TenPercent,
    ];

    /// Reduction multiplier for this level.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            PowerLevel::Full => 1.0,
            PowerLevel::Half => 0.5,
            PowerLevel::ThirtyPercent => 0.3,
            PowerLevel::Quarter => 0.25,
            PowerLevel::TwentyPercent => 0.2,
            PowerLevel::TenPercent => 0.1,
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.multiplier() * 100.0).round() as u32)
    }
}
