//! What a character gains on reaching each level.
//!
//! These are reference lookups for display next to the level being edited.
//! Nothing here changes a draft or checks that a choice was made.
//!
//! ## Key Types
//!
//! - `Advancement`: One of the options picked at level up
//! - `TierAchievement`: Bonus for entering tiers 2, 3 and 4
//! - `SubclassUpgrade`: Specialization and Mastery
//! - `LevelGains`: Everything a given level grants, in one value

use serde::Serialize;

use crate::core::Level;

/// Advancements picked at every level after the first.
pub const ADVANCEMENTS_PER_LEVEL: usize = 2;

/// An advancement option offered at level up.
///
/// Domain cards are chosen separately through the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Advancement {
    IncreaseTraits,
    GainHp,
    GainStress,
    IncreaseEvasion,
    NewExperience,
}

impl Advancement {
    /// All options, in menu order.
    pub const ALL: [Advancement; 5] = [
        Advancement::IncreaseTraits,
        Advancement::GainHp,
        Advancement::GainStress,
        Advancement::IncreaseEvasion,
        Advancement::NewExperience,
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Advancement::IncreaseTraits => "Increase 2 traits",
            Advancement::GainHp => "Gain 1 HP",
            Advancement::GainStress => "Gain 1 Stress",
            Advancement::IncreaseEvasion => "Increase Evasion",
            Advancement::NewExperience => "New Experience",
        }
    }

    /// Sheet note describing the result.
    #[must_use]
    pub const fn effect(self) -> &'static str {
        match self {
            Advancement::IncreaseTraits => "Increased two traits by +1",
            Advancement::GainHp => "Gained an extra Hit Point slot",
            Advancement::GainStress => "Gained an extra Stress slot",
            Advancement::IncreaseEvasion => "Increased Evasion by +1",
            Advancement::NewExperience => "Added a new experience",
        }
    }

    /// Look up an option by its menu label, ignoring surrounding whitespace
    /// and case.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Advancement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The advancement menu.
#[must_use]
pub fn advancement_options() -> &'static [Advancement] {
    &Advancement::ALL
}

/// Number of advancements picked on reaching `level`.
#[must_use]
pub fn advancement_picks(level: Level) -> usize {
    if level == Level::MIN {
        0
    } else {
        ADVANCEMENTS_PER_LEVEL
    }
}

/// Bonus granted on the first level of tiers 2, 3 and 4.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TierAchievement {
    /// Tier being entered.
    pub tier: u8,
    pub proficiency_bonus: i32,
    /// Name of the experience gained.
    pub experience: String,
}

/// The tier achievement at `level`, if any (levels 2, 5 and 8).
#[must_use]
pub fn tier_achievement(level: Level) -> Option<TierAchievement> {
    matches!(level.get(), 2 | 5 | 8).then(|| TierAchievement {
        tier: level.tier(),
        proficiency_bonus: 1,
        experience: format!("Tier {} Experience", level.get()),
    })
}

/// Proficiency held at `level`: 1, plus one per tier achievement reached.
#[must_use]
pub fn proficiency(level: Level) -> i32 {
    1 + Level::all()
        .take_while(|l| *l <= level)
        .filter_map(tier_achievement)
        .map(|a| a.proficiency_bonus)
        .sum::<i32>()
}

/// Subclass card upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SubclassUpgrade {
    Specialization,
    Mastery,
}

impl SubclassUpgrade {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubclassUpgrade::Specialization => "Specialization",
            SubclassUpgrade::Mastery => "Mastery",
        }
    }
}

impl std::fmt::Display for SubclassUpgrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subclass upgrade gained at `level`: Specialization at 5, Mastery at 8.
#[must_use]
pub fn subclass_upgrade(level: Level) -> Option<SubclassUpgrade> {
    match level.get() {
        5 => Some(SubclassUpgrade::Specialization),
        8 => Some(SubclassUpgrade::Mastery),
        _ => None,
    }
}

/// Everything reaching a level grants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelGains {
    pub level: Level,
    pub tier_achievement: Option<TierAchievement>,
    pub subclass_upgrade: Option<SubclassUpgrade>,
    pub advancement_picks: usize,
    /// Damage thresholds rise by one at every level up.
    pub threshold_bonus: i32,
}

/// Summarize what reaching `level` grants.
///
/// ```
/// use daggerheart_builder::suggest::{level_gains, SubclassUpgrade};
/// use daggerheart_builder::Level;
///
/// let gains = level_gains(Level::new(5));
/// assert_eq!(gains.subclass_upgrade, Some(SubclassUpgrade::Specialization));
/// assert!(gains.tier_achievement.is_some());
/// assert_eq!(gains.advancement_picks, 2);
/// ```
#[must_use]
pub fn level_gains(level: Level) -> LevelGains {
    let leveled_up = level > Level::MIN;
    LevelGains {
        level,
        tier_achievement: tier_achievement(level),
        subclass_upgrade: subclass_upgrade(level),
        advancement_picks: advancement_picks(level),
        threshold_bonus: i32::from(leveled_up),
    }
}
