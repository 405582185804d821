//! Legacy scoring and tier classification.
//!
//! The score is an additive model over the final record, clamped to
//! [0, 100]. Pure and deterministic.

use crate::record::CareerRecord;
use serde::{Deserialize, Serialize};

const BASE_SCORE: i32 = 30;
const PER_CHAMPIONSHIP: i32 = 20;
const PER_CONFERENCE_TITLE: i32 = 8;
const PER_DIVISION_TITLE: i32 = 3;
const PLAYOFF_BONUS_CAP: i32 = 20;
const PER_FIRING: i32 = 5;
const MULTI_TEAM_SUCCESS_BONUS: i32 = 5;

pub fn calculate_legacy_score(record: &CareerRecord) -> i32 {
    let mut score = BASE_SCORE;

    score += PER_CHAMPIONSHIP * record.championships as i32;
    score += PER_CONFERENCE_TITLE * record.conference_championships as i32;
    score += PER_DIVISION_TITLE * record.division_titles as i32;
    score += (2 * record.playoff_appearances as i32).min(PLAYOFF_BONUS_CAP);

    score += match record.career_win_percentage {
        p if p >= 0.60 => 15,
        p if p >= 0.55 => 10,
        p if p >= 0.50 => 5,
        _              => 0,
    };

    score += match record.total_seasons {
        s if s >= 20 => 10,
        s if s >= 15 => 7,
        s if s >= 10 => 4,
        _            => 0,
    };

    score -= PER_FIRING * record.times_fired as i32;

    let winning_tenures = record
        .teams_worked_for
        .iter()
        .filter(|t| t.seasons > 0 && t.win_percentage >= 0.5)
        .count();
    if winning_tenures >= 2 {
        score += MULTI_TEAM_SUCCESS_BONUS;
    }

    score.clamp(0, 100)
}

/// Seven ordered bands partitioning [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyTier {
    Poor,
    Forgettable,
    Average,
    Good,
    Excellent,
    Legendary,
    HallOfFame,
}

impl LegacyTier {
    pub const ALL: [LegacyTier; 7] = [
        LegacyTier::Poor,
        LegacyTier::Forgettable,
        LegacyTier::Average,
        LegacyTier::Good,
        LegacyTier::Excellent,
        LegacyTier::Legendary,
        LegacyTier::HallOfFame,
    ];

    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => LegacyTier::HallOfFame,
            s if s >= 75 => LegacyTier::Legendary,
            s if s >= 60 => LegacyTier::Excellent,
            s if s >= 45 => LegacyTier::Good,
            s if s >= 30 => LegacyTier::Average,
            s if s >= 15 => LegacyTier::Forgettable,
            _            => LegacyTier::Poor,
        }
    }

    /// Lowest score that lands in this tier.
    pub fn min_score(self) -> i32 {
        match self {
            LegacyTier::HallOfFame  => 90,
            LegacyTier::Legendary   => 75,
            LegacyTier::Excellent   => 60,
            LegacyTier::Good        => 45,
            LegacyTier::Average     => 30,
            LegacyTier::Forgettable => 15,
            LegacyTier::Poor        => 0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LegacyTier::HallOfFame  => "Hall of Fame",
            LegacyTier::Legendary   => "Legendary",
            LegacyTier::Excellent   => "Excellent",
            LegacyTier::Good        => "Good",
            LegacyTier::Average     => "Average",
            LegacyTier::Forgettable => "Forgettable",
            LegacyTier::Poor        => "Poor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LegacyTier::HallOfFame => {
                "One of the greatest executives the league has ever seen. \
                 A career that will be studied for generations."
            }
            LegacyTier::Legendary => {
                "A legendary run. Franchises were transformed and trophies were raised."
            }
            LegacyTier::Excellent => {
                "An excellent career marked by sustained winning and deep playoff runs."
            }
            LegacyTier::Good => {
                "A good, respected career with more highs than lows."
            }
            LegacyTier::Average => {
                "A serviceable career. Some good years, some lean ones."
            }
            LegacyTier::Forgettable => {
                "A forgettable tenure in the front office that few will remember."
            }
            LegacyTier::Poor => {
                "A career defined by losing seasons and missed opportunities."
            }
        }
    }
}

pub fn legacy_tier(score: i32) -> LegacyTier {
    LegacyTier::from_score(score)
}
