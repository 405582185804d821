//! Highlight reel extraction.
//!
//! Scans achievements and season history for three patterns:
//! championships, single-season turnarounds, and long tenures.

use crate::{
    record::{AchievementKind, CareerRecord},
    types::{TeamId, Year},
};
use serde::{Deserialize, Serialize};

/// A turnaround needs the prior season under this many wins...
const TURNAROUND_PREV_MAX_WINS: u32 = 6;
/// ...and the next season at or above this many.
const TURNAROUND_CURR_MIN_WINS: u32 = 10;
const LONGEVITY_MIN_SEASONS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightType {
    Championship,
    Turnaround,
    Longevity,
}

/// Ordered most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Major,
    Notable,
    Minor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerHighlight {
    pub kind:         HighlightType,
    pub significance: Significance,
    pub year:         Year,
    pub team_id:      TeamId,
    pub title:        String,
    pub description:  String,
}

pub fn extract_highlights(record: &CareerRecord) -> Vec<CareerHighlight> {
    let mut highlights = Vec::new();

    for a in record.achievements.iter().filter(|a| a.kind == AchievementKind::Championship) {
        highlights.push(CareerHighlight {
            kind: HighlightType::Championship,
            significance: Significance::Major,
            year: a.year,
            team_id: a.team_id.clone(),
            title: format!("{} Champions", a.year),
            description: a.description.clone(),
        });
    }

    for pair in record.season_history.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev.team_id == curr.team_id
            && prev.wins < TURNAROUND_PREV_MAX_WINS
            && curr.wins >= TURNAROUND_CURR_MIN_WINS
        {
            highlights.push(CareerHighlight {
                kind: HighlightType::Turnaround,
                significance: Significance::Notable,
                year: curr.year,
                team_id: curr.team_id.clone(),
                title: format!("The {} Turnaround", curr.year),
                description: format!(
                    "Took the {} from {}-{} to {}-{} in a single season",
                    curr.team_name, prev.wins, prev.losses, curr.wins, curr.losses
                ),
            });
        }
    }

    if let Some(t) = record.longest_tenure().filter(|t| t.seasons >= LONGEVITY_MIN_SEASONS) {
        highlights.push(CareerHighlight {
            kind: HighlightType::Longevity,
            significance: Significance::Notable,
            year: t.start_year,
            team_id: t.team_id.clone(),
            title: format!("{} Seasons with the {}", t.seasons, t.team_name),
            description: format!(
                "A {}-season run at the helm of the {}, the longest of the career",
                t.seasons, t.team_name
            ),
        });
    }

    // Stable: discovery order is kept within a significance band.
    highlights.sort_by_key(|h| h.significance);
    highlights
}
