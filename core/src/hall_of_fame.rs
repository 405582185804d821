//! Hall-of-Fame outlook from the legacy score and career facts.

use crate::record::CareerRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallOfFameStatus {
    No,
    Unlikely,
    Borderline,
    Eventual,
    FirstBallot,
}

impl HallOfFameStatus {
    pub const ALL: [HallOfFameStatus; 5] = [
        HallOfFameStatus::No,
        HallOfFameStatus::Unlikely,
        HallOfFameStatus::Borderline,
        HallOfFameStatus::Eventual,
        HallOfFameStatus::FirstBallot,
    ];

    pub fn display(self) -> &'static str {
        match self {
            HallOfFameStatus::FirstBallot => "First-Ballot Hall of Famer",
            HallOfFameStatus::Eventual    => "Future Hall of Famer",
            HallOfFameStatus::Borderline  => "Borderline Candidate",
            HallOfFameStatus::Unlikely    => "Long Shot",
            HallOfFameStatus::No          => "Not a Candidate",
        }
    }

    fn is_unfavorable(self) -> bool {
        matches!(self, HallOfFameStatus::Unlikely | HallOfFameStatus::No)
    }
}

pub fn calculate_hall_of_fame_status(record: &CareerRecord, score: i32) -> HallOfFameStatus {
    let champs = record.championships;
    let win_pct = record.career_win_percentage;

    if score >= 90 && champs >= 2 {
        HallOfFameStatus::FirstBallot
    } else if score >= 80 || (champs >= 1 && win_pct >= 0.55) {
        HallOfFameStatus::Eventual
    } else if score >= 65 || champs >= 1 {
        HallOfFameStatus::Borderline
    } else if score >= 50 {
        HallOfFameStatus::Unlikely
    } else {
        HallOfFameStatus::No
    }
}

/// Supporting facts, plus detracting ones when the outlook is poor.
pub fn hall_of_fame_reasons(record: &CareerRecord, status: HallOfFameStatus) -> Vec<String> {
    let mut reasons = Vec::new();

    match record.championships {
        0 => {}
        1 => reasons.push("Won a championship".to_string()),
        n => reasons.push(format!("Won {n} championships")),
    }
    if record.career_win_percentage >= 0.55 {
        reasons.push(format!(
            "{:.1}% career win percentage",
            record.career_win_percentage * 100.0
        ));
    }
    if record.playoff_appearances >= 10 {
        reasons.push(format!("{} playoff appearances", record.playoff_appearances));
    }
    if record.total_seasons >= 15 {
        reasons.push(format!("{} seasons of longevity", record.total_seasons));
    }

    if status.is_unfavorable() {
        if record.times_fired >= 2 {
            reasons.push(format!("Fired {} times", record.times_fired));
        }
        if record.total_seasons > 0 && record.career_win_percentage < 0.5 {
            reasons.push("Sub-.500 career record".to_string());
        }
    }

    reasons
}
