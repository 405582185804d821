//! Career events: the ordered log the engine reduces over.
//!
//! The off-season orchestrator emits these in real-world order.
//! Variants are only ever appended.

use crate::{
    ledger::FiringSeverity,
    record::SeasonSnapshot,
    retirement::RetirementReason,
    types::{GmId, Seq, TeamId, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CareerEvent {
    TeamStarted {
        team_id:   TeamId,
        team_name: String,
        year:      Year,
    },
    SeasonRecorded {
        season: SeasonSnapshot,
    },
    Fired {
        team_id:  TeamId,
        year:     Year,
        severity: FiringSeverity,
    },
    Resigned {
        team_id: TeamId,
        year:    Year,
    },
    UnemploymentYear,
    Retired {
        year:   Year,
        reason: RetirementReason,
    },
}

impl CareerEvent {
    /// Stable name for the event_type column.
    pub fn type_name(&self) -> &'static str {
        match self {
            CareerEvent::TeamStarted { .. }    => "team_started",
            CareerEvent::SeasonRecorded { .. } => "season_recorded",
            CareerEvent::Fired { .. }          => "fired",
            CareerEvent::Resigned { .. }       => "resigned",
            CareerEvent::UnemploymentYear      => "unemployment_year",
            CareerEvent::Retired { .. }        => "retired",
        }
    }
}

/// A persisted event log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id:         Option<i64>,
    pub gm_id:      GmId,
    pub seq:        Seq,
    pub event_type: String,
    pub payload:    String,
}
