use thiserror::Error;

use crate::types::{TeamId, Year};

#[derive(Error, Debug)]
pub enum CareerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tenure with '{team_id}' is still open; close it before changing teams")]
    TenureAlreadyOpen { team_id: TeamId },

    #[error("No open tenure to record a season against")]
    NoOpenTenure,

    #[error("Season belongs to '{season_team}' but the open tenure is with '{open_team}'")]
    TeamMismatch { open_team: TeamId, season_team: TeamId },

    #[error("No open tenure with team '{team_id}'")]
    NoOpenTenureForTeam { team_id: TeamId },

    #[error("Retirement year {year} is before 2000")]
    InvalidRetirementYear { year: Year },

    #[error("Career already retired in {year}")]
    AlreadyRetired { year: Year },

    #[error("No saved career for GM '{gm_id}'")]
    CareerNotFound { gm_id: String },

    #[error("A career for GM '{gm_id}' is already saved; restore it instead")]
    CareerExists { gm_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CareerResult<T> = Result<T, CareerError>;
