//! Retirement: the one-way Active → Retired transition.
//!
//! `initiate_retirement` projects the final record through the scorer,
//! tier classifier, highlight extractor and narrative generator into a
//! single immutable `CareerSummary`. There is no way back.

use crate::{
    error::{CareerError, CareerResult},
    hall_of_fame::{calculate_hall_of_fame_status, hall_of_fame_reasons, HallOfFameStatus},
    highlights::{extract_highlights, CareerHighlight},
    legacy::{calculate_legacy_score, LegacyTier},
    narrative::{farewell_statement, media_reaction, team_legacies, TeamLegacy},
    record::CareerRecord,
    types::{win_percentage, TeamId, Year},
};
use serde::{Deserialize, Serialize};

/// Earliest year a retirement may be recorded in.
pub const MIN_RETIREMENT_YEAR: Year = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementReason {
    Voluntary,
    Forced,
    Health,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenureLength {
    pub team_id:   TeamId,
    pub team_name: String,
    pub seasons:   u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSeason {
    pub year:             Year,
    pub team_name:        String,
    pub wins:             u32,
    pub losses:           u32,
    pub ties:             u32,
    pub playoff_wins:     u32,
    pub won_championship: bool,
}

/// Aggregate roll-up of the whole career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalCareerStats {
    pub total_wins:               u32,
    pub total_losses:             u32,
    pub total_ties:               u32,
    pub win_percentage:           f64,
    pub championships:            u32,
    pub conference_championships: u32,
    pub division_titles:          u32,
    pub playoff_appearances:      u32,
    pub playoff_wins:             u32,
    pub playoff_losses:           u32,
    pub playoff_win_percentage:   f64,
    pub teams_count:              u32,
    pub times_fired:              u32,
    pub years_unemployed:         u32,
    pub longest_tenure:           Option<TenureLength>,
    pub best_season:              Option<BestSeason>,
}

impl FinalCareerStats {
    pub fn from_record(record: &CareerRecord) -> Self {
        let history = &record.season_history;

        let playoff_wins = record.playoff_wins;
        // Every playoff run ends in a loss unless it ends with the title.
        let playoff_losses = history
            .iter()
            .filter(|s| s.made_playoffs && !s.won_championship)
            .count() as u32;
        let playoff_win_percentage = win_percentage(playoff_wins, playoff_losses, 0);

        let longest_tenure = record.longest_tenure().map(|t| TenureLength {
            team_id: t.team_id.clone(),
            team_name: t.team_name.clone(),
            seasons: t.seasons,
        });

        // Most wins, then deeper playoff run, then the earlier year.
        let best_season = history
            .iter()
            .reduce(|best, s| {
                if (s.wins, s.playoff_wins) > (best.wins, best.playoff_wins) {
                    s
                } else {
                    best
                }
            })
            .map(|s| BestSeason {
                year: s.year,
                team_name: s.team_name.clone(),
                wins: s.wins,
                losses: s.losses,
                ties: s.ties,
                playoff_wins: s.playoff_wins,
                won_championship: s.won_championship,
            });

        Self {
            total_wins: record.total_wins,
            total_losses: record.total_losses,
            total_ties: record.total_ties,
            win_percentage: record.career_win_percentage,
            championships: record.championships,
            conference_championships: record.conference_championships,
            division_titles: record.division_titles,
            playoff_appearances: record.playoff_appearances,
            playoff_wins,
            playoff_losses,
            playoff_win_percentage,
            teams_count: record.teams_worked_for.len() as u32,
            times_fired: record.times_fired,
            years_unemployed: record.years_unemployed,
            longest_tenure,
            best_season,
        }
    }
}

/// Immutable retrospective produced once, at retirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    pub gm_name:              String,
    pub retirement_year:      Year,
    pub total_seasons:        u32,
    pub final_stats:          FinalCareerStats,
    pub legacy_tier:          LegacyTier,
    pub legacy_score:         i32,
    pub legacy_description:   String,
    pub hall_of_fame_status:  HallOfFameStatus,
    pub hall_of_fame_reasons: Vec<String>,
    pub highlights:           Vec<CareerHighlight>,
    pub team_legacies:        Vec<TeamLegacy>,
    pub farewell_statement:   String,
    pub media_reaction:       String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetirementState {
    pub is_retired:        bool,
    pub retirement_year:   Option<Year>,
    pub retirement_reason: Option<RetirementReason>,
    pub career_summary:    Option<CareerSummary>,
}

impl RetirementState {
    /// An active career: nothing populated.
    pub fn active() -> Self {
        Self::default()
    }
}

pub fn build_career_summary(record: &CareerRecord, year: Year) -> CareerSummary {
    let legacy_score = calculate_legacy_score(record);
    let legacy_tier = LegacyTier::from_score(legacy_score);
    let hall_of_fame_status = calculate_hall_of_fame_status(record, legacy_score);

    CareerSummary {
        gm_name: record.gm_name.clone(),
        retirement_year: year,
        total_seasons: record.total_seasons,
        final_stats: FinalCareerStats::from_record(record),
        legacy_tier,
        legacy_score,
        legacy_description: legacy_tier.description().to_string(),
        hall_of_fame_status,
        hall_of_fame_reasons: hall_of_fame_reasons(record, hall_of_fame_status),
        highlights: extract_highlights(record),
        team_legacies: team_legacies(record),
        farewell_statement: farewell_statement(record, legacy_tier),
        media_reaction: media_reaction(record, legacy_tier),
    }
}

pub fn initiate_retirement(
    record: &CareerRecord,
    year: Year,
    reason: RetirementReason,
) -> CareerResult<RetirementState> {
    if year < MIN_RETIREMENT_YEAR {
        return Err(CareerError::InvalidRetirementYear { year });
    }

    let summary = build_career_summary(record, year);
    log::info!(
        "gm={} retired in {year} ({reason:?}): legacy {} ({:?}), hall of fame {:?}",
        record.gm_id, summary.legacy_score, summary.legacy_tier, summary.hall_of_fame_status
    );

    Ok(RetirementState {
        is_retired: true,
        retirement_year: Some(year),
        retirement_reason: Some(reason),
        career_summary: Some(summary),
    })
}

pub fn validate_retirement_state(state: &RetirementState) -> bool {
    if !state.is_retired {
        return state.retirement_year.is_none()
            && state.retirement_reason.is_none()
            && state.career_summary.is_none();
    }

    match (&state.retirement_year, &state.retirement_reason, &state.career_summary) {
        (Some(year), Some(_), Some(summary)) => {
            *year >= MIN_RETIREMENT_YEAR
                && summary.retirement_year == *year
                && (0..=100).contains(&summary.legacy_score)
                && summary.legacy_tier == LegacyTier::from_score(summary.legacy_score)
        }
        _ => false,
    }
}
