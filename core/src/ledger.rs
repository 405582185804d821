//! Career ledger: accumulates a GM's career event by event.
//!
//! Every operation takes the current record by reference and returns a
//! new record. Callers thread the result forward:
//!
//! ```ignore
//! record = ledger.record_season(&record, snapshot)?;
//! ```
//!
//! Events must be applied in real-world order. Season results are
//! attributed to whichever tenure is open at the time.

use crate::{
    config::ReputationConfig,
    error::{CareerError, CareerResult},
    record::{
        Achievement, AchievementKind, CareerRecord, DepartureReason, SeasonSnapshot, TeamTenure,
    },
    types::{win_percentage, Year},
};
use serde::{Deserialize, Serialize};

/// How badly a firing reflects on the GM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiringSeverity {
    Mild,
    Standard,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationTier {
    None,
    Low,
    Moderate,
    High,
    Elite,
}

/// Fixed-threshold classification of a reputation score.
pub fn reputation_tier(score: i32) -> ReputationTier {
    match score {
        s if s >= 90 => ReputationTier::Elite,
        s if s >= 75 => ReputationTier::High,
        s if s >= 55 => ReputationTier::Moderate,
        s if s >= 35 => ReputationTier::Low,
        _            => ReputationTier::None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CareerLedger {
    config: ReputationConfig,
}

impl CareerLedger {
    pub fn new(config: ReputationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReputationConfig {
        &self.config
    }

    /// A zeroed record at the neutral starting reputation.
    pub fn create_career_record(&self, gm_id: &str, gm_name: &str) -> CareerRecord {
        CareerRecord {
            gm_id: gm_id.to_string(),
            gm_name: gm_name.to_string(),
            total_seasons: 0,
            total_wins: 0,
            total_losses: 0,
            total_ties: 0,
            career_win_percentage: 0.0,
            championships: 0,
            conference_championships: 0,
            division_titles: 0,
            playoff_appearances: 0,
            playoff_wins: 0,
            times_fired: 0,
            years_unemployed: 0,
            reputation_score: self.config.initial_score.clamp(0, 100),
            achievements: Vec::new(),
            teams_worked_for: Vec::new(),
            season_history: Vec::new(),
        }
    }

    /// Open a tenure with a new team. The previous tenure must be closed.
    pub fn start_new_team(
        &self,
        record: &CareerRecord,
        team_id: &str,
        team_name: &str,
        year: Year,
    ) -> CareerResult<CareerRecord> {
        if let Some(open) = record.current_tenure() {
            return Err(CareerError::TenureAlreadyOpen { team_id: open.team_id.clone() });
        }

        let mut next = record.clone();
        next.teams_worked_for
            .push(TeamTenure::open(team_id.to_string(), team_name.to_string(), year));
        next.years_unemployed = 0;

        log::info!("gm={} hired by {team_name} ({team_id}) for {year}", record.gm_id);
        Ok(next)
    }

    /// Fold a finalized season into the record and the open tenure.
    pub fn record_season(
        &self,
        record: &CareerRecord,
        season: SeasonSnapshot,
    ) -> CareerResult<CareerRecord> {
        let open_idx = record
            .teams_worked_for
            .iter()
            .position(TeamTenure::is_open)
            .ok_or(CareerError::NoOpenTenure)?;
        let open_team = &record.teams_worked_for[open_idx].team_id;
        if *open_team != season.team_id {
            return Err(CareerError::TeamMismatch {
                open_team: open_team.clone(),
                season_team: season.team_id.clone(),
            });
        }

        let mut next = record.clone();
        next.teams_worked_for[open_idx].absorb(&season);

        next.total_seasons += 1;
        next.total_wins += season.wins;
        next.total_losses += season.losses;
        next.total_ties += season.ties;
        next.career_win_percentage =
            win_percentage(next.total_wins, next.total_losses, next.total_ties);
        if season.made_playoffs {
            next.playoff_appearances += 1;
            next.playoff_wins += season.playoff_wins;
        }
        if season.won_division {
            next.division_titles += 1;
            next.achievements.push(achievement(
                AchievementKind::DivisionTitle,
                &season,
                format!("{} division title with the {}", season.year, season.team_name),
            ));
        }
        if season.won_conference {
            next.conference_championships += 1;
            next.achievements.push(achievement(
                AchievementKind::ConferenceTitle,
                &season,
                format!("{} conference title with the {}", season.year, season.team_name),
            ));
        }
        if season.won_championship {
            next.championships += 1;
            next.achievements.push(achievement(
                AchievementKind::Championship,
                &season,
                format!("Won the {} championship with the {}", season.year, season.team_name),
            ));
        }

        let delta = self.season_delta(&season);
        let prev = record.reputation_score;
        next.reputation_score = (prev + delta).clamp(0, 100);

        if delta <= -self.config.warn_drop_threshold {
            log::warn!(
                "gm={} year={} {}-{}: reputation {prev} -> {} ({delta:+})",
                record.gm_id, season.year, season.wins, season.losses, next.reputation_score
            );
        } else {
            log::debug!(
                "gm={} year={} {}-{}: reputation {prev} -> {} ({delta:+})",
                record.gm_id, season.year, season.wins, season.losses, next.reputation_score
            );
        }

        next.season_history.push(season);
        Ok(next)
    }

    /// Close the open tenure with `team_id` as a firing.
    pub fn record_firing(
        &self,
        record: &CareerRecord,
        team_id: &str,
        year: Year,
        severity: FiringSeverity,
    ) -> CareerResult<CareerRecord> {
        let mut next = self.close_tenure(record, team_id, year, DepartureReason::Fired)?;
        next.times_fired += 1;

        let penalty = match severity {
            FiringSeverity::Mild     => self.config.firing_penalty_mild,
            FiringSeverity::Standard => self.config.firing_penalty_standard,
            FiringSeverity::Severe   => self.config.firing_penalty_severe,
        };
        next.reputation_score = (record.reputation_score - penalty).clamp(0, 100);

        log::warn!(
            "gm={} fired by {team_id} in {year} ({severity:?}): reputation {} -> {}",
            record.gm_id, record.reputation_score, next.reputation_score
        );
        Ok(next)
    }

    /// Close the open tenure with `team_id` voluntarily. No penalty.
    pub fn record_resignation(
        &self,
        record: &CareerRecord,
        team_id: &str,
        year: Year,
    ) -> CareerResult<CareerRecord> {
        let next = self.close_tenure(record, team_id, year, DepartureReason::Resigned)?;
        log::info!("gm={} resigned from {team_id} in {year}", record.gm_id);
        Ok(next)
    }

    /// A season spent out of work. Does not count as a season.
    pub fn record_unemployment_year(&self, record: &CareerRecord) -> CareerResult<CareerRecord> {
        if let Some(open) = record.current_tenure() {
            return Err(CareerError::TenureAlreadyOpen { team_id: open.team_id.clone() });
        }

        let mut next = record.clone();
        next.years_unemployed += 1;
        next.reputation_score = (record.reputation_score - self.config.unemployment_decay).clamp(0, 100);

        log::debug!(
            "gm={} unemployed ({} year(s)): reputation {} -> {}",
            record.gm_id, next.years_unemployed, record.reputation_score, next.reputation_score
        );
        Ok(next)
    }

    fn close_tenure(
        &self,
        record: &CareerRecord,
        team_id: &str,
        year: Year,
        reason: DepartureReason,
    ) -> CareerResult<CareerRecord> {
        let idx = record
            .teams_worked_for
            .iter()
            .position(|t| t.is_open() && t.team_id == team_id)
            .ok_or_else(|| CareerError::NoOpenTenureForTeam { team_id: team_id.to_string() })?;

        let mut next = record.clone();
        next.teams_worked_for[idx].close(year, reason);
        Ok(next)
    }

    /// Reputation change earned by one season, before clamping.
    fn season_delta(&self, season: &SeasonSnapshot) -> i32 {
        let c = &self.config;
        let mut delta = ((season.win_percentage() - 0.5) * c.win_pct_weight).round() as i32;
        if season.made_playoffs {
            delta += c.playoff_bonus;
        }
        if season.won_division {
            delta += c.division_bonus;
        }
        if season.won_conference {
            delta += c.conference_bonus;
        }
        if season.won_championship {
            delta += c.championship_bonus;
        }
        delta
    }
}

fn achievement(kind: AchievementKind, season: &SeasonSnapshot, description: String) -> Achievement {
    Achievement {
        kind,
        year: season.year,
        team_id: season.team_id.clone(),
        description,
    }
}

/// The open tenure, or None when the GM is between jobs.
pub fn current_tenure(record: &CareerRecord) -> Option<&TeamTenure> {
    record.current_tenure()
}

/// Structural check: counters consistent with history, scores in range.
/// Never panics.
pub fn validate_career_record(record: &CareerRecord) -> bool {
    if !(0..=100).contains(&record.reputation_score) {
        return false;
    }

    let history = &record.season_history;
    if record.total_seasons as usize != history.len() {
        return false;
    }

    let tenure_seasons: u64 = record.teams_worked_for.iter().map(|t| t.seasons as u64).sum();
    if tenure_seasons != record.total_seasons as u64 {
        return false;
    }

    let consistent = sum(history, |s| s.wins) == record.total_wins as u64
        && sum(history, |s| s.losses) == record.total_losses as u64
        && sum(history, |s| s.ties) == record.total_ties as u64
        && count(history, |s| s.made_playoffs) == record.playoff_appearances as u64
        && count(history, |s| s.won_division) == record.division_titles as u64
        && count(history, |s| s.won_conference) == record.conference_championships as u64
        && count(history, |s| s.won_championship) == record.championships as u64
        && same_pct(
            record.career_win_percentage,
            win_percentage(record.total_wins, record.total_losses, record.total_ties),
        );
    if !consistent {
        return false;
    }

    // Tenures own consecutive runs of the history, in order.
    let mut offset = 0;
    for t in &record.teams_worked_for {
        let end = offset + t.seasons as usize;
        let Some(seasons) = history.get(offset..end) else {
            return false;
        };
        offset = end;

        let consistent = seasons.iter().all(|s| s.team_id == t.team_id)
            && sum(seasons, |s| s.wins) == t.wins as u64
            && sum(seasons, |s| s.losses) == t.losses as u64
            && sum(seasons, |s| s.ties) == t.ties as u64
            && count(seasons, |s| s.made_playoffs) == t.playoff_appearances as u64
            && count(seasons, |s| s.won_division) == t.division_titles as u64
            && count(seasons, |s| s.won_conference) == t.conference_championships as u64
            && count(seasons, |s| s.won_championship) == t.championships as u64
            && same_pct(t.win_percentage, win_percentage(t.wins, t.losses, t.ties));
        if !consistent {
            return false;
        }
    }

    let open = record.teams_worked_for.iter().filter(|t| t.is_open()).count();
    if open > 1 {
        return false;
    }

    let fired = record
        .teams_worked_for
        .iter()
        .filter(|t| t.reason_for_departure == Some(DepartureReason::Fired))
        .count() as u32;
    if fired != record.times_fired {
        return false;
    }

    record.teams_worked_for.iter().all(|t| {
        let closed_ok = t.is_open() == t.reason_for_departure.is_none();
        let range_ok = t.end_year.map_or(true, |end| end >= t.start_year);
        closed_ok && range_ok
    })
}

fn sum(seasons: &[SeasonSnapshot], f: fn(&SeasonSnapshot) -> u32) -> u64 {
    seasons.iter().map(|s| f(s) as u64).sum()
}

fn count(seasons: &[SeasonSnapshot], f: fn(&SeasonSnapshot) -> bool) -> u64 {
    seasons.iter().filter(|s| f(s)).count() as u64
}

fn same_pct(stored: f64, computed: f64) -> bool {
    (stored - computed).abs() < 1e-9
}

/// One-line career recap for quick display.
pub fn career_summary_line(record: &CareerRecord) -> String {
    let titles = match record.championships {
        1 => "1 championship".to_string(),
        n => format!("{n} championships"),
    };
    let seasons = match record.total_seasons {
        1 => "1 season".to_string(),
        n => format!("{n} seasons"),
    };
    let wl = if record.total_ties > 0 {
        format!("{}-{}-{}", record.total_wins, record.total_losses, record.total_ties)
    } else {
        format!("{}-{}", record.total_wins, record.total_losses)
    };
    format!(
        "{seasons}, {titles}, {wl} ({})",
        format_win_pct(record.career_win_percentage)
    )
}

/// ".625"-style win percentage; a perfect record prints "1.000".
pub(crate) fn format_win_pct(pct: f64) -> String {
    let s = format!("{pct:.3}");
    s.strip_prefix('0').map(str::to_string).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_pct_format_drops_leading_zero() {
        assert_eq!(format_win_pct(0.625), ".625");
        assert_eq!(format_win_pct(0.0), ".000");
        assert_eq!(format_win_pct(1.0), "1.000");
    }

    #[test]
    fn season_delta_rewards_titles() {
        let ledger = CareerLedger::default();
        let bad = SeasonSnapshot::new(2020, "t", "T", 3, 14);
        let great = SeasonSnapshot::new(2020, "t", "T", 14, 3).with_division().with_championship();
        assert!(ledger.season_delta(&bad) < 0);
        assert!(ledger.season_delta(&great) > 15);
    }
}
