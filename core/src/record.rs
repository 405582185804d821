//! Career data model.
//!
//! Everything here is plain serde data with no cycles, so an external
//! save system can persist it as-is.

use crate::types::{win_percentage, GmId, TeamId, Year};
use serde::{Deserialize, Serialize};

/// Running record of a GM's career. Threaded forward by value:
/// ledger operations return a new record rather than mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub gm_id:                    GmId,
    pub gm_name:                  String,
    pub total_seasons:            u32,
    pub total_wins:               u32,
    pub total_losses:             u32,
    pub total_ties:               u32,
    pub career_win_percentage:    f64,
    pub championships:            u32,
    pub conference_championships: u32,
    pub division_titles:          u32,
    pub playoff_appearances:      u32,
    pub playoff_wins:             u32,
    pub times_fired:              u32,
    pub years_unemployed:         u32,
    /// In-career standing, always within [0, 100].
    pub reputation_score:         i32,
    pub achievements:             Vec<Achievement>,
    pub teams_worked_for:         Vec<TeamTenure>,
    pub season_history:           Vec<SeasonSnapshot>,
}

impl CareerRecord {
    /// The open tenure, if the GM is currently employed.
    pub fn current_tenure(&self) -> Option<&TeamTenure> {
        self.teams_worked_for.iter().find(|t| t.is_open())
    }

    pub fn is_employed(&self) -> bool {
        self.current_tenure().is_some()
    }

    /// Longest tenure by seasons. The earliest one wins ties.
    pub fn longest_tenure(&self) -> Option<&TeamTenure> {
        self.teams_worked_for.iter().fold(None, |best: Option<&TeamTenure>, t| match best {
            Some(b) if b.seasons >= t.seasons => Some(b),
            _ => Some(t),
        })
    }
}

/// A contiguous period with one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTenure {
    pub team_id:                  TeamId,
    pub team_name:                String,
    pub start_year:               Year,
    /// None while the tenure is open.
    pub end_year:                 Option<Year>,
    pub seasons:                  u32,
    pub wins:                     u32,
    pub losses:                   u32,
    pub ties:                     u32,
    pub championships:            u32,
    pub conference_championships: u32,
    pub division_titles:          u32,
    pub playoff_appearances:      u32,
    pub win_percentage:           f64,
    pub was_fired:                bool,
    pub reason_for_departure:     Option<DepartureReason>,
}

impl TeamTenure {
    pub fn open(team_id: TeamId, team_name: String, start_year: Year) -> Self {
        Self {
            team_id,
            team_name,
            start_year,
            end_year: None,
            seasons: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            championships: 0,
            conference_championships: 0,
            division_titles: 0,
            playoff_appearances: 0,
            win_percentage: 0.0,
            was_fired: false,
            reason_for_departure: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_year.is_none()
    }

    /// Fold one season's results into this tenure.
    pub(crate) fn absorb(&mut self, season: &SeasonSnapshot) {
        self.seasons += 1;
        self.wins += season.wins;
        self.losses += season.losses;
        self.ties += season.ties;
        if season.made_playoffs {
            self.playoff_appearances += 1;
        }
        if season.won_division {
            self.division_titles += 1;
        }
        if season.won_conference {
            self.conference_championships += 1;
        }
        if season.won_championship {
            self.championships += 1;
        }
        self.win_percentage = win_percentage(self.wins, self.losses, self.ties);
    }

    pub(crate) fn close(&mut self, year: Year, reason: DepartureReason) {
        self.end_year = Some(year);
        self.was_fired = reason == DepartureReason::Fired;
        self.reason_for_departure = Some(reason);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureReason {
    Fired,
    Resigned,
}

/// A finalized season handed over at season end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub year:             Year,
    pub team_id:          TeamId,
    pub team_name:        String,
    pub wins:             u32,
    pub losses:           u32,
    pub ties:             u32,
    pub made_playoffs:    bool,
    pub playoff_wins:     u32,
    pub won_division:     bool,
    pub won_conference:   bool,
    pub won_championship: bool,
    /// Whether this season ended in the GM being fired.
    pub fired:            bool,
}

impl SeasonSnapshot {
    /// A regular season with no postseason. Builder methods add the rest.
    pub fn new(year: Year, team_id: &str, team_name: &str, wins: u32, losses: u32) -> Self {
        Self {
            year,
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            wins,
            losses,
            ties: 0,
            made_playoffs: false,
            playoff_wins: 0,
            won_division: false,
            won_conference: false,
            won_championship: false,
            fired: false,
        }
    }

    pub fn with_ties(mut self, ties: u32) -> Self {
        self.ties = ties;
        self
    }

    pub fn with_playoffs(mut self, playoff_wins: u32) -> Self {
        self.made_playoffs = true;
        self.playoff_wins = playoff_wins;
        self
    }

    pub fn with_division(mut self) -> Self {
        self.won_division = true;
        self
    }

    /// Conference title implies a playoff berth.
    pub fn with_conference(mut self) -> Self {
        self.won_conference = true;
        self.made_playoffs = true;
        self
    }

    /// Championship implies a conference title and a playoff berth.
    pub fn with_championship(mut self) -> Self {
        self.won_championship = true;
        self.won_conference = true;
        self.made_playoffs = true;
        self
    }

    pub fn ending_in_firing(mut self) -> Self {
        self.fired = true;
        self
    }

    pub fn win_percentage(&self) -> f64 {
        win_percentage(self.wins, self.losses, self.ties)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind:        AchievementKind,
    pub year:        Year,
    pub team_id:     TeamId,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Championship,
    ConferenceTitle,
    DivisionTitle,
}
