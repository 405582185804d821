//! Narrative text from structured career facts.
//!
//! All text is table-driven and deterministic: each tier maps to exactly
//! one template, each tenure to the first matching fan-memory rule.

use crate::{
    legacy::LegacyTier,
    ledger::format_win_pct,
    record::{CareerRecord, TeamTenure},
    types::{TeamId, Year},
};
use serde::{Deserialize, Serialize};

/// How one franchise remembers the GM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLegacy {
    pub team_id:        TeamId,
    pub team_name:      String,
    pub start_year:     Year,
    pub end_year:       Option<Year>,
    /// "2020-2027" or "2020-present".
    pub tenure:         String,
    /// "W-L", or "W-L-T" when there were ties.
    pub record:         String,
    pub win_percentage: f64,
    pub achievements:   Vec<String>,
    pub fan_memory:     String,
}

/// First matching rule wins.
pub fn fan_memory(tenure: &TeamTenure) -> String {
    let team = &tenure.team_name;
    if tenure.championships > 0 {
        let titles = plural(tenure.championships, "championship", "championships");
        format!(
            "{team} fans will never forget the glory years: {titles} and parades down main street."
        )
    } else if tenure.win_percentage >= 0.6 {
        format!("Remembered in {team} as a golden era of winning football.")
    } else if tenure.was_fired && tenure.win_percentage < 0.4 {
        format!("{team} fans would rather forget this dark period in franchise history.")
    } else if tenure.playoff_appearances >= 3 {
        format!(
            "Consistently competitive in {team} with {} playoff trips, but never quite over the top.",
            tenure.playoff_appearances
        )
    } else if tenure.seasons <= 2 {
        format!("A brief, forgettable stop in {team}.")
    } else {
        format!("A mixed tenure in {team}: flashes of promise, but no lasting breakthrough.")
    }
}

pub fn farewell_statement(record: &CareerRecord, tier: LegacyTier) -> String {
    render(farewell_template(tier), record)
}

pub fn media_reaction(record: &CareerRecord, tier: LegacyTier) -> String {
    render(media_template(tier), record)
}

fn farewell_template(tier: LegacyTier) -> &'static str {
    match tier {
        LegacyTier::HallOfFame => {
            "After {seasons} seasons and {championships}, I leave knowing we built something \
             that will last. Thank you to every player, coach and fan who made it possible."
        }
        LegacyTier::Legendary => {
            "It has been the honor of my life. {seasons} seasons, {championships}, and more \
             memories than I can count."
        }
        LegacyTier::Excellent => {
            "We won a lot of games together over {seasons} seasons. I'm proud of what we built."
        }
        LegacyTier::Good => {
            "I gave this game {seasons} seasons and it gave me far more back. Thank you."
        }
        LegacyTier::Average => {
            "Not every year went the way we hoped, but I always gave it everything I had."
        }
        LegacyTier::Forgettable => {
            "It's time to step away. I wish the next generation of front offices the best."
        }
        LegacyTier::Poor => {
            "I know the results weren't there. I take responsibility, and I'm grateful for \
             the chance."
        }
    }
}

fn media_template(tier: LegacyTier) -> &'static str {
    match tier {
        LegacyTier::HallOfFame => {
            "{name} retires as one of the greatest executives in league history. \
             A {record} record and {championships} tell the story."
        }
        LegacyTier::Legendary => {
            "Around the league, {name} is being remembered as a franchise-changer. \
             {championships} and a {record} record over {seasons} seasons."
        }
        LegacyTier::Excellent => {
            "{name} walks away with a {record} record and the respect of peers across the league."
        }
        LegacyTier::Good => {
            "{name} retires with a solid {record} record after {seasons} seasons in the league."
        }
        LegacyTier::Average => {
            "{name} retires after {seasons} seasons. The {record} record reflects a career \
             of ups and downs."
        }
        LegacyTier::Forgettable => {
            "{name} quietly announced a retirement today, closing a {seasons}-season career."
        }
        LegacyTier::Poor => {
            "{name} retires with a {record} record. Few around the league will miss the results."
        }
    }
}

/// Single pass over the template; substituted text is never rescanned.
fn render(template: &str, record: &CareerRecord) -> String {
    let mut out = String::with_capacity(template.len() + record.gm_name.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        match &tail[1..close] {
            "name"          => out.push_str(&record.gm_name),
            "seasons"       => out.push_str(&record.total_seasons.to_string()),
            "championships" => {
                out.push_str(&plural(record.championships, "championship", "championships"))
            }
            "record" => out.push_str(&win_loss(
                record.total_wins,
                record.total_losses,
                record.total_ties,
            )),
            _ => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

pub fn team_legacies(record: &CareerRecord) -> Vec<TeamLegacy> {
    record.teams_worked_for.iter().map(team_legacy).collect()
}

fn team_legacy(t: &TeamTenure) -> TeamLegacy {
    let mut achievements = Vec::new();
    if t.championships > 0 {
        achievements.push(plural(t.championships, "Championship", "Championships"));
    }
    if t.conference_championships > 0 {
        achievements.push(plural(t.conference_championships, "Conference Title", "Conference Titles"));
    }
    if t.division_titles > 0 {
        achievements.push(plural(t.division_titles, "Division Title", "Division Titles"));
    }
    if t.playoff_appearances > 0 {
        achievements.push(plural(t.playoff_appearances, "Playoff Appearance", "Playoff Appearances"));
    }

    let tenure = match t.end_year {
        Some(end) => format!("{}-{end}", t.start_year),
        None      => format!("{}-present", t.start_year),
    };

    TeamLegacy {
        team_id: t.team_id.clone(),
        team_name: t.team_name.clone(),
        start_year: t.start_year,
        end_year: t.end_year,
        tenure,
        record: win_loss(t.wins, t.losses, t.ties),
        win_percentage: t.win_percentage,
        achievements,
        fan_memory: fan_memory(t),
    }
}

pub(crate) fn win_loss(wins: u32, losses: u32, ties: u32) -> String {
    if ties > 0 {
        format!("{wins}-{losses}-{ties}")
    } else {
        format!("{wins}-{losses}")
    }
}

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Team name, record and win percentage, for compact tenure listings.
pub fn tenure_caption(t: &TeamTenure) -> String {
    format!(
        "{} ({}, {})",
        t.team_name,
        win_loss(t.wins, t.losses, t.ties),
        format_win_pct(t.win_percentage)
    )
}
