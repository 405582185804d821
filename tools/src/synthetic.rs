//! Seeded synthetic careers for demos and smoke runs.
//!
//! Stands in for the season simulator: same seed, same career.

use career_core::{
    event::CareerEvent,
    ledger::FiringSeverity,
    record::SeasonSnapshot,
    retirement::RetirementReason,
    types::Year,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

const GAMES_PER_SEASON: u32 = 17;

const FRANCHISES: &[(&str, &str)] = &[
    ("bos", "Boston Harbormen"),
    ("chi", "Chicago Ironworks"),
    ("den", "Denver Peaks"),
    ("hou", "Houston Comets"),
    ("mia", "Miami Tides"),
    ("sea", "Seattle Evergreens"),
    ("stl", "St. Louis Arches"),
    ("pdx", "Portland Timbers"),
];

pub struct SyntheticCareer {
    rng:   Pcg64Mcg,
    year:  Year,
    /// Roster strength in [0, 1]; drifts season to season.
    strength: f64,
}

impl SyntheticCareer {
    pub fn new(seed: u64, start_year: Year) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            year: start_year,
            strength: 0.35,
        }
    }

    /// Generate `seasons` worked seasons, ending in a retirement event.
    pub fn generate(mut self, seasons: u32) -> Vec<CareerEvent> {
        let mut events = Vec::new();
        let mut worked = 0;

        while worked < seasons {
            let (team_id, team_name) = FRANCHISES[self.rng.gen_range(0..FRANCHISES.len())];
            events.push(CareerEvent::TeamStarted {
                team_id: team_id.to_string(),
                team_name: team_name.to_string(),
                year: self.year,
            });
            self.strength = self.rng.gen_range(0.2..0.5);

            let mut losing_streak = 0;
            loop {
                let season = self.play_season(team_id, team_name);
                worked += 1;
                losing_streak = if season.wins < 7 { losing_streak + 1 } else { 0 };

                let fired = losing_streak >= 2 && self.rng.gen_bool(0.7);
                let last = worked == seasons;
                let resign = !fired && !last && self.rng.gen_bool(0.05);
                let season = if fired { season.ending_in_firing() } else { season };
                events.push(CareerEvent::SeasonRecorded { season });

                if fired {
                    let severity = if losing_streak >= 3 {
                        FiringSeverity::Severe
                    } else {
                        FiringSeverity::Standard
                    };
                    events.push(CareerEvent::Fired {
                        team_id: team_id.to_string(),
                        year: self.year,
                        severity,
                    });
                } else if resign || last {
                    events.push(CareerEvent::Resigned {
                        team_id: team_id.to_string(),
                        year: self.year,
                    });
                }

                self.year += 1;
                if fired || resign || last {
                    break;
                }
            }

            if worked < seasons && self.rng.gen_bool(0.4) {
                events.push(CareerEvent::UnemploymentYear);
                self.year += 1;
            }
        }

        events.push(CareerEvent::Retired {
            year: self.year.max(2000),
            reason: RetirementReason::Voluntary,
        });
        events
    }

    fn play_season(&mut self, team_id: &str, team_name: &str) -> SeasonSnapshot {
        self.strength = (self.strength + self.rng.gen_range(-0.15..0.2)).clamp(0.05, 0.95);

        let mut wins = 0;
        let mut ties = 0;
        for _ in 0..GAMES_PER_SEASON {
            let roll: f64 = self.rng.gen();
            if roll < 0.01 {
                ties += 1;
            } else if roll < 0.01 + 0.25 + 0.5 * self.strength {
                wins += 1;
            }
        }
        let losses = GAMES_PER_SEASON - wins - ties;
        let mut season = SeasonSnapshot::new(self.year, team_id, team_name, wins, losses).with_ties(ties);

        if wins >= 10 {
            let playoff_wins = self.playoff_run();
            season = season.with_playoffs(playoff_wins);
            if wins >= 12 {
                season = season.with_division();
            }
            if playoff_wins >= 3 {
                season = season.with_conference();
            }
            if playoff_wins >= 4 {
                season = season.with_championship();
            }
        }
        season
    }

    /// Rounds won before elimination, four to take the title.
    fn playoff_run(&mut self) -> u32 {
        let mut won = 0;
        while won < 4 && self.rng.gen_bool(0.35 + 0.3 * self.strength) {
            won += 1;
        }
        won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_career() {
        let a = SyntheticCareer::new(7, 2010).generate(12);
        let b = SyntheticCareer::new(7, 2010).generate(12);
        assert_eq!(a, b);
    }

    #[test]
    fn generates_requested_seasons_then_retires() {
        let events = SyntheticCareer::new(99, 2005).generate(20);
        let seasons = events
            .iter()
            .filter(|e| matches!(e, CareerEvent::SeasonRecorded { .. }))
            .count();
        assert_eq!(seasons, 20);
        assert!(matches!(events.last(), Some(CareerEvent::Retired { .. })));
    }
}
