//! Highlight extraction tests.

use career_core::{
    highlights::{extract_highlights, HighlightType, Significance},
    ledger::{CareerLedger, FiringSeverity},
    record::{CareerRecord, SeasonSnapshot},
};

fn career(seasons: &[(u32, &str, u32, u32, bool)]) -> CareerRecord {
    let ledger = CareerLedger::default();
    let mut record = ledger.create_career_record("gm-hl", "Dana Reyes");
    for &(year, team, wins, losses, champion) in seasons {
        if record.current_tenure().map(|t| t.team_id.as_str()) != Some(team) {
            if let Some(open) = record.current_tenure() {
                let open_id = open.team_id.clone();
                record = ledger.record_firing(&record, &open_id, year - 1, FiringSeverity::Mild).unwrap();
            }
            record = ledger.start_new_team(&record, team, &team.to_uppercase(), year).unwrap();
        }
        let mut season = SeasonSnapshot::new(year, team, &team.to_uppercase(), wins, losses);
        if champion {
            season = season.with_playoffs(4).with_championship();
        }
        record = ledger.record_season(&record, season).unwrap();
    }
    record
}

#[test]
fn quiet_career_has_no_highlights() {
    let r = career(&[(2010, "bos", 8, 9, false), (2011, "bos", 9, 8, false)]);
    assert!(extract_highlights(&r).is_empty());
}

#[test]
fn each_championship_is_a_major_highlight() {
    let r = career(&[
        (2010, "bos", 13, 4, true),
        (2011, "bos", 9, 8, false),
        (2012, "bos", 14, 3, true),
    ]);
    let hl = extract_highlights(&r);
    let champs: Vec<_> = hl.iter().filter(|h| h.kind == HighlightType::Championship).collect();
    assert_eq!(champs.len(), 2);
    assert!(champs.iter().all(|h| h.significance == Significance::Major));
    assert_eq!(champs[0].year, 2010);
    assert_eq!(champs[1].year, 2012);
}

#[test]
fn turnaround_needs_same_team_and_thresholds() {
    let r = career(&[
        (2010, "bos", 5, 12, false),
        (2011, "bos", 10, 7, false), // turnaround
        (2012, "bos", 4, 13, false),
        (2013, "chi", 11, 6, false), // different team: no turnaround
        (2014, "chi", 6, 11, false),
        (2015, "chi", 12, 5, false), // prev 6 is not < 6
    ]);
    let turns: Vec<_> = extract_highlights(&r)
        .into_iter()
        .filter(|h| h.kind == HighlightType::Turnaround)
        .collect();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].year, 2011);
    assert_eq!(turns[0].significance, Significance::Notable);
    assert!(turns[0].description.contains("5-12 to 10-7"));
}

#[test]
fn longevity_needs_eight_seasons() {
    let seven: Vec<_> = (2010..2017).map(|y| (y, "bos", 8, 9, false)).collect();
    let r = career(&seven);
    assert!(extract_highlights(&r).iter().all(|h| h.kind != HighlightType::Longevity));

    let eight: Vec<_> = (2010..2018).map(|y| (y, "bos", 8, 9, false)).collect();
    let r = career(&eight);
    let hl = extract_highlights(&r);
    assert_eq!(hl.len(), 1);
    assert_eq!(hl[0].kind, HighlightType::Longevity);
    assert_eq!(hl[0].year, 2010);
}

#[test]
fn only_the_single_longest_tenure_counts() {
    let mut seasons: Vec<_> = (2000..2009).map(|y| (y, "bos", 8, 9, false)).collect();
    seasons.extend((2009..2018).map(|y| (y, "chi", 8, 9, false)));
    let r = career(&seasons);
    let longevity: Vec<_> = extract_highlights(&r)
        .into_iter()
        .filter(|h| h.kind == HighlightType::Longevity)
        .collect();
    assert_eq!(longevity.len(), 1);
    assert_eq!(longevity[0].team_id, "bos", "earliest tenure wins ties");
}

#[test]
fn sorted_by_significance_keeping_discovery_order() {
    let mut seasons = vec![(2010, "bos", 4, 13, false), (2011, "bos", 11, 6, false)];
    seasons.extend((2012..2018).map(|y| (y, "bos", 9, 8, false)));
    seasons.push((2018, "bos", 14, 3, true));
    seasons.push((2019, "bos", 13, 4, true));
    let r = career(&seasons);

    let hl = extract_highlights(&r);
    let kinds: Vec<_> = hl.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            HighlightType::Championship,
            HighlightType::Championship,
            HighlightType::Turnaround,
            HighlightType::Longevity,
        ]
    );
    assert_eq!(hl[0].year, 2018);
    assert_eq!(hl[1].year, 2019);
    assert!(hl.windows(2).all(|w| w[0].significance <= w[1].significance));
}
