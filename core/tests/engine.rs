//! Career engine tests.
//!
//! Tests cover: ordered replay, the one-way retirement transition,
//! persistence of events and snapshots, restore from a save, and
//! all-or-nothing writes.

use career_core::{
    engine::CareerEngine,
    error::CareerError,
    event::{CareerEvent, EventLogEntry},
    ledger::{CareerLedger, FiringSeverity},
    legacy::LegacyTier,
    record::SeasonSnapshot,
    retirement::{validate_retirement_state, RetirementReason},
    store::CareerStore,
};

fn store() -> CareerStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = CareerStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn temp_db(tag: &str) -> String {
    let path = std::env::temp_dir().join(format!("career-{tag}-{}.db", std::process::id()));
    let path = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);
    path
}

fn season(year: u32, team: &str, wins: u32, losses: u32) -> CareerEvent {
    CareerEvent::SeasonRecorded {
        season: SeasonSnapshot::new(year, team, &team.to_uppercase(), wins, losses),
    }
}

fn hire(team: &str, year: u32) -> CareerEvent {
    CareerEvent::TeamStarted {
        team_id: team.to_string(),
        team_name: team.to_uppercase(),
        year,
    }
}

fn short_career() -> Vec<CareerEvent> {
    vec![
        hire("mia", 2015),
        season(2015, "mia", 6, 11),
        season(2016, "mia", 11, 6),
        CareerEvent::SeasonRecorded {
            season: SeasonSnapshot::new(2017, "mia", "MIA", 13, 4).with_division().with_playoffs(4).with_championship(),
        },
        CareerEvent::Resigned { team_id: "mia".into(), year: 2017 },
        CareerEvent::UnemploymentYear,
        hire("stl", 2019),
        season(2019, "stl", 3, 14),
        CareerEvent::Fired { team_id: "stl".into(), year: 2019, severity: FiringSeverity::Severe },
    ]
}

#[test]
fn replay_matches_direct_ledger_calls() {
    let ledger = CareerLedger::default();
    let mut engine = CareerEngine::new("gm-e", "Alex Moreau", ledger.clone());
    engine.apply_all(short_career()).unwrap();

    let mut r = ledger.create_career_record("gm-e", "Alex Moreau");
    r = ledger.start_new_team(&r, "mia", "MIA", 2015).unwrap();
    r = ledger.record_season(&r, SeasonSnapshot::new(2015, "mia", "MIA", 6, 11)).unwrap();
    r = ledger.record_season(&r, SeasonSnapshot::new(2016, "mia", "MIA", 11, 6)).unwrap();
    r = ledger
        .record_season(&r, SeasonSnapshot::new(2017, "mia", "MIA", 13, 4).with_division().with_playoffs(4).with_championship())
        .unwrap();
    r = ledger.record_resignation(&r, "mia", 2017).unwrap();
    r = ledger.record_unemployment_year(&r).unwrap();
    r = ledger.start_new_team(&r, "stl", "STL", 2019).unwrap();
    r = ledger.record_season(&r, SeasonSnapshot::new(2019, "stl", "STL", 3, 14)).unwrap();
    r = ledger.record_firing(&r, "stl", 2019, FiringSeverity::Severe).unwrap();

    assert_eq!(engine.record(), &r);
    assert_eq!(engine.seq(), 9);
    assert!(!engine.is_retired());
}

#[test]
fn retirement_is_one_way() {
    let mut engine = CareerEngine::new("gm-e", "Alex Moreau", CareerLedger::default());
    engine.apply_all(short_career()).unwrap();
    engine
        .apply(CareerEvent::Retired { year: 2020, reason: RetirementReason::Voluntary })
        .unwrap();
    assert!(engine.is_retired());
    assert!(validate_retirement_state(engine.retirement()));

    let seq = engine.seq();
    let err = engine.apply(hire("bos", 2021)).unwrap_err();
    assert!(matches!(err, CareerError::AlreadyRetired { year: 2020 }));
    let err = engine
        .apply(CareerEvent::Retired { year: 2022, reason: RetirementReason::Health })
        .unwrap_err();
    assert!(matches!(err, CareerError::AlreadyRetired { .. }));

    assert_eq!(engine.seq(), seq);
    assert_eq!(engine.retirement().retirement_year, Some(2020));
}

#[test]
fn rejected_event_changes_nothing() {
    let mut engine = CareerEngine::new("gm-e", "Alex Moreau", CareerLedger::default());
    engine.apply(hire("mia", 2015)).unwrap();
    let before = engine.record().clone();

    assert!(engine.apply(hire("bos", 2016)).is_err());
    assert!(engine.apply(season(2016, "bos", 9, 8)).is_err());
    assert!(engine
        .apply(CareerEvent::Retired { year: 1990, reason: RetirementReason::Forced })
        .is_err());

    assert_eq!(engine.record(), &before);
    assert_eq!(engine.seq(), 1);
    assert!(!engine.is_retired());
}

#[test]
fn events_and_snapshots_are_persisted() {
    let mut engine =
        CareerEngine::with_store("gm-p", "Alex Moreau", CareerLedger::default(), store()).unwrap();
    engine.apply_all(short_career()).unwrap();
    engine
        .apply(CareerEvent::Retired { year: 2020, reason: RetirementReason::Voluntary })
        .unwrap();

    let store = engine.store().unwrap();
    assert_eq!(store.event_count("gm-p").unwrap(), 10);
    // seq 5, then seq 10 (interval and retirement coincide).
    assert_eq!(store.snapshot_count("gm-p").unwrap(), 2);

    let summary = store.load_retirement_summary("gm-p").unwrap().expect("summary saved");
    let expected = engine.retirement().career_summary.as_ref().unwrap();
    assert_eq!(summary.legacy_score, expected.legacy_score);
    assert_eq!(summary.legacy_tier, expected.legacy_tier);
    assert_eq!(summary.team_legacies.len(), 2);
}

#[test]
fn event_log_preserves_order() {
    let mut engine =
        CareerEngine::with_store("gm-o", "Alex Moreau", CareerLedger::default(), store()).unwrap();
    engine.apply_all(short_career()).unwrap();

    let entries = engine.store().unwrap().events_after("gm-o", 0).unwrap();
    let seqs: Vec<_> = entries.iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (1..=9).collect::<Vec<_>>());
    assert_eq!(entries[0].event_type, "team_started");
    assert_eq!(entries[5].event_type, "unemployment_year");
    assert_eq!(entries[8].event_type, "fired");
}

#[test]
fn restore_resumes_from_snapshot_and_tail() {
    let path = temp_db("restore");

    let original = {
        let store = CareerStore::open(&path).unwrap();
        store.migrate().unwrap();
        let mut engine =
            CareerEngine::with_store("gm-r", "Alex Moreau", CareerLedger::default(), store).unwrap();
        // 9 events: snapshot at seq 5, events 6..=9 in the tail.
        engine.apply_all(short_career()).unwrap();
        engine.record().clone()
    };

    let store = CareerStore::open(&path).unwrap();
    let mut restored = CareerEngine::restore("gm-r", CareerLedger::default(), store).unwrap();
    assert_eq!(restored.seq(), 9);
    assert_eq!(restored.record().gm_name, "Alex Moreau");
    assert_eq!(restored.record().total_seasons, original.total_seasons);
    assert_eq!(restored.record().total_wins, original.total_wins);
    assert_eq!(restored.record().times_fired, original.times_fired);
    assert_eq!(restored.record().reputation_score, original.reputation_score);
    assert_eq!(restored.record().teams_worked_for.len(), 2);

    restored
        .apply(CareerEvent::Retired { year: 2020, reason: RetirementReason::Voluntary })
        .unwrap();
    assert_eq!(restored.seq(), 10);
    assert!(validate_retirement_state(restored.retirement()));
    let summary = restored.retirement().career_summary.as_ref().unwrap();
    assert_eq!(summary.legacy_tier, LegacyTier::from_score(summary.legacy_score));

    drop(restored);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn restore_unknown_career_fails() {
    let err = CareerEngine::restore("nobody", CareerLedger::default(), store()).err().unwrap();
    assert!(matches!(err, CareerError::CareerNotFound { .. }));
}

#[test]
fn with_store_refuses_existing_career() {
    let path = temp_db("exists");
    {
        let store = CareerStore::open(&path).unwrap();
        store.migrate().unwrap();
        let mut engine =
            CareerEngine::with_store("gm-x", "Alex Moreau", CareerLedger::default(), store).unwrap();
        engine.apply(hire("mia", 2015)).unwrap();
    }

    let store = CareerStore::open(&path).unwrap();
    let err = CareerEngine::with_store("gm-x", "Someone Else", CareerLedger::default(), store)
        .err()
        .unwrap();
    assert!(matches!(err, CareerError::CareerExists { .. }));

    let store = CareerStore::open(&path).unwrap();
    assert_eq!(store.career_name("gm-x").unwrap().as_deref(), Some("Alex Moreau"));
    assert_eq!(store.event_count("gm-x").unwrap(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_write_leaves_engine_unchanged() {
    let path = temp_db("write-fail");
    let store = CareerStore::open(&path).unwrap();
    store.migrate().unwrap();
    let mut engine =
        CareerEngine::with_store("gm-w", "Alex Moreau", CareerLedger::default(), store).unwrap();

    // Another writer takes seq 1 first.
    let other = CareerStore::open(&path).unwrap();
    other
        .append_event(&EventLogEntry {
            id:         None,
            gm_id:      "gm-w".into(),
            seq:        1,
            event_type: "unemployment_year".into(),
            payload:    serde_json::to_string(&CareerEvent::UnemploymentYear).unwrap(),
        })
        .unwrap();

    let err = engine.apply(hire("mia", 2015)).unwrap_err();
    assert!(matches!(err, CareerError::Database(_)));
    assert_eq!(engine.seq(), 0);
    assert!(!engine.record().is_employed());
    assert!(engine.record().teams_worked_for.is_empty());
    assert_eq!(other.event_count("gm-w").unwrap(), 1);

    drop(engine);
    drop(other);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_retirement_write_keeps_career_active() {
    let path = temp_db("retire-fail");
    let store = CareerStore::open(&path).unwrap();
    store.migrate().unwrap();
    let mut engine =
        CareerEngine::with_store("gm-t", "Alex Moreau", CareerLedger::default(), store).unwrap();
    engine.apply_all(short_career()).unwrap();

    let other = CareerStore::open(&path).unwrap();
    other
        .append_event(&EventLogEntry {
            id:         None,
            gm_id:      "gm-t".into(),
            seq:        10,
            event_type: "unemployment_year".into(),
            payload:    serde_json::to_string(&CareerEvent::UnemploymentYear).unwrap(),
        })
        .unwrap();

    let retire = CareerEvent::Retired { year: 2020, reason: RetirementReason::Voluntary };
    assert!(engine.apply(retire).is_err());
    assert!(!engine.is_retired());
    assert!(validate_retirement_state(engine.retirement()));
    assert_eq!(engine.seq(), 9);
    assert!(other.load_retirement_summary("gm-t").unwrap().is_none());
    // Only the seq 5 snapshot; the retirement snapshot rolled back.
    assert_eq!(other.snapshot_count("gm-t").unwrap(), 1);

    drop(engine);
    drop(other);
    let _ = std::fs::remove_file(&path);
}
