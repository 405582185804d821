//! career-runner: headless career replay and retirement report.
//!
//! Usage:
//!   career-runner --events career.json --gm-name "Pat Quinn"
//!   career-runner --seed 12345 --seasons 22 --db career.db
//!   career-runner --restore <gm-id> --db career.db

mod synthetic;

use anyhow::{bail, Context, Result};
use career_core::{
    config::CareerConfig,
    display::{
        hall_of_fame_status_display, legacy_tier_display_name, reputation_tier_display,
        retirement_headline,
    },
    engine::CareerEngine,
    event::CareerEvent,
    ledger::{career_summary_line, reputation_tier, validate_career_record, CareerLedger},
    narrative::tenure_caption,
    retirement::{validate_retirement_state, RetirementReason},
    store::CareerStore,
};
use std::env;
use synthetic::SyntheticCareer;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let seasons = parse_arg(&args, "--seasons", 18u32);
    let start_year = parse_arg(&args, "--start-year", 2010u32);
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let gm_name = flag_value(&args, "--gm-name").unwrap_or("Pat Quinn");
    let events_path = flag_value(&args, "--events");
    let restore_id = flag_value(&args, "--restore");
    let json_out = args.iter().any(|a| a == "--json");

    let config = match flag_value(&args, "--config") {
        Some(path) => CareerConfig::load(path)?,
        None => CareerConfig::default(),
    };
    let ledger = CareerLedger::new(config.reputation);

    let store = CareerStore::open(db)?;
    store.migrate()?;

    let engine = if let Some(gm_id) = restore_id {
        log::info!("restoring gm={gm_id} from {db}");
        CareerEngine::restore(gm_id, ledger, store)
            .with_context(|| format!("restoring {gm_id} from {db}"))?
    } else {
        let events = match events_path {
            Some(path) => load_events(path)?,
            None => SyntheticCareer::new(seed, start_year).generate(seasons),
        };
        let events = with_retirement_override(&args, events)?;

        let gm_id = uuid::Uuid::new_v4().to_string();
        log::info!("gm={gm_id} replaying {} event(s) into {db}", events.len());
        let mut engine = CareerEngine::with_store(&gm_id, gm_name, ledger, store)?;
        engine
            .apply_all(events)
            .with_context(|| format!("replaying career at seq {}", engine.seq() + 1))?;
        engine
    };

    if json_out {
        println!("{}", serde_json::to_string_pretty(engine.retirement())?);
    } else {
        print_summary(&engine)?;
    }
    Ok(())
}

fn load_events(path: &str) -> Result<Vec<CareerEvent>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
    let events = serde_json::from_str(&content).with_context(|| format!("Cannot parse {path}"))?;
    Ok(events)
}

/// `--retire-year` / `--reason` replace (or add) the final retirement event.
fn with_retirement_override(args: &[String], mut events: Vec<CareerEvent>) -> Result<Vec<CareerEvent>> {
    let year = flag_value(args, "--retire-year").map(str::parse::<u32>).transpose()?;
    let reason = match flag_value(args, "--reason") {
        None => None,
        Some("voluntary") => Some(RetirementReason::Voluntary),
        Some("forced") => Some(RetirementReason::Forced),
        Some("health") => Some(RetirementReason::Health),
        Some(other) => bail!("Unknown retirement reason '{other}'"),
    };
    if year.is_none() && reason.is_none() {
        return Ok(events);
    }

    let (prev_year, prev_reason) = match events.last() {
        Some(CareerEvent::Retired { year, reason }) => (Some(*year), Some(*reason)),
        _ => (None, None),
    };
    if prev_year.is_some() {
        events.pop();
    }
    let year = year.or(prev_year).context("--reason needs --retire-year when the events do not retire")?;
    events.push(CareerEvent::Retired {
        year,
        reason: reason.or(prev_reason).unwrap_or(RetirementReason::Voluntary),
    });
    Ok(events)
}

fn print_summary(engine: &CareerEngine) -> Result<()> {
    let record = engine.record();
    let rep_tier = reputation_tier(record.reputation_score);

    println!("=== CAREER ===");
    println!("  gm:          {} ({})", record.gm_name, engine.gm_id);
    println!("  events:      {}", engine.seq());
    println!("  record:      {}", career_summary_line(record));
    println!(
        "  reputation:  {} ({})",
        record.reputation_score,
        reputation_tier_display(rep_tier)
    );
    println!("  valid:       {}", validate_career_record(record));
    println!();
    println!("=== TENURES ===");
    for t in &record.teams_worked_for {
        println!("  {}", tenure_caption(t));
    }

    let state = engine.retirement();
    let (Some(summary), Some(reason)) = (&state.career_summary, state.retirement_reason) else {
        println!();
        println!("  (still active)");
        return Ok(());
    };

    println!();
    println!("=== {} ===", retirement_headline(&summary.gm_name, reason).to_uppercase());
    println!("  retired:       {}", summary.retirement_year);
    println!(
        "  legacy:        {} ({})",
        summary.legacy_score,
        legacy_tier_display_name(summary.legacy_tier)
    );
    println!("  hall of fame:  {}", hall_of_fame_status_display(summary.hall_of_fame_status));
    for reason in &summary.hall_of_fame_reasons {
        println!("    - {reason}");
    }
    println!("  state valid:   {}", validate_retirement_state(state));
    println!();
    println!("  {}", summary.legacy_description);

    if !summary.highlights.is_empty() {
        println!();
        println!("=== HIGHLIGHTS ===");
        for h in &summary.highlights {
            println!("  [{:?}] {}: {}", h.significance, h.title, h.description);
        }
    }

    println!();
    println!("=== TEAM LEGACIES ===");
    for legacy in &summary.team_legacies {
        println!("  {} {} ({})", legacy.team_name, legacy.tenure, legacy.record);
        if !legacy.achievements.is_empty() {
            println!("    {}", legacy.achievements.join(", "));
        }
        println!("    \"{}\"", legacy.fan_memory);
    }

    println!();
    println!("  Farewell: \"{}\"", summary.farewell_statement);
    println!("  Media:    \"{}\"", summary.media_reaction);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    flag_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
