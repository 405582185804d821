//! The career engine, a deterministic reducer over the event log.
//!
//! STATE MACHINE (one-way):
//!   Active  --Retired event-->  Retired
//!
//! RULES:
//!   - Events are applied in the order received. The engine never reorders.
//!   - Every applied event gets the next sequence number, starting at 1.
//!   - A rejected event changes nothing and consumes no sequence number.
//!   - Once retired, every further event is rejected.
//!   - With a store attached, every applied event is persisted, and a
//!     snapshot is written every SNAPSHOT_INTERVAL events and on retirement.

use crate::{
    error::{CareerError, CareerResult},
    event::{CareerEvent, EventLogEntry},
    ledger::CareerLedger,
    record::CareerRecord,
    retirement::{initiate_retirement, RetirementState},
    snapshot::{CareerSnapshot, SNAPSHOT_INTERVAL},
    store::CareerStore,
    types::{GmId, Seq},
};

pub struct CareerEngine {
    pub gm_id:  GmId,
    ledger:     CareerLedger,
    record:     CareerRecord,
    retirement: RetirementState,
    seq:        Seq,
    store:      Option<CareerStore>,
}

impl CareerEngine {
    /// An in-memory engine with no persistence.
    pub fn new(gm_id: &str, gm_name: &str, ledger: CareerLedger) -> Self {
        let record = ledger.create_career_record(gm_id, gm_name);
        Self {
            gm_id: gm_id.to_string(),
            ledger,
            record,
            retirement: RetirementState::active(),
            seq: 0,
            store: None,
        }
    }

    /// An engine that persists to `store`. The store must be migrated and
    /// must not already hold a career for `gm_id`; use `restore` for that.
    pub fn with_store(
        gm_id: &str,
        gm_name: &str,
        ledger: CareerLedger,
        store: CareerStore,
    ) -> CareerResult<Self> {
        if store.career_name(gm_id)?.is_some() {
            return Err(CareerError::CareerExists { gm_id: gm_id.to_string() });
        }
        store.insert_career(gm_id, gm_name, env!("CARGO_PKG_VERSION"))?;
        let mut engine = Self::new(gm_id, gm_name, ledger);
        engine.store = Some(store);
        Ok(engine)
    }

    /// Rebuild a saved career: latest snapshot plus the events after it.
    pub fn restore(gm_id: &str, ledger: CareerLedger, store: CareerStore) -> CareerResult<Self> {
        let gm_name = store
            .career_name(gm_id)?
            .ok_or_else(|| CareerError::CareerNotFound { gm_id: gm_id.to_string() })?;

        let mut engine = Self::new(gm_id, &gm_name, ledger);
        if let Some((seq, json)) = store.latest_snapshot(gm_id)? {
            let snapshot: CareerSnapshot = serde_json::from_str(&json)?;
            engine.record = snapshot.record;
            engine.retirement = snapshot.retirement;
            engine.seq = seq;
        }

        let pending = store.events_after(gm_id, engine.seq)?;
        log::debug!(
            "gm={gm_id} restoring from seq {} with {} event(s) to replay",
            engine.seq,
            pending.len()
        );
        for entry in pending {
            let event: CareerEvent = serde_json::from_str(&entry.payload)?;
            let (record, retirement) = engine.fold(&event)?;
            engine.record = record;
            engine.retirement = retirement;
            engine.seq = entry.seq;
        }

        engine.store = Some(store);
        Ok(engine)
    }

    /// Apply one event. The new state is persisted before it is adopted,
    /// so on any error the engine state is unchanged.
    pub fn apply(&mut self, event: CareerEvent) -> CareerResult<()> {
        let (record, retirement) = self.fold(&event)?;
        let seq = self.seq + 1;

        if let Some(store) = self.store.as_mut() {
            let entry = EventLogEntry {
                id:         None,
                gm_id:      self.gm_id.clone(),
                seq,
                event_type: event.type_name().to_string(),
                payload:    serde_json::to_string(&event)?,
            };
            let retired_row = match (&event, &retirement.career_summary) {
                (CareerEvent::Retired { year, reason }, Some(summary)) => {
                    Some((*year, *reason, summary))
                }
                _ => None,
            };
            let snapshot = if seq.is_multiple_of(SNAPSHOT_INTERVAL) || retirement.is_retired {
                let snapshot = CareerSnapshot {
                    gm_id:      self.gm_id.clone(),
                    seq,
                    record:     record.clone(),
                    retirement: retirement.clone(),
                };
                Some(serde_json::to_string(&snapshot)?)
            } else {
                None
            };

            store.commit_event(&entry, retired_row, snapshot.as_deref())?;
            if snapshot.is_some() {
                log::debug!("gm={} snapshot saved at seq {seq}", self.gm_id);
            }
        }

        self.record = record;
        self.retirement = retirement;
        self.seq = seq;
        Ok(())
    }

    /// Apply events in order, stopping at the first rejection.
    pub fn apply_all<I>(&mut self, events: I) -> CareerResult<()>
    where
        I: IntoIterator<Item = CareerEvent>,
    {
        for event in events {
            self.apply(event)?;
        }
        Ok(())
    }

    pub fn record(&self) -> &CareerRecord {
        &self.record
    }

    pub fn retirement(&self) -> &RetirementState {
        &self.retirement
    }

    pub fn is_retired(&self) -> bool {
        self.retirement.is_retired
    }

    pub fn seq(&self) -> Seq {
        self.seq
    }

    pub fn ledger(&self) -> &CareerLedger {
        &self.ledger
    }

    pub fn store(&self) -> Option<&CareerStore> {
        self.store.as_ref()
    }

    /// Compute the state after `event` without touching `self`.
    fn fold(&self, event: &CareerEvent) -> CareerResult<(CareerRecord, RetirementState)> {
        if let Some(year) = self.retirement.retirement_year {
            return Err(CareerError::AlreadyRetired { year });
        }

        let ledger = &self.ledger;
        let record = &self.record;
        let next = match event {
            CareerEvent::TeamStarted { team_id, team_name, year } => {
                ledger.start_new_team(record, team_id, team_name, *year)?
            }
            CareerEvent::SeasonRecorded { season } => {
                ledger.record_season(record, season.clone())?
            }
            CareerEvent::Fired { team_id, year, severity } => {
                ledger.record_firing(record, team_id, *year, *severity)?
            }
            CareerEvent::Resigned { team_id, year } => {
                ledger.record_resignation(record, team_id, *year)?
            }
            CareerEvent::UnemploymentYear => ledger.record_unemployment_year(record)?,
            CareerEvent::Retired { year, reason } => {
                let retirement = initiate_retirement(record, *year, *reason)?;
                return Ok((record.clone(), retirement));
            }
        };

        Ok((next, self.retirement.clone()))
    }
}
