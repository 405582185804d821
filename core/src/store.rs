//! SQLite save slot for careers.
//!
//! RULE: Only store.rs talks to the database.
//! The engine calls store methods; it never executes SQL directly.

use crate::{
    error::CareerResult,
    event::EventLogEntry,
    retirement::{CareerSummary, RetirementReason},
    types::{Seq, Year},
};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

pub struct CareerStore {
    conn: Connection,
}

impl CareerStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> CareerResult<Self> {
        let conn = Connection::open(path)?;
        // WAL is ignored by in-memory databases.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> CareerResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> CareerResult<()> {
        self.conn.execute_batch(include_str!("../../migrations/001_career.sql"))?;
        Ok(())
    }

    // ── Career ─────────────────────────────────────────────────

    pub fn insert_career(&self, gm_id: &str, gm_name: &str, version: &str) -> CareerResult<()> {
        self.conn.execute(
            "INSERT INTO career (gm_id, gm_name, version) VALUES (?1, ?2, ?3)",
            params![gm_id, gm_name, version],
        )?;
        Ok(())
    }

    pub fn career_name(&self, gm_id: &str) -> CareerResult<Option<String>> {
        let name = self.conn
            .query_row(
                "SELECT gm_name FROM career WHERE gm_id = ?1",
                params![gm_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name)
    }

    // ── Event log ──────────────────────────────────────────────

    pub fn append_event(&self, entry: &EventLogEntry) -> CareerResult<()> {
        insert_event(&self.conn, entry)
    }

    /// Persist one applied event with its retirement row and snapshot,
    /// all or nothing.
    pub fn commit_event(
        &mut self,
        entry:      &EventLogEntry,
        retirement: Option<(Year, RetirementReason, &CareerSummary)>,
        snapshot:   Option<&str>,
    ) -> CareerResult<()> {
        let tx = self.conn.transaction()?;

        insert_event(&tx, entry)?;
        if let Some((year, reason, summary)) = retirement {
            insert_retirement(&tx, &entry.gm_id, year, reason, summary)?;
        }
        if let Some(state_json) = snapshot {
            insert_snapshot(&tx, &entry.gm_id, entry.seq, state_json)?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Events with seq strictly greater than `after`, in order.
    pub fn events_after(&self, gm_id: &str, after: Seq) -> CareerResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, gm_id, seq, event_type, payload
             FROM career_event WHERE gm_id = ?1 AND seq > ?2
             ORDER BY seq ASC",
        )?;
        let entries = stmt
            .query_map(params![gm_id, after as i64], |row| {
                Ok(EventLogEntry {
                    id:         Some(row.get(0)?),
                    gm_id:      row.get(1)?,
                    seq:        row.get::<_, i64>(2)? as u64,
                    event_type: row.get(3)?,
                    payload:    row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn event_count(&self, gm_id: &str) -> CareerResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM career_event WHERE gm_id = ?1",
            params![gm_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ── Snapshot ───────────────────────────────────────────────

    pub fn latest_snapshot(&self, gm_id: &str) -> CareerResult<Option<(Seq, String)>> {
        let result = self.conn
            .query_row(
                "SELECT seq, state_json FROM career_snapshot
                 WHERE gm_id = ?1
                 ORDER BY seq DESC LIMIT 1",
                params![gm_id],
                |row| Ok((row.get::<_, i64>(0)? as u64, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(result)
    }

    pub fn snapshot_count(&self, gm_id: &str) -> CareerResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM career_snapshot WHERE gm_id = ?1",
            params![gm_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ── Retirement ─────────────────────────────────────────────

    pub fn load_retirement_summary(&self, gm_id: &str) -> CareerResult<Option<CareerSummary>> {
        let json: Option<String> = self.conn
            .query_row(
                "SELECT summary_json FROM career_retirement WHERE gm_id = ?1",
                params![gm_id],
                |row| row.get(0),
            )
            .optional()?;
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }
}

fn insert_event(conn: &Connection, entry: &EventLogEntry) -> CareerResult<()> {
    conn.execute(
        "INSERT INTO career_event (gm_id, seq, event_type, payload)
         VALUES (?1, ?2, ?3, ?4)",
        params![entry.gm_id, entry.seq as i64, entry.event_type, entry.payload],
    )?;
    Ok(())
}

fn insert_snapshot(conn: &Connection, gm_id: &str, seq: Seq, state_json: &str) -> CareerResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO career_snapshot (gm_id, seq, state_json) VALUES (?1, ?2, ?3)",
        params![gm_id, seq as i64, state_json],
    )?;
    Ok(())
}

fn insert_retirement(
    conn:    &Connection,
    gm_id:   &str,
    year:    Year,
    reason:  RetirementReason,
    summary: &CareerSummary,
) -> CareerResult<()> {
    let summary_json = serde_json::to_string(summary)?;
    let reason = serde_name(&reason)?;
    let tier = serde_name(&summary.legacy_tier)?;
    conn.execute(
        "INSERT INTO career_retirement
             (gm_id, year, reason, legacy_score, legacy_tier, summary_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![gm_id, year as i64, reason, summary.legacy_score, tier, summary_json],
    )?;
    Ok(())
}

/// The serde string form of a unit enum variant ("hall_of_fame").
fn serde_name<T: Serialize>(value: &T) -> CareerResult<String> {
    let value = serde_json::to_value(value)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}
