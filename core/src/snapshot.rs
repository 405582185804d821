//! Snapshot serialization: full career state to/from JSON.
//!
//! A snapshot is taken every SNAPSHOT_INTERVAL events and on retirement.
//! It captures everything needed to resume without replaying from seq 1.

use crate::{
    record::CareerRecord,
    retirement::RetirementState,
    types::{GmId, Seq},
};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_INTERVAL: Seq = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSnapshot {
    pub gm_id:      GmId,
    /// Last event folded into this snapshot.
    pub seq:        Seq,
    pub record:     CareerRecord,
    pub retirement: RetirementState,
}
