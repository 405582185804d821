//! Career ledger and legacy evaluation for a general manager's career.
//!
//! The ledger threads a `CareerRecord` forward one event at a time.
//! On retirement the record is projected into a `CareerSummary`:
//! legacy score, tier, Hall-of-Fame outlook, highlights and narrative.

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod hall_of_fame;
pub mod highlights;
pub mod ledger;
pub mod legacy;
pub mod narrative;
pub mod record;
pub mod retirement;
pub mod snapshot;
pub mod store;
pub mod types;
