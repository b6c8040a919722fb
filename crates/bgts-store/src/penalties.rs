//! # Penalty Register
//!
//! Record of fines levied for declaration breaches. Fine amounts are
//! computed by `bgts_core::penalty` at recording time and stored as
//! plain values; the register never recomputes them.

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment state of a levied fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyStatus {
    Unpaid,
    Paid,
}

/// A levied fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub public_servant: String,
    pub breach_type: String,
    pub gift_value: f64,
    pub fine_amount: f64,
    pub status: PenaltyStatus,
}

/// In-memory register of levied fines, insertion order.
#[derive(Debug, Default)]
pub struct PenaltyRegister {
    records: RwLock<Vec<PenaltyRecord>>,
}

impl PenaltyRegister {
    /// Create an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a register pre-loaded with records.
    pub fn with_records(records: Vec<PenaltyRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a record.
    pub fn record(&self, record: PenaltyRecord) {
        self.records.write().push(record);
    }

    /// All records, oldest first.
    pub fn list(&self) -> Vec<PenaltyRecord> {
        self.records.read().clone()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the register is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn register_preserves_insertion_order() {
        let register = PenaltyRegister::new();
        for record in demo::demo_penalties() {
            register.record(record);
        }
        let listed = register.list();
        assert!(!listed.is_empty());
        assert_eq!(listed, demo::demo_penalties());
    }

    #[test]
    fn demo_fines_match_the_rule_table() {
        for record in demo::demo_penalties() {
            let assessed = bgts_core::penalty::assess(record.gift_value, 1);
            assert_eq!(record.fine_amount, assessed.fine);
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = demo::demo_penalties().remove(0);
        let json = serde_json::to_string(&record).unwrap();
        let back: PenaltyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(json.contains("\"unpaid\""));
    }
}
