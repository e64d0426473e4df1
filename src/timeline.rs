//! Per-gate occupied-interval store.
//!
//! Tracks the reservations made during one scheduling run: each gate holds
//! an append-only list of `(start, end)` intervals that stays pairwise
//! non-overlapping because every insertion is availability-checked first.
//! The store is built empty per run and owned by the scheduling call, so
//! concurrent independent runs never interfere.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::Gate;

/// One buffered ground-time reservation `[start, end)` on a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedInterval {
    /// Occupancy start (arrival minus pre-buffer).
    pub start: NaiveDateTime,
    /// Occupancy end (departure plus turnaround and post-buffer).
    pub end: NaiveDateTime,
}

impl OccupiedInterval {
    /// Creates an interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Open-interval overlap test: `max(s1,s2) < min(e1,e2)`.
    ///
    /// Touching endpoints do not overlap — a departure exactly at another
    /// flight's arrival is compatible.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start.max(start) < self.end.min(end)
    }
}

/// Occupied timelines for every gate in one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct GateTimelines {
    intervals: HashMap<String, Vec<OccupiedInterval>>,
}

impl GateTimelines {
    /// Creates an empty timeline per gate.
    pub fn new(gates: &[Gate]) -> Self {
        Self {
            intervals: gates
                .iter()
                .map(|g| (g.gate_id.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Whether any stored interval strictly overlaps `[start, end)`.
    pub fn is_occupied(&self, gate_id: &str, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.intervals
            .get(gate_id)
            .is_some_and(|ivs| ivs.iter().any(|iv| iv.overlaps(start, end)))
    }

    /// Latest reserved end on the gate, or `None` if it has no reservations
    /// yet. `None` orders before every `Some`, which is exactly the
    /// "infinitely early" sentinel the last-free-time tie-break needs.
    pub fn last_free_time(&self, gate_id: &str) -> Option<NaiveDateTime> {
        self.intervals
            .get(gate_id)?
            .iter()
            .map(|iv| iv.end)
            .max()
    }

    /// Appends a reservation. No merging is performed; callers check
    /// [`is_occupied`](Self::is_occupied) first, keeping the list pairwise
    /// non-overlapping.
    pub fn reserve(&mut self, gate_id: &str, start: NaiveDateTime, end: NaiveDateTime) {
        self.intervals
            .entry(gate_id.to_string())
            .or_default()
            .push(OccupiedInterval::new(start, end));
    }

    /// Reservations on a gate, in insertion order.
    pub fn intervals_for(&self, gate_id: &str) -> &[OccupiedInterval] {
        self.intervals
            .get(gate_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn store() -> GateTimelines {
        GateTimelines::new(&[Gate::new("G1"), Gate::new("G2")])
    }

    #[test]
    fn test_fresh_store_is_free() {
        let t = store();
        assert!(!t.is_occupied("G1", ts(0, 0), ts(23, 59)));
        assert_eq!(t.last_free_time("G1"), None);
        assert!(t.intervals_for("G1").is_empty());
    }

    #[test]
    fn test_overlap_detection() {
        let mut t = store();
        t.reserve("G1", ts(10, 0), ts(11, 0));

        assert!(t.is_occupied("G1", ts(10, 15), ts(11, 0)));
        assert!(t.is_occupied("G1", ts(9, 0), ts(10, 1)));
        assert!(t.is_occupied("G1", ts(10, 30), ts(10, 45)));
        // Other gates are unaffected.
        assert!(!t.is_occupied("G2", ts(10, 15), ts(11, 0)));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let mut t = store();
        t.reserve("G1", ts(10, 0), ts(11, 0));

        assert!(!t.is_occupied("G1", ts(11, 0), ts(12, 0)));
        assert!(!t.is_occupied("G1", ts(9, 0), ts(10, 0)));
    }

    #[test]
    fn test_last_free_time_is_max_end() {
        let mut t = store();
        t.reserve("G1", ts(12, 0), ts(13, 0));
        t.reserve("G1", ts(8, 0), ts(9, 0));

        assert_eq!(t.last_free_time("G1"), Some(ts(13, 0)));
        assert_eq!(t.last_free_time("G2"), None);
    }

    #[test]
    fn test_none_sorts_before_any_reservation() {
        let mut t = store();
        t.reserve("G1", ts(0, 0), ts(0, 1));
        // The untouched gate must win a last-free-time comparison.
        assert!(t.last_free_time("G2") < t.last_free_time("G1"));
    }

    #[test]
    fn test_reservations_append_in_order() {
        let mut t = store();
        t.reserve("G1", ts(10, 0), ts(11, 0));
        t.reserve("G1", ts(12, 0), ts(13, 0));

        let ivs = t.intervals_for("G1");
        assert_eq!(ivs.len(), 2);
        assert_eq!(ivs[0], OccupiedInterval::new(ts(10, 0), ts(11, 0)));
        assert_eq!(ivs[1], OccupiedInterval::new(ts(12, 0), ts(13, 0)));
    }
}
