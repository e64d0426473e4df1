//! Flight processing order.
//!
//! Flights claim gates in ascending `(priority, arrival)` order: lower
//! priority values go first, earlier arrivals break priority ties, and the
//! sort is stable so fully tied flights keep their input order. This is an
//! inherent serialization point — each flight's decision depends on every
//! reservation made before it, so reordering changes results.

use crate::models::Flight;

/// Returns indices into `flights` in processing order.
///
/// Stable ascending sort by `(priority, arrival)`.
pub fn processing_order(flights: &[Flight]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..flights.len()).collect();
    indices.sort_by(|&a, &b| {
        let (fa, fb) = (&flights[a], &flights[b]);
        fa.priority
            .cmp(&fb.priority)
            .then_with(|| fa.arrival.cmp(&fb.arrival))
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn flight(id: &str, priority: i32, arr_h: u32, arr_m: u32) -> Flight {
        Flight::new(id, ts(arr_h, arr_m), ts(arr_h + 1, arr_m)).with_priority(priority)
    }

    #[test]
    fn test_priority_before_arrival() {
        let flights = vec![
            flight("early_low", 2, 8, 0),
            flight("late_high", 1, 12, 0),
        ];
        let order = processing_order(&flights);
        // Priority 1 goes first despite arriving later.
        assert_eq!(flights[order[0]].flight_id, "late_high");
        assert_eq!(flights[order[1]].flight_id, "early_low");
    }

    #[test]
    fn test_arrival_breaks_priority_ties() {
        let flights = vec![
            flight("b", 2, 10, 30),
            flight("a", 2, 10, 0),
            flight("c", 2, 11, 0),
        ];
        let order = processing_order(&flights);
        let ids: Vec<&str> = order
            .iter()
            .map(|&i| flights[i].flight_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stable_on_full_ties() {
        let flights = vec![
            flight("first", 2, 10, 0),
            flight("second", 2, 10, 0),
            flight("third", 2, 10, 0),
        ];
        assert_eq!(processing_order(&flights), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty() {
        assert!(processing_order(&[]).is_empty());
    }
}
