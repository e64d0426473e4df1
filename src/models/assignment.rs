//! Assignment result model.
//!
//! One output row per input flight: the original flight attributes plus the
//! assigned gate (or the `"Unassigned"` sentinel) and a status flag.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CountryType, Flight};

/// Sentinel written to `assigned_gate` when no gate qualified.
pub const UNASSIGNED_GATE: &str = "Unassigned";

/// Terminal outcome of one flight's assignment.
///
/// `Unassigned` is a normal modeled outcome, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// The flight claimed a gate.
    Assigned,
    /// No gate qualified for the flight's buffered window.
    Unassigned,
}

/// One row of the assignment output table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Flight identifier.
    pub flight_id: String,
    /// Operating airline.
    pub airline: String,
    /// Aircraft type.
    pub aircraft_type: String,
    /// Scheduled arrival.
    pub arrival: NaiveDateTime,
    /// Scheduled departure.
    pub departure: NaiveDateTime,
    /// Turnaround minutes.
    pub turnaround_minutes: i64,
    /// Scheduling priority.
    pub priority: i32,
    /// Domestic or international.
    pub country_type: CountryType,
    /// Assigned gate id, or [`UNASSIGNED_GATE`].
    pub assigned_gate: String,
    /// Assignment outcome.
    pub status: AssignmentStatus,
}

impl AssignmentRow {
    fn from_flight(flight: &Flight, assigned_gate: String, status: AssignmentStatus) -> Self {
        Self {
            flight_id: flight.flight_id.clone(),
            airline: flight.airline.clone(),
            aircraft_type: flight.aircraft_type.clone(),
            arrival: flight.arrival,
            departure: flight.departure,
            turnaround_minutes: flight.turnaround_minutes,
            priority: flight.priority,
            country_type: flight.country_type,
            assigned_gate,
            status,
        }
    }

    /// Creates a row for a flight that claimed a gate.
    pub fn assigned(flight: &Flight, gate_id: impl Into<String>) -> Self {
        Self::from_flight(flight, gate_id.into(), AssignmentStatus::Assigned)
    }

    /// Creates a row for a flight no gate qualified for.
    pub fn unassigned(flight: &Flight) -> Self {
        Self::from_flight(
            flight,
            UNASSIGNED_GATE.to_string(),
            AssignmentStatus::Unassigned,
        )
    }

    /// Whether the flight got a gate.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.status == AssignmentStatus::Assigned
    }
}

/// The complete assignment output of one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentTable {
    rows: Vec<AssignmentRow>,
}

impl AssignmentTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: AssignmentRow) {
        self.rows.push(row);
    }

    /// All rows in presentation order.
    pub fn rows(&self) -> &[AssignmentRow] {
        &self.rows
    }

    /// Iterates over rows.
    pub fn iter(&self) -> impl Iterator<Item = &AssignmentRow> {
        self.rows.iter()
    }

    /// Number of rows (equals the input flight count).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Re-sorts rows by arrival time for presentation. Stable, so flights
    /// arriving at the same instant keep their relative order.
    pub fn sort_by_arrival(&mut self) {
        self.rows.sort_by_key(|r| r.arrival);
    }

    /// Number of flights that claimed a gate.
    pub fn assigned_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_assigned()).count()
    }

    /// Number of flights left unassigned.
    pub fn unassigned_count(&self) -> usize {
        self.rows.len() - self.assigned_count()
    }

    /// Finds the row for a flight.
    pub fn row_for_flight(&self, flight_id: &str) -> Option<&AssignmentRow> {
        self.rows.iter().find(|r| r.flight_id == flight_id)
    }

    /// All rows assigned to a gate.
    pub fn rows_for_gate(&self, gate_id: &str) -> Vec<&AssignmentRow> {
        self.rows
            .iter()
            .filter(|r| r.is_assigned() && r.assigned_gate == gate_id)
            .collect()
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

    fn flight(id: &str, arr_h: u32) -> Flight {
        Flight::new(id, ts(arr_h, 0), ts(arr_h, 30)).with_aircraft_type("A320")
    }

    fn sample_table() -> AssignmentTable {
        let mut t = AssignmentTable::new();
        t.push(AssignmentRow::assigned(&flight("F2", 11), "G1"));
        t.push(AssignmentRow::assigned(&flight("F1", 10), "G2"));
        t.push(AssignmentRow::unassigned(&flight("F3", 12)));
        t
    }

    #[test]
    fn test_row_carries_flight_fields() {
        let f = flight("F1", 10)
            .with_airline("Aizaz Air")
            .with_priority(1)
            .with_turnaround(45);
        let row = AssignmentRow::assigned(&f, "G1");

        assert_eq!(row.flight_id, "F1");
        assert_eq!(row.airline, "Aizaz Air");
        assert_eq!(row.priority, 1);
        assert_eq!(row.turnaround_minutes, 45);
        assert_eq!(row.assigned_gate, "G1");
        assert!(row.is_assigned());
    }

    #[test]
    fn test_unassigned_sentinel() {
        let row = AssignmentRow::unassigned(&flight("F1", 10));
        assert_eq!(row.assigned_gate, UNASSIGNED_GATE);
        assert_eq!(row.status, AssignmentStatus::Unassigned);
        assert!(!row.is_assigned());
    }

    #[test]
    fn test_counts() {
        let t = sample_table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.assigned_count(), 2);
        assert_eq!(t.unassigned_count(), 1);
    }

    #[test]
    fn test_sort_by_arrival() {
        let mut t = sample_table();
        t.sort_by_arrival();
        let ids: Vec<&str> = t.iter().map(|r| r.flight_id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "F2", "F3"]);
    }

    #[test]
    fn test_lookups() {
        let t = sample_table();
        assert_eq!(t.row_for_flight("F2").unwrap().assigned_gate, "G1");
        assert!(t.row_for_flight("F9").is_none());
        assert_eq!(t.rows_for_gate("G1").len(), 1);
        // Unassigned rows never count toward a gate, even the sentinel.
        assert!(t.rows_for_gate(UNASSIGNED_GATE).is_empty());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let row = AssignmentRow::unassigned(&flight("F1", 10));
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"status\":\"unassigned\""));
        assert!(json.contains("\"assigned_gate\":\"Unassigned\""));

        let back: AssignmentRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, AssignmentStatus::Unassigned);
    }
}
