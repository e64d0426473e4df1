//! Greedy gate assignment.
//!
//! # Algorithm
//!
//! 1. Sort flights by `(priority, arrival)` — see [`crate::ordering`].
//! 2. For each flight, compute the buffered occupancy window.
//! 3. Try contact gates first, remote stands only if none qualifies.
//! 4. Within a pool, keep gates passing the country rule, aircraft
//!    compatibility, and availability; pick the one with the earliest
//!    last-free-time, first-seen winning ties.
//! 5. Reserve the window and emit an `assigned` row, or emit `unassigned`.
//!
//! The per-flight loop is inherently sequential: every decision depends on
//! the reservations made before it. Parallelism is only safe across
//! independent runs (e.g. different buffer scenarios), never inside one.
//!
//! # Complexity
//! O(n log n + n * g * r) where n=flights, g=gates, r=reservations/gate.

use chrono::{Duration, NaiveDateTime};
use log::debug;

use crate::models::{
    AircraftMatch, AssignmentRow, AssignmentTable, Flight, Gate,
};
use crate::ordering;
use crate::timeline::GateTimelines;

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Flights to assign.
    pub flights: Vec<Flight>,
    /// Available gates, in tie-break order.
    pub gates: Vec<Gate>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(flights: Vec<Flight>, gates: Vec<Gate>) -> Self {
        Self { flights, gates }
    }
}

/// Greedy gate assignment engine.
///
/// Holds the run-wide parameters: pre-arrival and post-departure buffers
/// (minutes, default 0) and the aircraft matching mode (default
/// [`AircraftMatch::Fuzzy`]). The engine is pure — identical inputs and
/// parameters always produce identical output — and raises no errors:
/// a flight no gate fits is reported as `unassigned`, and input integrity
/// (including `arrival < departure`) is the caller's concern via
/// [`crate::validation::validate_input`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gate_assign::models::{Flight, Gate};
/// use gate_assign::scheduler::GateScheduler;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let flights = vec![
///     Flight::new(
///         "AZ101",
///         day.and_hms_opt(10, 0, 0).unwrap(),
///         day.and_hms_opt(10, 30, 0).unwrap(),
///     )
///     .with_aircraft_type("A320")
///     .with_turnaround(30),
/// ];
/// let gates = vec![Gate::new("G1")];
///
/// let table = GateScheduler::new().schedule(&flights, &gates);
/// assert_eq!(table.row_for_flight("AZ101").unwrap().assigned_gate, "G1");
/// ```
#[derive(Debug, Clone)]
pub struct GateScheduler {
    pre_buffer_min: i64,
    post_buffer_min: i64,
    aircraft_match: AircraftMatch,
}

impl GateScheduler {
    /// Creates a scheduler with zero buffers and fuzzy aircraft matching.
    pub fn new() -> Self {
        Self {
            pre_buffer_min: 0,
            post_buffer_min: 0,
            aircraft_match: AircraftMatch::Fuzzy,
        }
    }

    /// Sets the pre-arrival buffer (minutes before every flight's arrival).
    pub fn with_pre_buffer(mut self, minutes: i64) -> Self {
        self.pre_buffer_min = minutes;
        self
    }

    /// Sets the post-departure buffer (minutes after departure + turnaround).
    pub fn with_post_buffer(mut self, minutes: i64) -> Self {
        self.post_buffer_min = minutes;
        self
    }

    /// Sets the aircraft compatibility matching mode.
    pub fn with_aircraft_match(mut self, mode: AircraftMatch) -> Self {
        self.aircraft_match = mode;
        self
    }

    /// Assigns flights to gates.
    ///
    /// Returns one row per input flight, sorted by arrival time for
    /// presentation (independent of processing order).
    pub fn schedule(&self, flights: &[Flight], gates: &[Gate]) -> AssignmentTable {
        let mut table = AssignmentTable::new();
        let mut timelines = GateTimelines::new(gates);

        // Candidate pools in fixed gate-list order; remote stands are only
        // consulted when no contact gate qualifies.
        let contact: Vec<usize> = pool(gates, false);
        let remote: Vec<usize> = pool(gates, true);

        for &idx in &ordering::processing_order(flights) {
            let flight = &flights[idx];
            let (start, end) = self.buffered_window(flight);

            let chosen = self
                .select_gate(flight, gates, &contact, &timelines, start, end)
                .or_else(|| self.select_gate(flight, gates, &remote, &timelines, start, end));

            match chosen {
                Some(g) => {
                    let gate_id = &gates[g].gate_id;
                    timelines.reserve(gate_id, start, end);
                    debug!(
                        "flight {} -> gate {} for [{start}, {end})",
                        flight.flight_id, gate_id
                    );
                    table.push(AssignmentRow::assigned(flight, gate_id.clone()));
                }
                None => {
                    debug!("flight {}: no qualifying gate", flight.flight_id);
                    table.push(AssignmentRow::unassigned(flight));
                }
            }
        }

        table.sort_by_arrival();
        table
    }

    /// Runs a [`ScheduleRequest`].
    pub fn schedule_request(&self, request: &ScheduleRequest) -> AssignmentTable {
        self.schedule(&request.flights, &request.gates)
    }

    /// Buffered occupancy window: `[arrival - pre, departure + turnaround + post)`.
    fn buffered_window(&self, flight: &Flight) -> (NaiveDateTime, NaiveDateTime) {
        let start = flight.arrival - Duration::minutes(self.pre_buffer_min);
        let end = flight.departure
            + Duration::minutes(flight.turnaround_minutes + self.post_buffer_min);
        (start, end)
    }

    /// Picks the best qualifying gate from one pool, or `None`.
    ///
    /// A gate qualifies when it passes the country rule, accepts the
    /// aircraft, and is free for the whole window. Among qualifiers the one
    /// with the earliest last-free-time wins (spreading load toward idle
    /// gates); the strict `<` keeps the first-seen gate on ties.
    fn select_gate(
        &self,
        flight: &Flight,
        gates: &[Gate],
        pool: &[usize],
        timelines: &GateTimelines,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        // None = no reservations yet, ordering before every Some.
        let mut best_free: Option<NaiveDateTime> = None;

        for &g in pool {
            let gate = &gates[g];
            if !gate.accepts_country(flight.country_type) {
                continue;
            }
            if !gate.accepts_aircraft(&flight.aircraft_type, self.aircraft_match) {
                continue;
            }
            if timelines.is_occupied(&gate.gate_id, start, end) {
                continue;
            }

            let free = timelines.last_free_time(&gate.gate_id);
            if best.is_none() || free < best_free {
                best = Some(g);
                best_free = free;
            }
        }

        best
    }
}

impl Default for GateScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn pool(gates: &[Gate], remote: bool) -> Vec<usize> {
    gates
        .iter()
        .enumerate()
        .filter(|(_, g)| g.is_remote == remote)
        .map(|(i, _)| i)
        .collect()
}
