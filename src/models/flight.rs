//! Flight model.
//!
//! A flight is the unit of work to be placed: it occupies exactly one gate
//! for its buffered ground-time window, or ends the run unassigned.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Priority assumed when the input omits the column.
pub const DEFAULT_PRIORITY: i32 = 2;

/// Flight country classification.
///
/// Drives the gate country rule: international flights only fit gates
/// cleared for international traffic, domestic flights fit anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryType {
    /// Domestic flight (the column default).
    #[default]
    Domestic,
    /// International flight.
    International,
}

/// A flight to be assigned to a gate.
///
/// `arrival` must precede `departure`; the engine treats this as an upstream
/// precondition and [`crate::validation::validate_input`] checks it
/// explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier.
    pub flight_id: String,
    /// Operating airline (display only, never used in assignment logic).
    pub airline: String,
    /// Aircraft type, matched against gate compatibility tokens.
    pub aircraft_type: String,
    /// Scheduled arrival time.
    pub arrival: NaiveDateTime,
    /// Scheduled departure time.
    pub departure: NaiveDateTime,
    /// Ground time added to the occupancy window after departure (minutes).
    pub turnaround_minutes: i64,
    /// Scheduling priority. Lower value = processed earlier.
    pub priority: i32,
    /// Domestic or international.
    pub country_type: CountryType,
}

impl Flight {
    /// Creates a flight with default airline, priority, and country.
    pub fn new(id: impl Into<String>, arrival: NaiveDateTime, departure: NaiveDateTime) -> Self {
        Self {
            flight_id: id.into(),
            airline: String::new(),
            aircraft_type: String::new(),
            arrival,
            departure,
            turnaround_minutes: 0,
            priority: DEFAULT_PRIORITY,
            country_type: CountryType::Domestic,
        }
    }

    /// Sets the airline label.
    pub fn with_airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    /// Sets the aircraft type.
    pub fn with_aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    /// Sets the turnaround time in minutes.
    pub fn with_turnaround(mut self, minutes: i64) -> Self {
        self.turnaround_minutes = minutes;
        self
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the country classification.
    pub fn with_country(mut self, country_type: CountryType) -> Self {
        self.country_type = country_type;
        self
    }

    /// Whether this flight is international.
    pub fn is_international(&self) -> bool {
        self.country_type == CountryType::International
    }
}
