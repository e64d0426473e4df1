//! Input validation for scheduling runs.
//!
//! Checks structural integrity of flight and gate tables before scheduling.
//! The engine itself never errors — it assumes these preconditions hold —
//! so callers wanting defensive behavior run this first. Detects:
//! - Duplicate or empty IDs
//! - Arrival at or after departure
//! - Negative turnaround minutes
//!
//! All issues are collected and reported together, not fail-fast.

use std::collections::HashSet;

use crate::models::{Flight, Gate};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two flights or two gates share the same ID.
    DuplicateId,
    /// A flight or gate has a blank ID.
    EmptyId,
    /// A flight's arrival is at or after its departure.
    InvalidTimeWindow,
    /// A flight's turnaround minutes are negative.
    NegativeTurnaround,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables for a scheduling run.
///
/// Checks:
/// 1. No duplicate flight IDs
/// 2. No duplicate gate IDs
/// 3. No blank flight or gate IDs
/// 4. `arrival < departure` for every flight
/// 5. `turnaround_minutes >= 0` for every flight
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(flights: &[Flight], gates: &[Gate]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut flight_ids = HashSet::new();
    for f in flights {
        if f.flight_id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Flight with empty flight_id",
            ));
        } else if !flight_ids.insert(f.flight_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate flight ID: {}", f.flight_id),
            ));
        }

        if f.arrival >= f.departure {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeWindow,
                format!(
                    "Flight '{}': arrival {} is not before departure {}",
                    f.flight_id, f.arrival, f.departure
                ),
            ));
        }

        if f.turnaround_minutes < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTurnaround,
                format!(
                    "Flight '{}': negative turnaround ({} min)",
                    f.flight_id, f.turnaround_minutes
                ),
            ));
        }
    }

    let mut gate_ids = HashSet::new();
    for g in gates {
        if g.gate_id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Gate with empty gate_id",
            ));
        } else if !gate_ids.insert(g.gate_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate gate ID: {}", g.gate_id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
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

    fn sample_flights() -> Vec<Flight> {
        vec![
            Flight::new("F1", ts(10, 0), ts(10, 30)).with_aircraft_type("A320"),
            Flight::new("F2", ts(11, 0), ts(11, 45)).with_aircraft_type("B737"),
        ]
    }

    fn sample_gates() -> Vec<Gate> {
        vec![Gate::new("G1"), Gate::new("R1").remote()]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_flights(), &sample_gates()).is_ok());
    }

    #[test]
    fn test_duplicate_flight_id() {
        let mut flights = sample_flights();
        flights.push(Flight::new("F1", ts(14, 0), ts(15, 0)));

        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("F1")));
    }

    #[test]
    fn test_duplicate_gate_id() {
        let gates = vec![Gate::new("G1"), Gate::new("G1")];
        let errors = validate_input(&sample_flights(), &gates).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("gate")));
    }

    #[test]
    fn test_empty_ids() {
        let flights = vec![Flight::new("  ", ts(10, 0), ts(11, 0))];
        let gates = vec![Gate::new("")];
        let errors = validate_input(&flights, &gates).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyId)
                .count(),
            2
        );
    }

    #[test]
    fn test_arrival_not_before_departure() {
        let flights = vec![
            Flight::new("backwards", ts(12, 0), ts(11, 0)),
            Flight::new("zero_width", ts(12, 0), ts(12, 0)),
        ];
        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidTimeWindow)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_turnaround() {
        let flights = vec![Flight::new("F1", ts(10, 0), ts(11, 0)).with_turnaround(-5)];
        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeTurnaround));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let flights = vec![
            Flight::new("F1", ts(12, 0), ts(11, 0)), // Backwards window
            Flight::new("F1", ts(10, 0), ts(11, 0)), // Duplicate ID
        ];
        let errors = validate_input(&flights, &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
