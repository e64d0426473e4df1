//! Input normalization.
//!
//! Parses raw tabular flight and gate records into canonical models:
//! timestamps from common textual formats, lower-cased enums, tokenized
//! compatibility lists, truthy remote flags, and explicit defaults for
//! optional columns. Normalization is the only error path of a scheduling
//! run — a malformed record fails the whole run with no partial output.

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{CountryType, Flight, Gate, GateCountry, DEFAULT_PRIORITY};

/// Error raised for a record the normalizer cannot make canonical.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A required column is missing or blank.
    #[error("missing required column '{column}' in {record} record")]
    MissingField {
        /// Record kind ("flight" or "gate").
        record: &'static str,
        /// Column name.
        column: &'static str,
    },
    /// A timestamp column did not match any accepted format.
    #[error("unparsable timestamp '{value}' in column '{column}'")]
    Timestamp {
        /// Column name.
        column: &'static str,
        /// Offending input.
        value: String,
    },
    /// An integer column held a non-numeric value.
    #[error("invalid integer '{value}' in column '{column}'")]
    Number {
        /// Column name.
        column: &'static str,
        /// Offending input.
        value: String,
    },
}

/// A raw flight record as read from the flights table.
///
/// Every field is an optional string; defaulting and coercion happen once
/// here, not ad hoc at each access site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlight {
    /// Unique flight identifier (required).
    pub flight_id: Option<String>,
    /// Airline label.
    pub airline: Option<String>,
    /// Aircraft type (required).
    pub aircraft_type: Option<String>,
    /// Arrival timestamp (required).
    pub arrival: Option<String>,
    /// Departure timestamp (required).
    pub departure: Option<String>,
    /// Turnaround minutes, default 0.
    pub turnaround_minutes: Option<String>,
    /// Priority, default 2.
    pub priority: Option<String>,
    /// `domestic` (default) or `international`.
    pub country_type: Option<String>,
}

/// A raw gate record as read from the gates table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGate {
    /// Unique gate identifier (required).
    pub gate_id: Option<String>,
    /// `domestic`, `international`, or `mixed` (default).
    pub country_type: Option<String>,
    /// Free-form label, default `contact`.
    pub gate_type: Option<String>,
    /// Truthy string (`yes/y/1/true/t`), anything else is false.
    pub is_remote_gate: Option<String>,
    /// Comma- or pipe-delimited tokens; empty means wildcard.
    pub compatible_aircraft: Option<String>,
}

/// Accepted textual timestamp formats, tried in order after RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parses a timestamp from any accepted textual representation.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn required<'a>(
    field: &'a Option<String>,
    record: &'static str,
    column: &'static str,
) -> Result<&'a str, NormalizeError> {
    match field.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(NormalizeError::MissingField { record, column }),
    }
}

fn timestamp_field(value: &str, column: &'static str) -> Result<NaiveDateTime, NormalizeError> {
    parse_timestamp(value).ok_or_else(|| NormalizeError::Timestamp {
        column,
        value: value.to_string(),
    })
}

/// Integer column with a default for missing/blank values. A present but
/// non-numeric value is an error, not a silent default.
fn int_field(
    field: &Option<String>,
    column: &'static str,
    default: i64,
) -> Result<i64, NormalizeError> {
    match field.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| NormalizeError::Number {
            column,
            value: v.to_string(),
        }),
    }
}

fn flight_country(field: &Option<String>) -> CountryType {
    match field.as_deref().map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "international" => CountryType::International,
        _ => CountryType::Domestic,
    }
}

fn gate_country(field: &Option<String>) -> GateCountry {
    match field.as_deref().map(|s| s.trim().to_lowercase()).as_deref() {
        Some("domestic") => GateCountry::Domestic,
        Some("international") => GateCountry::International,
        _ => GateCountry::Mixed,
    }
}

/// Truthy-token parse for the remote flag.
fn is_truthy(field: &Option<String>) -> bool {
    matches!(
        field
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .as_deref(),
        Some("yes" | "y" | "1" | "true" | "t")
    )
}

/// Tokenizes a compatibility list: split on `|` if present, else on `,`;
/// tokens trimmed, empties dropped; an empty result is the wildcard.
fn compatibility_tokens(field: &Option<String>) -> Vec<String> {
    let tokens: Vec<String> = match field.as_deref().map(str::trim) {
        None | Some("") => Vec::new(),
        Some(s) => {
            let delimiter = if s.contains('|') { '|' } else { ',' };
            s.split(delimiter)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        }
    };
    if tokens.is_empty() {
        vec!["all".to_string()]
    } else {
        tokens
    }
}

/// Normalizes one raw flight record.
pub fn normalize_flight(raw: &RawFlight) -> Result<Flight, NormalizeError> {
    let flight_id = required(&raw.flight_id, "flight", "flight_id")?;
    let aircraft_type = required(&raw.aircraft_type, "flight", "aircraft_type")?;
    let arrival = timestamp_field(required(&raw.arrival, "flight", "arrival")?, "arrival")?;
    let departure = timestamp_field(
        required(&raw.departure, "flight", "departure")?,
        "departure",
    )?;
    let turnaround = int_field(&raw.turnaround_minutes, "turnaround_minutes", 0)?;
    let priority = int_field(&raw.priority, "priority", i64::from(DEFAULT_PRIORITY))? as i32;

    Ok(Flight::new(flight_id, arrival, departure)
        .with_airline(raw.airline.as_deref().unwrap_or("").trim())
        .with_aircraft_type(aircraft_type)
        .with_turnaround(turnaround)
        .with_priority(priority)
        .with_country(flight_country(&raw.country_type)))
}

/// Normalizes one raw gate record.
pub fn normalize_gate(raw: &RawGate) -> Result<Gate, NormalizeError> {
    let gate_id = required(&raw.gate_id, "gate", "gate_id")?;
    let gate_type = raw
        .gate_type
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "contact".to_string());

    let mut gate = Gate::new(gate_id)
        .with_country(gate_country(&raw.country_type))
        .with_gate_type(gate_type)
        .with_compatible_aircraft(compatibility_tokens(&raw.compatible_aircraft));
    if is_truthy(&raw.is_remote_gate) {
        gate = gate.remote();
    }
    Ok(gate)
}

/// Normalizes a flights table, preserving input order. The first malformed
/// record fails the whole batch.
pub fn normalize_flights(raws: &[RawFlight]) -> Result<Vec<Flight>, NormalizeError> {
    raws.iter().map(normalize_flight).collect()
}

/// Normalizes a gates table, preserving input order.
pub fn normalize_gates(raws: &[RawGate]) -> Result<Vec<Gate>, NormalizeError> {
    raws.iter().map(normalize_gate).collect()
}
