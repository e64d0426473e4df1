//! Gate model.
//!
//! A gate is the resource flights compete for. Each gate carries a country
//! clearance, a remote/contact flag, and an ordered aircraft-compatibility
//! list; the two `accepts_*` predicates implement the candidate filters.

use serde::{Deserialize, Serialize};

use super::CountryType;

/// Gate country clearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateCountry {
    /// Domestic traffic only.
    Domestic,
    /// International traffic (also accepts domestic flights).
    International,
    /// Either kind of traffic (the column default).
    #[default]
    Mixed,
}

/// Aircraft compatibility matching mode.
///
/// The default is a case-insensitive bidirectional substring match, so the
/// token `"A320"` matches the aircraft `"A320neo"` and vice versa. That also
/// means a token like `"73"` matches `"B737"`; `Exact` is the strict
/// alternative for operators who consider that a misfeature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftMatch {
    /// Wildcard, case-insensitive equality, or substring in either direction.
    #[default]
    Fuzzy,
    /// Wildcard or case-insensitive equality only.
    Exact,
}

/// Token that matches every aircraft type.
const WILDCARD: &str = "all";

/// A physical airport gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    /// Unique gate identifier.
    pub gate_id: String,
    /// Country clearance.
    pub country_type: GateCountry,
    /// Free-form gate label (informational only).
    pub gate_type: String,
    /// Remote stand (apron position requiring bus transport). Remote gates
    /// are only considered when no contact gate qualifies.
    pub is_remote: bool,
    /// Ordered aircraft-compatibility tokens. `["all"]` is the wildcard.
    pub compatible_aircraft: Vec<String>,
}

impl Gate {
    /// Creates a contact gate with mixed clearance and wildcard compatibility.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            gate_id: id.into(),
            country_type: GateCountry::Mixed,
            gate_type: "contact".to_string(),
            is_remote: false,
            compatible_aircraft: vec![WILDCARD.to_string()],
        }
    }

    /// Sets the country clearance.
    pub fn with_country(mut self, country_type: GateCountry) -> Self {
        self.country_type = country_type;
        self
    }

    /// Sets the informational gate label.
    pub fn with_gate_type(mut self, gate_type: impl Into<String>) -> Self {
        self.gate_type = gate_type.into();
        self
    }

    /// Marks the gate as a remote stand.
    pub fn remote(mut self) -> Self {
        self.is_remote = true;
        self
    }

    /// Replaces the compatibility list.
    pub fn with_compatible_aircraft<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatible_aircraft = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Country rule: international flights require an international or mixed
    /// gate; domestic flights fit any gate.
    pub fn accepts_country(&self, country: CountryType) -> bool {
        match country {
            CountryType::International => matches!(
                self.country_type,
                GateCountry::International | GateCountry::Mixed
            ),
            CountryType::Domestic => true,
        }
    }

    /// Aircraft rule: whether any compatibility token matches the aircraft
    /// type under the given matching mode.
    pub fn accepts_aircraft(&self, aircraft_type: &str, mode: AircraftMatch) -> bool {
        let aircraft = aircraft_type.trim().to_lowercase();
        self.compatible_aircraft.iter().any(|token| {
            let token = token.trim().to_lowercase();
            if token == WILDCARD || token == aircraft {
                return true;
            }
            mode == AircraftMatch::Fuzzy
                && (aircraft.contains(&token) || token.contains(&aircraft))
        })
    }
}
