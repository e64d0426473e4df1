//! Assignment run metrics (KPIs).
//!
//! Summarizes one scheduling run for dashboards and reports.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment Rate | assigned / total (1.0 for an empty run) |
//! | Domestic / International | Flight split by country type |
//! | Flights by Gate | Assigned-flight count per gate |

use std::collections::HashMap;

use crate::models::{AssignmentTable, CountryType};

/// Summary metrics of one assignment run.
#[derive(Debug, Clone)]
pub struct AssignmentKpi {
    /// Total flights processed.
    pub total_flights: usize,
    /// Flights that claimed a gate.
    pub assigned_count: usize,
    /// Flights left unassigned.
    pub unassigned_count: usize,
    /// Fraction of flights assigned (0.0..1.0; 1.0 when the run is empty).
    pub assignment_rate: f64,
    /// Domestic flight count.
    pub domestic_flights: usize,
    /// International flight count.
    pub international_flights: usize,
    /// Assigned-flight count per gate (gates with no assignments absent).
    pub flights_by_gate: HashMap<String, usize>,
}

impl AssignmentKpi {
    /// Computes KPIs from a completed assignment table.
    pub fn calculate(table: &AssignmentTable) -> Self {
        let total_flights = table.len();
        let assigned_count = table.assigned_count();

        let mut flights_by_gate: HashMap<String, usize> = HashMap::new();
        let mut international_flights = 0;
        for row in table.iter() {
            if row.country_type == CountryType::International {
                international_flights += 1;
            }
            if row.is_assigned() {
                *flights_by_gate.entry(row.assigned_gate.clone()).or_insert(0) += 1;
            }
        }

        let assignment_rate = if total_flights == 0 {
            1.0
        } else {
            assigned_count as f64 / total_flights as f64
        };

        Self {
            total_flights,
            assigned_count,
            unassigned_count: total_flights - assigned_count,
            assignment_rate,
            domestic_flights: total_flights - international_flights,
            international_flights,
            flights_by_gate,
        }
    }
}
