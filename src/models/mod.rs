//! Gate assignment domain models.
//!
//! Core data types for one scheduling run. All entities are created fresh
//! per invocation from the two input tables; nothing persists across runs.
//!
//! # Domain Mapping
//!
//! | gate-assign | Airport |
//! |-------------|---------|
//! | Flight | Arriving/departing aircraft movement |
//! | Gate | Contact gate or remote apron stand |
//! | AssignmentRow | One line of the assignment board |

mod assignment;
mod flight;
mod gate;

pub use assignment::{AssignmentRow, AssignmentStatus, AssignmentTable, UNASSIGNED_GATE};
pub use flight::{CountryType, Flight, DEFAULT_PRIORITY};
pub use gate::{AircraftMatch, Gate, GateCountry};
