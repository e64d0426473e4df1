//! Greedy gate assignment engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `GateScheduler` runs a deterministic, single-pass greedy heuristic:
//! flights are processed in `(priority, arrival)` order, contact gates are
//! tried before remote stands, and among qualifying gates the one that freed
//! up earliest wins. It is fast and predictable, not optimal — it never
//! revisits an earlier assignment and does not minimize the unassigned count.
//!
//! # KPI
//!
//! `AssignmentKpi` summarizes a run: assigned/unassigned counts, domestic
//! versus international split, and flights per gate.
//!
//! # Reference
//!
//! Dorndorf et al. (2007), "Flight gate scheduling: State-of-the-art and
//! recent developments"

mod greedy;
mod kpi;

pub use greedy::{GateScheduler, ScheduleRequest};
pub use kpi::AssignmentKpi;
