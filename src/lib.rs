//! Airport gate assignment engine.
//!
//! Assigns arriving/departing flights to physical airport gates subject to
//! compatibility, timing, and priority constraints. Each flight ends up with
//! either a confirmed gate or an `unassigned` outcome — absence of a fit is
//! a modeled result, not an error.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Flight`, `Gate`, `AssignmentRow`,
//!   `AssignmentTable`
//! - **`normalize`**: Raw tabular records → canonical models
//! - **`ordering`**: Flight processing order (priority, then arrival)
//! - **`timeline`**: Per-gate occupied-interval store
//! - **`scheduler`**: The greedy assignment engine and KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, time windows)
//!
//! # Algorithm
//!
//! A deterministic, single-pass greedy heuristic: flights are processed in
//! `(priority, arrival)` order; each claims the qualifying gate that freed up
//! earliest, preferring contact gates over remote stands. It is not a global
//! optimizer and never revisits earlier assignments.
//!
//! # References
//!
//! - Dorndorf et al. (2007), "Flight gate scheduling: State-of-the-art and
//!   recent developments"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod normalize;
pub mod ordering;
pub mod scheduler;
pub mod timeline;
pub mod validation;
