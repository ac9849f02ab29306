//! Vertex enumeration for regions bounded by linear inequalities.
//!
//! Every `d`-subset of the constraints is solved as a square linear system;
//! solutions that satisfy the full constraint set are the region's vertices.
//!
//! Layout
//! - `region`: constraints, objectives, validation, tolerances, generators.
//! - `enumerate`: linear solve, feasibility filter, the enumerator itself.
//! - `report`: console report and plot handoff (read-only consumers).

pub mod api;
pub mod enumerate;
pub mod region;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::enumerate::{
        enumerate_vertices, enumerate_vertices_par, Enumeration, Goal, Outcome, Vertex,
    };
    pub use crate::region::special::{reference_objective, reference_region};
    pub use crate::region::{
        Constraint, DedupPolicy, Direction, EnumCfg, InputError, Objective, Region,
    };
    pub use crate::report::{PlotData, TextReport};
    pub use nalgebra::DVector;
}
