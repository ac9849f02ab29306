//! Flat re-export surface for binaries and benches.
//!
//! Prefer these paths over reaching into submodules; the module layout may
//! move, this list should not.

pub use crate::enumerate::{
    determinant, enumerate_vertices, enumerate_vertices_par, is_feasible, is_feasible_rounded,
    rounding_margin, solve_system, tight, violated, Combination, CombinationReport, Enumeration, Goal, Outcome, Solution, Solved,
    Vertex,
};
pub use crate::region::rand::{random_region, RandomRegionCfg};
pub use crate::region::special::{
    reference_objective, reference_region, square_pyramid, unit_box, REFERENCE_ROWS,
};
pub use crate::region::util::{binomial, round_to, Combinations};
pub use crate::region::{
    Constraint, DedupPolicy, Direction, EnumCfg, Equation, InputError, Objective, Region,
};
pub use crate::report::{axis_names, fmt_constraint, PlotData, TextReport};

/// Enumerate with default settings and render the console report.
pub fn enumerate_and_report(
    region: &Region,
    objective: &Objective,
) -> Result<(Enumeration, String), InputError> {
    let run = enumerate_vertices(region, objective, &EnumCfg::default())?;
    let text = TextReport::new(&run, region).to_string();
    Ok((run, text))
}
