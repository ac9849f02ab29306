//! Vertex enumeration by intersecting every `d`-subset of constraints.
//!
//! Algorithm
//! - Visit all `C(n, d)` combinations in lexicographic index order.
//! - Solve each as a square system (`solve::solve_system`). Degenerate
//!   systems are recorded and skipped; they never abort the run.
//! - For a solved point, evaluate the objective and the feasibility filter on
//!   the unrounded value. Rounded coordinates are for display only.
//! - A rejected point whose rounded coordinates satisfy every constraint up to
//!   the rounding margin is flagged as a rounding-boundary case.
//! - Feasible points are appended as vertices, subject to `DedupPolicy`.
//!
//! Scheduling
//! - Combinations are independent. With `EnumCfg::parallel` the per-combination
//!   work runs on rayon; results are collected in input order and folded
//!   sequentially, so the output is identical to the sequential run.
//!
//! Complexity: `C(n, d)` LU solves of size `d`, each followed by an `O(n d)`
//! feasibility check.

pub mod feasible;
pub mod solve;
mod types;

pub use feasible::{is_feasible, is_feasible_rounded, rounding_margin, tight, violated};
pub use solve::{determinant, solve_system, Solution};
pub use types::{Combination, CombinationReport, Enumeration, Goal, Outcome, Solved, Vertex};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::region::util::{find_near, round_to, round_vec, Combinations};
use crate::region::{DedupPolicy, EnumCfg, Equation, InputError, Objective, Region};

/// Enumerate the vertices of `region`, reporting `objective` at each solved point.
///
/// Fails only on invalid `objective` or `cfg`; the region is already
/// validated by construction.
pub fn enumerate_vertices(
    region: &Region,
    objective: &Objective,
    cfg: &EnumCfg,
) -> Result<Enumeration, InputError> {
    cfg.validate()?;
    region.check_objective(objective)?;
    let combos = Combinations::new(region.len(), region.dim());
    let evaluated: Vec<(Combination, Outcome)> = if cfg.parallel {
        combos
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|comb| {
                let outcome = evaluate(region, objective, &comb, cfg);
                (comb, outcome)
            })
            .collect()
    } else {
        combos
            .map(|comb| {
                let outcome = evaluate(region, objective, &comb, cfg);
                (comb, outcome)
            })
            .collect()
    };
    Ok(assemble(region.dim(), evaluated, cfg.dedup))
}

/// Same as `enumerate_vertices` with `parallel` forced on.
pub fn enumerate_vertices_par(
    region: &Region,
    objective: &Objective,
    cfg: &EnumCfg,
) -> Result<Enumeration, InputError> {
    let cfg = EnumCfg {
        parallel: true,
        ..*cfg
    };
    enumerate_vertices(region, objective, &cfg)
}

/// Solve and classify one combination. Pure; safe to run on any thread.
fn evaluate(region: &Region, objective: &Objective, comb: &[usize], cfg: &EnumCfg) -> Outcome {
    let cs = region.constraints();
    let eqs: Vec<Equation<'_>> = comb.iter().map(|&i| cs[i].equation()).collect();
    let point = match solve_system(&eqs, cfg.eps_det) {
        Solution::Point(x) => x,
        Solution::Degenerate => return Outcome::Degenerate,
    };
    let display = round_vec(&point, cfg.display_decimals);
    let value = objective.eval(&point);
    let feasible = is_feasible(&point, cs, cfg.eps_feas);
    // Rejected, yet the printed coordinates pass once rounding error is allowed for.
    let rounding_boundary =
        !feasible && is_feasible_rounded(&display, cs, cfg.eps_feas, cfg.display_decimals);
    Outcome::Solved(Solved {
        display,
        value,
        display_value: round_to(value, cfg.display_decimals),
        feasible,
        rounding_boundary,
        duplicate_of: None,
        point,
    })
}

/// Fold per-combination outcomes, in visiting order, into the run result.
fn assemble(dim: usize, evaluated: Vec<(Combination, Outcome)>, dedup: DedupPolicy) -> Enumeration {
    let mut out = Enumeration {
        dim,
        reports: Vec::with_capacity(evaluated.len()),
        ..Default::default()
    };
    for (comb, mut outcome) in evaluated {
        match &mut outcome {
            Outcome::Degenerate => {
                debug!(combination = ?comb, "degenerate");
                out.unsolvable.push(comb.clone());
            }
            Outcome::Solved(s) => {
                debug!(
                    combination = ?comb,
                    point = ?s.display.as_slice(),
                    value = s.display_value,
                    feasible = s.feasible,
                    "solved"
                );
                if s.rounding_boundary {
                    warn!(
                        combination = ?comb,
                        point = ?s.display.as_slice(),
                        "outside the region, but the rounded point looks inside"
                    );
                }
                if s.feasible {
                    let dup = match dedup {
                        DedupPolicy::KeepAll => None,
                        DedupPolicy::Euclidean(eps) => {
                            find_near(out.vertices.iter().map(|v| &v.point), &s.point, eps)
                        }
                    };
                    match dup {
                        Some(k) => s.duplicate_of = Some(k),
                        None => out.vertices.push(Vertex {
                            combination: comb.clone(),
                            point: s.point.clone(),
                            display: s.display.clone(),
                            value: s.value,
                            display_value: s.display_value,
                        }),
                    }
                }
            }
        }
        out.reports.push(CombinationReport {
            combination: comb,
            outcome,
        });
    }
    info!(
        combinations = out.combination_count(),
        degenerate = out.degenerate_count(),
        feasible = out.feasible_count(),
        vertices = out.vertices.len(),
        "enumeration done"
    );
    out
}
