//! Feasibility filter: a point is inside iff every constraint holds.

use nalgebra::DVector;

use crate::region::Constraint;

/// All constraints hold with slack `>= -eps` (inclusive at equality).
#[inline]
pub fn is_feasible(x: &DVector<f64>, constraints: &[Constraint], eps: f64) -> bool {
    constraints.iter().all(|c| c.satisfies_eps(x, eps))
}

/// Indices of constraints violated by more than `eps`.
pub fn violated(x: &DVector<f64>, constraints: &[Constraint], eps: f64) -> Vec<usize> {
    constraints
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.satisfies_eps(x, eps))
        .map(|(i, _)| i)
        .collect()
}

/// Largest change in `c.slack(x)` when every coordinate of `x` is rounded to
/// `decimals` places: `0.5 * 10^-decimals * |a|_1`.
pub fn rounding_margin(c: &Constraint, decimals: u32) -> f64 {
    let step = 0.5 * 10f64.powi(-(decimals as i32));
    step * c.a.iter().map(|v| v.abs()).sum::<f64>()
}

/// Feasibility of a rounded point: each constraint is widened by its rounding margin.
pub fn is_feasible_rounded(
    x: &DVector<f64>,
    constraints: &[Constraint],
    eps: f64,
    decimals: u32,
) -> bool {
    constraints
        .iter()
        .all(|c| c.satisfies_eps(x, eps + rounding_margin(c, decimals)))
}

/// Indices of constraints active at `x` (`|slack| <= eps`).
pub fn tight(x: &DVector<f64>, constraints: &[Constraint], eps: f64) -> Vec<usize> {
    constraints
        .iter()
        .enumerate()
        .filter(|(_, c)| c.slack(x).abs() <= eps)
        .map(|(i, _)| i)
        .collect()
}
