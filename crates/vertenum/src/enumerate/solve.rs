//! Square linear solve for one combination of equations.
//!
//! - `solve_system`: LU with partial pivoting; a singular (or numerically
//!   singular) matrix is a normal outcome, returned as `Solution::Degenerate`.
//! - Each equation is first divided by its largest coefficient magnitude, so
//!   every row has max norm 1. A pivot `|u_ii| <= eps_det` of the scaled
//!   matrix counts as zero. Rescaling any single equation does not change
//!   the classification.

use nalgebra::{DMatrix, DVector};

use crate::region::Equation;

/// Result of solving `d` equations in `d` unknowns.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Unique intersection point of the hyperplanes.
    Point(DVector<f64>),
    /// Parallel, coincident, or otherwise dependent hyperplanes.
    Degenerate,
}

impl Solution {
    #[inline]
    pub fn point(&self) -> Option<&DVector<f64>> {
        match self {
            Solution::Point(x) => Some(x),
            Solution::Degenerate => None,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solution::Degenerate)
    }
}

/// Coefficient matrix (one row per equation) and constant vector.
pub fn system(eqs: &[Equation<'_>]) -> (DMatrix<f64>, DVector<f64>) {
    let d = eqs.len();
    debug_assert!(
        eqs.iter().all(|e| e.a.len() == d),
        "square system expected: {d} equations"
    );
    let m = DMatrix::from_fn(d, d, |i, j| eqs[i].a[j]);
    let rhs = DVector::from_fn(d, |i, _| eqs[i].b);
    (m, rhs)
}

/// Determinant of the coefficient matrix (diagnostics and tests).
pub fn determinant(eqs: &[Equation<'_>]) -> f64 {
    system(eqs).0.determinant()
}

/// Solve `A x = b` for the equations' rows; `Degenerate` if `A` is singular.
pub fn solve_system(eqs: &[Equation<'_>], eps_det: f64) -> Solution {
    if eqs.is_empty() {
        return Solution::Degenerate;
    }
    let (mut m, mut rhs) = system(eqs);
    for i in 0..m.nrows() {
        let scale = m.row(i).amax();
        if scale == 0.0 || !scale.is_finite() {
            return Solution::Degenerate;
        }
        m.row_mut(i).unscale_mut(scale);
        rhs[i] /= scale;
    }
    let lu = m.lu();
    if lu.u().diagonal().amin() <= eps_det {
        return Solution::Degenerate;
    }
    match lu.solve(&rhs) {
        Some(x) if x.iter().all(|v| v.is_finite()) => Solution::Point(x),
        _ => Solution::Degenerate,
    }
}
