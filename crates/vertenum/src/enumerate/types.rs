//! Result types of one enumeration run.

use nalgebra::DVector;

/// Strictly increasing constraint indices, `d` of them.
pub type Combination = Vec<usize>;

/// Which extreme of the objective to pick among vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    Minimize,
    Maximize,
}

/// A solved combination, with full-precision and display values.
#[derive(Clone, Debug, PartialEq)]
pub struct Solved {
    pub point: DVector<f64>,
    /// `point` rounded for display; never used for classification.
    pub display: DVector<f64>,
    /// Objective at the unrounded point.
    pub value: f64,
    pub display_value: f64,
    /// Classification of the unrounded point.
    pub feasible: bool,
    /// Infeasible, but `display` satisfies every constraint within its rounding margin.
    pub rounding_boundary: bool,
    /// Set when the dedup policy folded this point into an earlier vertex.
    pub duplicate_of: Option<usize>,
}

/// What happened to one combination.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Degenerate,
    Solved(Solved),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CombinationReport {
    pub combination: Combination,
    pub outcome: Outcome,
}

impl CombinationReport {
    #[inline]
    pub fn solved(&self) -> Option<&Solved> {
        match &self.outcome {
            Outcome::Solved(s) => Some(s),
            Outcome::Degenerate => None,
        }
    }
}

/// Feasible intersection point of `d` constraint boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// First combination (in visiting order) that produced this point.
    pub combination: Combination,
    pub point: DVector<f64>,
    pub display: DVector<f64>,
    pub value: f64,
    pub display_value: f64,
}

/// Everything one run produced.
///
/// Invariants:
/// - `reports` has one entry per combination, in lexicographic order.
/// - `unsolvable` lists exactly the degenerate combinations, same order.
/// - `vertices` is in the order of the first feasible combination per vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Enumeration {
    pub dim: usize,
    pub reports: Vec<CombinationReport>,
    pub vertices: Vec<Vertex>,
    pub unsolvable: Vec<Combination>,
}

impl Enumeration {
    #[inline]
    pub fn combination_count(&self) -> usize {
        self.reports.len()
    }

    #[inline]
    pub fn degenerate_count(&self) -> usize {
        self.unsolvable.len()
    }

    pub fn solved_count(&self) -> usize {
        self.reports.iter().filter(|r| r.solved().is_some()).count()
    }

    pub fn feasible_count(&self) -> usize {
        self.reports
            .iter()
            .filter_map(CombinationReport::solved)
            .filter(|s| s.feasible)
            .count()
    }

    pub fn infeasible_count(&self) -> usize {
        self.solved_count() - self.feasible_count()
    }

    pub fn rounding_boundary_count(&self) -> usize {
        self.reports
            .iter()
            .filter_map(CombinationReport::solved)
            .filter(|s| s.rounding_boundary)
            .count()
    }

    /// Vertex with the smallest/largest objective; first one wins ties.
    pub fn best_vertex(&self, goal: Goal) -> Option<&Vertex> {
        let mut best: Option<&Vertex> = None;
        for v in &self.vertices {
            let better = match (best, goal) {
                (None, _) => true,
                (Some(b), Goal::Minimize) => v.value < b.value,
                (Some(b), Goal::Maximize) => v.value > b.value,
            };
            if better {
                best = Some(v);
            }
        }
        best
    }
}
