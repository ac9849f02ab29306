//! Regions in R^d given by finitely many linear inequalities.
//!
//! Assumptions and conventions
//! - A constraint is `a·x >= b` or `a·x <= b`; `a` is not normalized and the
//!   direction is fixed at construction.
//! - A `Region` is validated once on construction (dimension, coefficient
//!   counts, finiteness, at least `d` constraints) and is read-only afterwards.
//! - Membership is inclusive with slack `cfg::FEAS_EPS` unless the caller
//!   passes its own tolerance.
//!
//! Code cross-refs: `crate::enumerate` (consumer), `crate::report` (display).

pub mod cfg;
pub mod rand;
pub mod special;
mod types;
pub mod util;

pub use cfg::{DedupPolicy, EnumCfg};
pub use types::{Constraint, Direction, Equation, InputError, Objective, Region};

#[cfg(test)]
mod tests_special;
