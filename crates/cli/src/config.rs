//! Region config files (JSON).
//!
//! ```json
//! {
//!   "dimension": 3,
//!   "constraints": [
//!     [1, -1, -1, -4],
//!     { "coefficients": [4, -2, 1], "threshold": 1, "direction": "at_least" }
//!   ],
//!   "objective": { "coefficients": [1, -1, 0], "constant": 0 }
//! }
//! ```
//! A bare row `[a_1, …, a_d, b]` means `a·x >= b`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use vertenum::api::{reference_objective, Constraint, Direction, Objective, Region, REFERENCE_ROWS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSpec {
    #[default]
    AtLeast,
    AtMost,
}

impl From<DirectionSpec> for Direction {
    fn from(d: DirectionSpec) -> Self {
        match d {
            DirectionSpec::AtLeast => Direction::AtLeast,
            DirectionSpec::AtMost => Direction::AtMost,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintSpec {
    Row(Vec<f64>),
    Full {
        coefficients: Vec<f64>,
        threshold: f64,
        #[serde(default)]
        direction: DirectionSpec,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub constant: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionFile {
    pub dimension: usize,
    pub constraints: Vec<ConstraintSpec>,
    #[serde(default)]
    pub objective: Option<ObjectiveSpec>,
}

impl RegionFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading region config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing region config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The built-in six-constraint region with `f = x - y`.
    pub fn reference() -> Self {
        let f = reference_objective();
        Self {
            dimension: 3,
            constraints: REFERENCE_ROWS
                .iter()
                .map(|row| ConstraintSpec::Row(row.to_vec()))
                .collect(),
            objective: Some(ObjectiveSpec {
                coefficients: f.c.as_slice().to_vec(),
                constant: f.c0,
            }),
        }
    }

    /// Validate and convert; the objective defaults to zero.
    pub fn into_problem(self) -> Result<(Region, Objective)> {
        let dim = self.dimension;
        let mut cs = Vec::with_capacity(self.constraints.len());
        for (index, spec) in self.constraints.into_iter().enumerate() {
            let c = match spec {
                ConstraintSpec::Row(row) => {
                    if row.len() != dim + 1 {
                        bail!(
                            "constraint {index}: row has {} entries, expected {} (coefficients + threshold)",
                            row.len(),
                            dim + 1
                        );
                    }
                    match Constraint::from_row(&row) {
                        Some(c) => c,
                        None => bail!("constraint {index}: empty row"),
                    }
                }
                ConstraintSpec::Full {
                    coefficients,
                    threshold,
                    direction,
                } => Constraint::new(DVector::from_vec(coefficients), threshold, direction.into()),
            };
            cs.push(c);
        }
        let region = Region::new(dim, cs)?;
        let objective = match self.objective {
            Some(o) => Objective::new(&o.coefficients).with_constant(o.constant),
            None => Objective::zero(dim),
        };
        region.check_objective(&objective)?;
        Ok((region, objective))
    }
}
