//! Core region types: constraints, their equation view, objectives.

use std::fmt;

use nalgebra::DVector;

/// Errors raised while validating a region before enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Dimension must be positive.
    ZeroDimension,
    /// Constraint `index` has the wrong number of coefficients.
    CoefficientCount {
        index: usize,
        expected: usize,
        got: usize,
    },
    /// Constraint `index` has a NaN or infinite entry.
    NonFinite { index: usize },
    /// Fewer constraints than unknowns: no combination can be formed.
    TooFewConstraints { have: usize, need: usize },
    /// Objective coefficient count differs from the region dimension.
    ObjectiveDimension { expected: usize, got: usize },
    /// Objective has a NaN or infinite entry.
    NonFiniteObjective,
    /// A tolerance or display setting is out of range.
    InvalidTolerance { name: &'static str, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "dimension must be at least 1"),
            Self::CoefficientCount {
                index,
                expected,
                got,
            } => write!(
                f,
                "constraint {index} has {got} coefficients, expected {expected}"
            ),
            Self::NonFinite { index } => {
                write!(f, "constraint {index} has a non-finite coefficient or threshold")
            }
            Self::TooFewConstraints { have, need } => write!(
                f,
                "need at least {need} constraints to form a vertex, got {have}"
            ),
            Self::ObjectiveDimension { expected, got } => write!(
                f,
                "objective has {got} coefficients, expected {expected}"
            ),
            Self::NonFiniteObjective => write!(f, "objective has a non-finite coefficient"),
            Self::InvalidTolerance { name, value } => {
                write!(f, "invalid setting {name} = {value}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Comparison direction of a constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `a·x >= b`
    #[default]
    AtLeast,
    /// `a·x <= b`
    AtMost,
}

impl Direction {
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::AtLeast => ">=",
            Direction::AtMost => "<=",
        }
    }
}

/// Closed half-space `a · x (>= | <=) b`.
///
/// Invariants:
/// - `a` is not normalized; `b` is any finite real.
/// - Membership is inclusive: `slack(x) >= -eps`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub a: DVector<f64>,
    pub b: f64,
    pub dir: Direction,
}

impl Constraint {
    #[inline]
    pub fn new(a: DVector<f64>, b: f64, dir: Direction) -> Self {
        Self { a, b, dir }
    }

    /// `a · x >= b`
    pub fn at_least(a: &[f64], b: f64) -> Self {
        Self::new(DVector::from_row_slice(a), b, Direction::AtLeast)
    }

    /// `a · x <= b`
    pub fn at_most(a: &[f64], b: f64) -> Self {
        Self::new(DVector::from_row_slice(a), b, Direction::AtMost)
    }

    /// Row `[a_1, …, a_d, b]` read as `a · x >= b`. `None` for an empty row.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        let (&b, a) = row.split_last()?;
        Some(Self::at_least(a, b))
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub fn lhs(&self, x: &DVector<f64>) -> f64 {
        self.a.dot(x)
    }

    /// Signed distance (in units of `a`) to the boundary; `>= 0` inside.
    #[inline]
    pub fn slack(&self, x: &DVector<f64>) -> f64 {
        match self.dir {
            Direction::AtLeast => self.lhs(x) - self.b,
            Direction::AtMost => self.b - self.lhs(x),
        }
    }

    #[inline]
    pub fn satisfies_eps(&self, x: &DVector<f64>, eps: f64) -> bool {
        self.slack(x) >= -eps
    }

    /// The same coefficients read as `a · x = b`.
    #[inline]
    pub fn equation(&self) -> Equation<'_> {
        Equation {
            a: &self.a,
            b: self.b,
        }
    }

    fn is_finite(&self) -> bool {
        self.b.is_finite() && self.a.iter().all(|v| v.is_finite())
    }
}

/// Borrowed equality view `a · x = b` of a constraint.
#[derive(Clone, Copy, Debug)]
pub struct Equation<'a> {
    pub a: &'a DVector<f64>,
    pub b: f64,
}

/// Linear objective `c · x + c0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Objective {
    pub c: DVector<f64>,
    pub c0: f64,
}

impl Objective {
    pub fn new(c: &[f64]) -> Self {
        Self {
            c: DVector::from_row_slice(c),
            c0: 0.0,
        }
    }

    pub fn with_constant(mut self, c0: f64) -> Self {
        self.c0 = c0;
        self
    }

    /// The zero functional on R^d.
    pub fn zero(dim: usize) -> Self {
        Self {
            c: DVector::zeros(dim),
            c0: 0.0,
        }
    }

    #[inline]
    pub fn eval(&self, x: &DVector<f64>) -> f64 {
        self.c.dot(x) + self.c0
    }
}

/// Validated, read-only constraint list in R^d.
///
/// Invariants:
/// - `dim >= 1` and every constraint has exactly `dim` coefficients.
/// - At least `dim` constraints.
/// - All entries finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    dim: usize,
    constraints: Vec<Constraint>,
}

impl Region {
    pub fn new(dim: usize, constraints: Vec<Constraint>) -> Result<Self, InputError> {
        if dim == 0 {
            return Err(InputError::ZeroDimension);
        }
        for (index, c) in constraints.iter().enumerate() {
            if c.dim() != dim {
                return Err(InputError::CoefficientCount {
                    index,
                    expected: dim,
                    got: c.dim(),
                });
            }
            if !c.is_finite() {
                return Err(InputError::NonFinite { index });
            }
        }
        if constraints.len() < dim {
            return Err(InputError::TooFewConstraints {
                have: constraints.len(),
                need: dim,
            });
        }
        Ok(Self { dim, constraints })
    }

    /// Rows `[a_1, …, a_d, b]`, each read as `a · x >= b`.
    pub fn from_rows<R: AsRef<[f64]>>(dim: usize, rows: &[R]) -> Result<Self, InputError> {
        let mut constraints = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dim + 1 {
                return Err(InputError::CoefficientCount {
                    index,
                    expected: dim,
                    got: row.len().saturating_sub(1),
                });
            }
            // Non-empty: length checked above.
            if let Some(c) = Constraint::from_row(row) {
                constraints.push(c);
            }
        }
        Self::new(dim, constraints)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check that `obj` lives on the same unknowns.
    pub fn check_objective(&self, obj: &Objective) -> Result<(), InputError> {
        if obj.c.len() != self.dim {
            return Err(InputError::ObjectiveDimension {
                expected: self.dim,
                got: obj.c.len(),
            });
        }
        if !obj.c0.is_finite() || obj.c.iter().any(|v| !v.is_finite()) {
            return Err(InputError::NonFiniteObjective);
        }
        Ok(())
    }
}
