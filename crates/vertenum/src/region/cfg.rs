//! Tolerance defaults and the enumeration config.
//!
//! Policy
//! - Defaults are fixed constants; `EnumCfg` lets callers override them per
//!   run without touching the constants.

use super::types::InputError;

/// Relative pivot threshold below which a combination counts as degenerate.
pub const DET_EPS: f64 = 1e-12;
/// Slack allowed when checking `a·x >= b` (inclusive boundary).
pub const FEAS_EPS: f64 = 1e-9;
/// Decimal places used for displayed coordinates and objective values.
pub const DISPLAY_DECIMALS: u32 = 4;

/// What to do with a feasible point that coincides with an accepted vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DedupPolicy {
    /// Every feasible combination contributes its own vertex entry.
    #[default]
    KeepAll,
    /// Skip points within this Euclidean distance of an accepted vertex.
    Euclidean(f64),
}

/// Enumeration configuration (tolerances, display, dedup, scheduling).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnumCfg {
    pub eps_det: f64,
    pub eps_feas: f64,
    pub display_decimals: u32,
    pub dedup: DedupPolicy,
    pub parallel: bool,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            eps_det: DET_EPS,
            eps_feas: FEAS_EPS,
            display_decimals: DISPLAY_DECIMALS,
            dedup: DedupPolicy::KeepAll,
            parallel: false,
        }
    }
}

impl EnumCfg {
    /// Reject negative or non-finite tolerances.
    pub fn validate(&self) -> Result<(), InputError> {
        check_tol("eps_det", self.eps_det)?;
        check_tol("eps_feas", self.eps_feas)?;
        if let DedupPolicy::Euclidean(eps) = self.dedup {
            check_tol("dedup_eps", eps)?;
        }
        // 10^d must stay finite for rounding.
        if self.display_decimals > 15 {
            return Err(InputError::InvalidTolerance {
                name: "display_decimals",
                value: f64::from(self.display_decimals),
            });
        }
        Ok(())
    }
}

fn check_tol(name: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidTolerance { name, value })
    }
}
