//! Random bounded regions (box + random half-spaces), reproducible per seed.
//!
//! Model
//! - Start from the box `[-1, 1]^d` so the region is bounded.
//! - Add `extra` half-spaces `n·x <= c` with `n` uniform on the sphere and
//!   `c` uniform in `[offset_min, offset_max]`; `c > 0` keeps the origin inside.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::special::unit_box;
use super::types::{Constraint, Direction, InputError, Region};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomRegionCfg {
    pub dim: usize,
    /// Number of random half-spaces on top of the `2d` box facets.
    pub extra: usize,
    pub offset_min: f64,
    pub offset_max: f64,
}

impl Default for RandomRegionCfg {
    fn default() -> Self {
        Self {
            dim: 3,
            extra: 6,
            offset_min: 0.6,
            offset_max: 1.8,
        }
    }
}

/// Draw a region; identical `(cfg, seed)` gives identical constraints.
pub fn random_region(cfg: RandomRegionCfg, seed: u64) -> Result<Region, InputError> {
    if cfg.dim == 0 {
        return Err(InputError::ZeroDimension);
    }
    let lo_ok = cfg.offset_min.is_finite() && cfg.offset_min > 0.0;
    if !lo_ok || !(cfg.offset_max.is_finite() && cfg.offset_max >= cfg.offset_min) {
        return Err(InputError::InvalidTolerance {
            name: "offset_range",
            value: cfg.offset_max - cfg.offset_min,
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cs = unit_box(cfg.dim, 1.0).constraints().to_vec();
    cs.reserve(cfg.extra);
    for _ in 0..cfg.extra {
        let n = random_unit(&mut rng, cfg.dim);
        let c = rng.gen_range(cfg.offset_min..=cfg.offset_max);
        cs.push(Constraint::new(n, c, Direction::AtMost));
    }
    Region::new(cfg.dim, cs)
}

fn random_unit<R: Rng>(rng: &mut R, dim: usize) -> DVector<f64> {
    loop {
        let v = DVector::from_fn(dim, |_, _| rng.gen_range(-1.0..1.0));
        let norm = v.norm();
        if norm > 1e-6 && norm <= 1.0 {
            return v / norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_region() {
        let cfg = RandomRegionCfg::default();
        let a = random_region(cfg, 7).unwrap();
        let b = random_region(cfg, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2 * cfg.dim + cfg.extra);
        let c = random_region(cfg, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn origin_is_interior() {
        let cfg = RandomRegionCfg {
            dim: 4,
            extra: 10,
            ..Default::default()
        };
        let r = random_region(cfg, 99).unwrap();
        let origin = DVector::zeros(4);
        assert!(r.constraints().iter().all(|c| c.slack(&origin) > 0.5));
    }

    #[test]
    fn rejects_bad_params() {
        let mut cfg = RandomRegionCfg::default();
        cfg.offset_min = -1.0;
        assert!(random_region(cfg, 1).is_err());
        cfg = RandomRegionCfg {
            dim: 0,
            ..Default::default()
        };
        assert_eq!(random_region(cfg, 1), Err(InputError::ZeroDimension));
    }
}
