//! Small utilities: k-combinations, binomials, display rounding.

use nalgebra::DVector;

/// Lexicographic k-subsets of `0..n`, as strictly increasing index lists.
///
/// `k == 0` or `k > n` yields nothing.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    idxs: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idxs: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.idxs.clone();
        let k = self.idxs.len();
        // Rightmost position that can still move right.
        match (0..k).rev().find(|&i| self.idxs[i] != i + self.n - k) {
            Some(i) => {
                self.idxs[i] += 1;
                for j in i + 1..k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}

/// `C(n, k)`; saturates at `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // exact at each step: acc * (n - i) is divisible by (i + 1)
        acc = acc * (n - i) as u128 / (i as u128 + 1);
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}

/// Round half away from zero to `decimals` places; never yields `-0.0`.
#[inline]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let s = 10f64.powi(decimals as i32);
    let r = (x * s).round() / s;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

pub fn round_vec(x: &DVector<f64>, decimals: u32) -> DVector<f64> {
    x.map(|v| round_to(v, decimals))
}

/// Index of the first point within `tol` (Euclidean) of `p`.
pub fn find_near<'a, I>(points: I, p: &DVector<f64>, tol: f64) -> Option<usize>
where
    I: IntoIterator<Item = &'a DVector<f64>>,
{
    points.into_iter().position(|q| (q - p).norm() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_lexicographic() {
        let all: Vec<_> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn combinations_edge_sizes() {
        assert_eq!(Combinations::new(3, 0).count(), 0);
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
        assert_eq!(Combinations::new(5, 1).count(), 5);
    }

    #[test]
    fn combination_count_matches_binomial() {
        for n in 0..9 {
            for k in 1..=n {
                assert_eq!(Combinations::new(n, k).count(), binomial(n, k), "n={n} k={k}");
            }
        }
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn rounding_is_cosmetic_and_signless_at_zero() {
        assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
        assert_eq!(round_to(-2.0 / 3.0, 2), -0.67);
        assert!(round_to(-1e-9, 4).is_sign_positive());
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn find_near_uses_euclidean_distance() {
        let pts = vec![DVector::from_row_slice(&[0.0, 0.0]), DVector::from_row_slice(&[1.0, 1.0])];
        let p = DVector::from_row_slice(&[1.0, 1.0 + 1e-10]);
        assert_eq!(find_near(&pts, &p, 1e-9), Some(1));
        assert_eq!(find_near(&pts, &p, 0.0), None);
    }
}
