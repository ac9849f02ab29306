//! Special regions used in tests, benchmarks, and the CLI.
//!
//! Purpose
//! - Provide canonical constraint lists whose vertex sets are known exactly.
//! - Keep constructors small and explicit so tests can rely on them.
//!
//! Known answers
//! - Reference region: 20 triples, 4 degenerate, 8 vertices.
//! - Box [-a,a]^d: 2^d vertices; every combination taking both sides of one
//!   axis is degenerate.
//! - Square pyramid: the apex lies on four side facets, so it is reached by
//!   four different triples.

use super::types::{Constraint, Objective, Region};

/// Rows `[a_x, a_y, a_z, b]` of the reference region, each `a·x >= b`.
pub const REFERENCE_ROWS: [[f64; 4]; 6] = [
    [1.0, -1.0, -1.0, -4.0],
    [1.0, 2.0, 2.0, 2.0],
    [1.0, 1.0, -1.0, -2.0],
    [-1.0, -1.0, 1.0, -1.0],
    [4.0, -2.0, 1.0, 1.0],
    [-6.0, 4.0, -1.0, -10.0],
];

/// Six constraints over (x, y, z) bounding a hexahedron.
pub fn reference_region() -> Region {
    let cs = REFERENCE_ROWS
        .iter()
        .filter_map(|row| Constraint::from_row(row))
        .collect();
    // Fixed, well-formed rows.
    Region::new(3, cs).unwrap_or_else(|e| unreachable!("reference region: {e}"))
}

/// `f(x, y, z) = x - y`.
pub fn reference_objective() -> Objective {
    Objective::new(&[1.0, -1.0, 0.0])
}

/// Axis-aligned box `[-a, a]^d` (requires `d >= 1`).
pub fn unit_box(d: usize, a: f64) -> Region {
    assert!(d >= 1, "unit_box needs d >= 1");
    let mut cs = Vec::with_capacity(2 * d);
    for axis in 0..d {
        let mut e = vec![0.0; d];
        e[axis] = 1.0;
        cs.push(Constraint::at_least(&e, -a));
        cs.push(Constraint::at_most(&e, a));
    }
    Region::new(d, cs).unwrap_or_else(|e| unreachable!("box: {e}"))
}

/// Pyramid over the square `[-1,1]^2 × {0}` with apex `(0, 0, 1)`.
pub fn square_pyramid() -> Region {
    let cs = vec![
        Constraint::at_least(&[0.0, 0.0, 1.0], 0.0),
        Constraint::at_most(&[1.0, 0.0, 1.0], 1.0),
        Constraint::at_most(&[-1.0, 0.0, 1.0], 1.0),
        Constraint::at_most(&[0.0, 1.0, 1.0], 1.0),
        Constraint::at_most(&[0.0, -1.0, 1.0], 1.0),
    ];
    Region::new(3, cs).unwrap_or_else(|e| unreachable!("pyramid: {e}"))
}
