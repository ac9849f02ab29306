//! Presentation collaborators: console report and plot handoff.
//!
//! Both only borrow the run result and the region; nothing here feeds back
//! into enumeration.

use std::fmt;

use nalgebra::DVector;

use crate::enumerate::{Enumeration, Outcome, Vertex};
use crate::region::{Constraint, Region};

/// Axis names: `x, y, z` up to three unknowns, `x1..xd` beyond.
pub fn axis_names(dim: usize) -> Vec<String> {
    if dim <= 3 {
        ["x", "y", "z"][..dim].iter().map(|s| s.to_string()).collect()
    } else {
        (1..=dim).map(|i| format!("x{i}")).collect()
    }
}

/// `a·x` written out, e.g. `x - y + 2z`; zero terms dropped.
pub fn fmt_linear(a: &DVector<f64>, names: &[String]) -> String {
    let mut out = String::new();
    for (coef, name) in a.iter().zip(names) {
        if *coef == 0.0 {
            continue;
        }
        let mag = coef.abs();
        let sign = if *coef < 0.0 { "-" } else { "+" };
        if out.is_empty() {
            if *coef < 0.0 {
                out.push('-');
            }
        } else {
            out.push(' ');
            out.push_str(sign);
            out.push(' ');
        }
        if mag != 1.0 {
            out.push_str(&mag.to_string());
        }
        out.push_str(name);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// `x - y - z >= -4`
pub fn fmt_constraint(c: &Constraint, names: &[String]) -> String {
    format!("{} {} {}", fmt_linear(&c.a, names), c.dir.symbol(), c.b)
}

fn fmt_point(p: &DVector<f64>) -> String {
    let parts: Vec<String> = p.iter().map(|v| v.to_string()).collect();
    format!("({})", parts.join(", "))
}

/// Console report of one run, in visiting order.
pub struct TextReport<'a> {
    run: &'a Enumeration,
    region: &'a Region,
    names: Vec<String>,
}

impl<'a> TextReport<'a> {
    pub fn new(run: &'a Enumeration, region: &'a Region) -> Self {
        Self {
            run,
            region,
            names: axis_names(region.dim()),
        }
    }

    fn write_combination(&self, f: &mut fmt::Formatter<'_>, comb: &[usize]) -> fmt::Result {
        writeln!(f, "Constraints:")?;
        for &i in comb {
            writeln!(f, "{}", fmt_constraint(&self.region.constraints()[i], &self.names))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.names.join(",");
        writeln!(f, "\t\t\tSystems with solution:")?;
        for r in &self.run.reports {
            let Outcome::Solved(s) = &r.outcome else {
                continue;
            };
            writeln!(f, "-   Point: {}", fmt_point(&s.display))?;
            writeln!(f, "-   Value of f({args}) at this point: {}", s.display_value)?;
            self.write_combination(f, &r.combination)?;
            if s.feasible {
                writeln!(f, "This point is WITHIN the specified region.")?;
            } else {
                writeln!(f, "This point is OUTSIDE the specified region.")?;
            }
            if s.rounding_boundary {
                writeln!(
                    f,
                    "Note: the rounded point looks inside; the exact point is not (tolerance boundary)."
                )?;
            }
            if let Some(k) = s.duplicate_of {
                writeln!(f, "Note: coincides with vertex #{}.", k + 1)?;
            }
            writeln!(f, "\n")?;
        }
        writeln!(f, "\t\t\tSystems with no solution:")?;
        for comb in &self.run.unsolvable {
            self.write_combination(f, comb)?;
        }
        writeln!(f, "\nPoints that satisfy the region constraints:\n")?;
        for v in &self.run.vertices {
            writeln!(f, "\t {}", fmt_point(&v.display))?;
        }
        Ok(())
    }
}

/// Read-only handoff to a plotting collaborator.
#[derive(Clone, Copy, Debug)]
pub struct PlotData<'a> {
    pub dim: usize,
    pub vertices: &'a [Vertex],
    pub constraints: &'a [Constraint],
}

impl<'a> PlotData<'a> {
    pub fn new(run: &'a Enumeration, region: &'a Region) -> Self {
        Self {
            dim: region.dim(),
            vertices: &run.vertices,
            constraints: region.constraints(),
        }
    }

    /// Rounded vertex coordinates, one tuple per vertex.
    pub fn vertex_coords(&self) -> Vec<Vec<f64>> {
        self.vertices
            .iter()
            .map(|v| v.display.iter().copied().collect())
            .collect()
    }

    /// Per-axis `[min - margin, max + margin]` over the vertices; `None` if empty.
    pub fn axis_bounds(&self, margin: f64) -> Option<Vec<(f64, f64)>> {
        if self.vertices.is_empty() {
            return None;
        }
        let bounds = (0..self.dim)
            .map(|k| {
                let (lo, hi) = self.vertices.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v.point[k]), hi.max(v.point[k])),
                );
                (lo - margin, hi + margin)
            })
            .collect();
        Some(bounds)
    }
}
