use crate::grid::{AxisGrid, GridPlan};
use hatchbox_base::HoleSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record describing how the hole layout was derived.
///
/// Records are produced next to the geometry and carry no geometric meaning;
/// callers log or store them as they see fit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    Padding { inner_diff: f64 },
    Hole { radius: f64, diameter: f64 },
    Axis(AxisGrid),
    Pattern {
        width: usize,
        depth: usize,
        height: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Padding { inner_diff } => write!(f, "padding: {inner_diff}"),
            Diagnostic::Hole { radius, diameter } => {
                write!(f, "hole: radius={radius}, diameter={diameter}")
            }
            Diagnostic::Axis(grid) => write!(
                f,
                "{}: span={}, count={}, spacing={}, padding={}, start={}",
                grid.axis, grid.span, grid.count, grid.spacing, grid.padding, grid.start
            ),
            Diagnostic::Pattern {
                width,
                depth,
                height,
            } => write!(f, "hole pattern: {width}x{depth}x{height}"),
        }
    }
}

pub fn plan_diagnostics(plan: &GridPlan, hole: &HoleSpec) -> Vec<Diagnostic> {
    let mut records = vec![
        Diagnostic::Padding {
            inner_diff: plan.inner_diff,
        },
        Diagnostic::Hole {
            radius: hole.radius(),
            diameter: hole.diameter,
        },
    ];
    records.extend(plan.axes().into_iter().copied().map(Diagnostic::Axis));
    records.push(Diagnostic::Pattern {
        width: plan.width.count,
        depth: plan.depth.count,
        height: plan.height.count,
    });
    records
}

/// The per-axis records of `diagnostics`, in order.
pub fn axis_records(diagnostics: &[Diagnostic]) -> impl Iterator<Item = &AxisGrid> {
    diagnostics.iter().filter_map(|record| match record {
        Diagnostic::Axis(grid) => Some(grid),
        _ => None,
    })
}
