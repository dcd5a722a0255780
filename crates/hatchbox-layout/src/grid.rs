//! Hole placement along one axis.

use crate::Result;
use hatchbox_base::{Dimensions, HoleSpec, WallSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Width,
    Depth,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Width => "width",
            Axis::Depth => "depth",
            Axis::Height => "height",
        };
        f.write_str(name)
    }
}

/// Count, spacing, padding and start of the holes along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisGrid {
    pub axis: Axis,
    /// Span available for holes, measured from the inner boundary.
    pub span: f64,
    pub count: usize,
    /// Center-to-center distance.
    pub spacing: f64,
    /// Margin on each side of the occupied span.
    pub padding: f64,
    /// Coordinate of the first hole's leading edge.
    pub start: f64,
}

impl AxisGrid {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Leading edge of every hole along the axis.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.start + i as f64 * self.spacing)
    }
}

/// Grids for all three axes of one box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    /// Distance from each outer face to the hole grid's inner boundary.
    pub inner_diff: f64,
    pub hole_radius: f64,
    pub width: AxisGrid,
    pub depth: AxisGrid,
    pub height: AxisGrid,
}

impl GridPlan {
    pub fn axes(&self) -> [&AxisGrid; 3] {
        [&self.width, &self.depth, &self.height]
    }
}

/// Places as many holes as fit in `span` and centers them.
///
/// `offset` is the coordinate of the span's inner boundary. A span shorter
/// than one hole yields an empty grid.
pub fn plan_axis(axis: Axis, span: f64, hole: &HoleSpec, offset: f64) -> Result<AxisGrid> {
    hole.validate()?;
    let spacing = hole.spacing();

    let count = if span < hole.diameter {
        0
    } else {
        ((span - hole.diameter) / spacing).floor() as usize + 1
    };
    // an empty grid "occupies" -gap, so its padding is (span + gap) / 2
    let occupied = count as f64 * spacing - hole.gap;
    let padding = (span - occupied) / 2.0;

    Ok(AxisGrid {
        axis,
        span,
        count,
        spacing,
        padding,
        start: offset + padding,
    })
}

/// Vertical layers: half the span divided by the spacing, starting at `offset`.
///
/// The halving keeps every other layer position free and is applied on
/// purpose; it is not a hole-fit calculation like [`plan_axis`].
pub fn plan_layers(span: f64, hole: &HoleSpec, offset: f64) -> Result<AxisGrid> {
    hole.validate()?;
    let spacing = hole.spacing();
    let count = (span.max(0.0) * 0.5 / spacing).floor() as usize;

    Ok(AxisGrid {
        axis: Axis::Height,
        span,
        count,
        spacing,
        padding: 0.0,
        start: offset,
    })
}

/// Plans the three axes of a box.
///
/// The hole grid's inner boundary sits `thickness + 2 * radius` in from each
/// outer face; the vertical span loses that distance once, at the floor.
pub fn plan_grid(dims: &Dimensions, walls: &WallSpec, hole: &HoleSpec) -> Result<GridPlan> {
    let inner_diff = walls.thickness + 2.0 * walls.radius;

    let width = plan_axis(Axis::Width, dims.width - 2.0 * inner_diff, hole, inner_diff)?;
    let depth = plan_axis(Axis::Depth, dims.depth - 2.0 * inner_diff, hole, inner_diff)?;
    let height = plan_layers(dims.height - inner_diff, hole, inner_diff)?;

    Ok(GridPlan {
        inner_diff,
        hole_radius: hole.radius(),
        width,
        depth,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_abs_diff_eq;

    fn hole(diameter: f64, gap: f64) -> HoleSpec {
        HoleSpec { diameter, gap }
    }

    #[test]
    fn width_axis_of_standard_box() -> Result<()> {
        let grid = plan_axis(Axis::Width, 147.0, &hole(0.5, 5.0), 14.0)?;
        assert_eq!(grid.count, 27);
        assert_abs_diff_eq!(grid.spacing, 5.5);
        assert_abs_diff_eq!(grid.padding, 1.75, epsilon = 1e-9);
        assert_abs_diff_eq!(grid.start, 15.75, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn count_is_the_largest_that_fits() -> Result<()> {
        let hole = hole(3.0, 2.0);
        for span in [3.0, 4.9, 8.0, 13.0, 17.9, 100.0, 101.3] {
            let grid = plan_axis(Axis::Depth, span, &hole, 0.0)?;
            let occupied = |n: usize| n as f64 * hole.spacing() - hole.gap;
            assert!(occupied(grid.count) <= span + 1e-9, "span {span}");
            assert!(occupied(grid.count + 1) > span, "span {span}");
        }
        Ok(())
    }

    #[test]
    fn padding_is_symmetric() -> Result<()> {
        let hole = hole(2.0, 1.5);
        let grid = plan_axis(Axis::Width, 50.0, &hole, 10.0)?;
        let Some(last) = grid.positions().last() else {
            panic!("grid must hold holes");
        };
        let leading = grid.start - 10.0;
        let trailing = (10.0 + grid.span) - (last + hole.diameter);
        assert_abs_diff_eq!(leading, trailing, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn span_shorter_than_hole_is_empty() -> Result<()> {
        let grid = plan_axis(Axis::Width, 0.4, &hole(0.5, 5.0), 14.0)?;
        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 0);
        assert_abs_diff_eq!(grid.padding, 2.7, epsilon = 1e-9);
        assert_abs_diff_eq!(grid.start, 16.7, epsilon = 1e-9);

        let negative = plan_axis(Axis::Depth, -6.0, &hole(0.5, 5.0), 14.0)?;
        assert!(negative.is_empty());
        assert_abs_diff_eq!(negative.padding, -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(negative.start, 13.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let result = plan_axis(Axis::Width, 100.0, &hole(0.0, 0.0), 0.0);
        assert!(matches!(
            result,
            Err(Error::Parameters(hatchbox_base::Error::InvalidHoleSpec { .. }))
        ));
        assert!(plan_layers(100.0, &hole(-1.0, 0.5), 0.0).is_err());
    }

    #[test]
    fn layers_use_half_the_span() -> Result<()> {
        let grid = plan_layers(61.0, &hole(0.5, 5.0), 14.0)?;
        assert_eq!(grid.count, 5);
        assert_eq!(grid.start, 14.0);
        assert_eq!(grid.padding, 0.0);
        Ok(())
    }

    #[test]
    fn standard_box_plan() -> Result<()> {
        let dims = Dimensions::new(175.0, 115.0, 75.0)?;
        let walls = WallSpec::new(8.0, 3.0)?;
        let plan = plan_grid(&dims, &walls, &HoleSpec::new(0.5, 5.0)?)?;

        assert_eq!(plan.inner_diff, 14.0);
        assert_eq!(plan.hole_radius, 0.25);
        assert_eq!(plan.width.span, 147.0);
        assert_eq!(plan.width.count, 27);
        assert_eq!(plan.depth.span, 87.0);
        assert_eq!(plan.depth.count, 16);
        assert_abs_diff_eq!(plan.depth.padding, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plan.depth.start, 16.0, epsilon = 1e-9);
        assert_eq!(plan.height.count, 5);
        Ok(())
    }
}
