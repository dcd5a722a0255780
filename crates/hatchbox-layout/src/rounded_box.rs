use crate::Result;
use hatchbox_base::{Dimensions, FLOOR_THICKNESS, Tolerance, WallSpec};
use hatchbox_csg::{Solid, SolidBuilder, Vector3, difference, minkowski};

/// Size of the cuboid swept into the cavity, before rounding.
///
/// Width and depth lose both walls and both fillets; height loses the floor.
/// Every edge is clamped at zero.
pub fn cavity_size(dims: &Dimensions, walls: &WallSpec) -> Vector3 {
    let pad = 2.0 * walls.thickness + 2.0 * walls.radius;
    Vector3::new(
        (dims.width - pad).max(0.0),
        (dims.depth - pad).max(0.0),
        (dims.height - FLOOR_THICKNESS).max(0.0),
    )
}

/// Hollow box with rounded outer edges, a solid floor and an open top.
///
/// The fillet is limited to half the smallest outer dimension so the box
/// always spans exactly `dims`. When the cavity collapses the result is a
/// solid rounded block.
pub fn rounded_box(dims: &Dimensions, walls: &WallSpec) -> Result<Solid> {
    dims.validate()?;
    walls.validate()?;
    let walls = walls.fitted_to(dims);
    let r = walls.radius;

    let outer = rounded_cuboid(
        Vector3::new(
            (dims.width - 2.0 * r).max(0.0),
            (dims.depth - 2.0 * r).max(0.0),
            (dims.height - 2.0 * r).max(0.0),
        ),
        r,
        Vector3::new(0.0, 0.0, 0.0),
    )?;

    let inner = cavity_size(dims, &walls);
    // the extra radius pushes the cavity's rounded top past the rim
    let cavity_core = Vector3::new(inner.x, inner.y, inner.z + r);
    let tol = Tolerance::default();
    if tol.is_zero(cavity_core.x) || tol.is_zero(cavity_core.y) || tol.is_zero(cavity_core.z) {
        return Ok(outer);
    }

    let cavity = rounded_cuboid(
        cavity_core,
        r,
        Vector3::new(walls.thickness, walls.thickness, FLOOR_THICKNESS),
    )?;
    Ok(difference(&outer, &cavity))
}

/// Cuboid of `size` swept by a sphere of `radius`, placed with its rounded
/// bounding box starting at `corner`.
fn rounded_cuboid(size: Vector3, radius: f64, corner: Vector3) -> Result<Solid> {
    let core = SolidBuilder::cuboid(size.x, size.y, size.z)?;
    let swept = if radius > 0.0 {
        minkowski(&core, &SolidBuilder::sphere(radius)?)
    } else {
        core
    };
    let offset = corner + Vector3::new(radius, radius, radius);
    if offset == Vector3::new(0.0, 0.0, 0.0) {
        return Ok(swept);
    }
    Ok(swept.translate(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dims(width: f64, depth: f64, height: f64) -> Dimensions {
        Dimensions {
            width,
            depth,
            height,
        }
    }

    #[test]
    fn outer_bounds_match_requested_size() -> Result<()> {
        let solid = rounded_box(&dims(175.0, 115.0, 75.0), &WallSpec::new(8.0, 3.0)?)?;
        let bounds = solid.bounding_box();
        assert_abs_diff_eq!(bounds.min.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.min.z, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.max.x, 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.max.y, 115.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.max.z, 75.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn cavity_size_is_clamped() {
        let walls = WallSpec {
            thickness: 8.0,
            radius: 3.0,
        };
        let size = cavity_size(&dims(175.0, 115.0, 75.0), &walls);
        assert_eq!((size.x, size.y), (153.0, 93.0));
        assert_abs_diff_eq!(size.z, 74.2, epsilon = 1e-9);

        let tiny = cavity_size(&dims(20.0, 20.0, 0.5), &walls);
        assert_eq!(tiny, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn cavity_walls_are_thickness_thick() -> Result<()> {
        let solid = rounded_box(&dims(100.0, 60.0, 40.0), &WallSpec::new(4.0, 2.0)?)?;
        let Solid::Difference { tools, .. } = &solid else {
            panic!("expected a hollow box, got {solid:?}");
        };
        assert_eq!(tools.len(), 1);
        let cavity = tools[0].bounding_box();
        assert_abs_diff_eq!(cavity.min.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cavity.max.x, 96.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cavity.min.y, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cavity.max.y, 56.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cavity.min.z, FLOOR_THICKNESS, epsilon = 1e-9);
        assert!(cavity.max.z > 40.0, "cavity must open the top");
        Ok(())
    }

    #[test]
    fn collapsed_cavity_gives_solid_block() -> Result<()> {
        let solid = rounded_box(&dims(20.0, 20.0, 10.0), &WallSpec::new(12.0, 1.0)?)?;
        assert!(!matches!(solid, Solid::Difference { .. }));
        assert_abs_diff_eq!(solid.bounding_box().max.y, 20.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn oversized_fillet_keeps_outer_bounds() -> Result<()> {
        let solid = rounded_box(&dims(4.0, 30.0, 30.0), &WallSpec::new(0.5, 10.0)?)?;
        let size = solid.bounding_box().size();
        assert_abs_diff_eq!(size.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(size.y, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(size.z, 30.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn zero_fillet_uses_plain_cuboids() -> Result<()> {
        let solid = rounded_box(&dims(10.0, 10.0, 10.0), &WallSpec::new(1.0, 0.0)?)?;
        let Solid::Difference { base, .. } = &solid else {
            panic!("expected a hollow box");
        };
        assert!(matches!(base.as_ref(), Solid::Cuboid { .. }));
        Ok(())
    }

    #[test]
    fn negative_wall_is_rejected() {
        let walls = WallSpec {
            thickness: -2.0,
            radius: 3.0,
        };
        assert!(rounded_box(&dims(10.0, 10.0, 10.0), &walls).is_err());
    }
}
