use crate::Result;
use crate::grid::GridPlan;
use hatchbox_base::Dimensions;
use hatchbox_csg::{Solid, SolidBuilder, Vector3, union_all};

/// Turns a +Z cylinder onto +X.
const ALONG_WIDTH: Vector3 = Vector3 {
    x: 0.0,
    y: 90.0,
    z: 0.0,
};
/// Turns a +Z cylinder onto +Y.
const ALONG_DEPTH: Vector3 = Vector3 {
    x: -90.0,
    y: 90.0,
    z: 0.0,
};

/// One layer of through-holes: a row of poles along the width for every
/// depth position, and one along the depth for every width position.
///
/// Poles run the full outer width or depth so they cut cleanly through
/// both walls. The layer sits at the vertical grid's start. An axis without
/// holes contributes no poles; `None` means the layer is empty.
pub fn ventilation_mesh(dims: &Dimensions, plan: &GridPlan) -> Result<Option<Solid>> {
    let r = plan.hole_radius;
    let z = plan.height.start + r;

    let depth_pole = if plan.width.is_empty() {
        None
    } else {
        let pole = SolidBuilder::cylinder_z(r, dims.depth)?
            .rotate(ALONG_DEPTH)
            .translate(Vector3::new(plan.width.start + r, 0.0, z));
        Some(pole)
    };
    let width_pole = if plan.depth.is_empty() {
        None
    } else {
        let pole = SolidBuilder::cylinder_z(r, dims.width)?
            .rotate(ALONG_WIDTH)
            .translate(Vector3::new(0.0, plan.depth.start + r, z));
        Some(pole)
    };

    let mut poles: Vec<Solid> = depth_pole.iter().chain(width_pole.iter()).cloned().collect();
    if let Some(pole) = &depth_pole {
        poles.extend(
            (0..plan.width.count)
                .map(|i| pole.translate(Vector3::new(i as f64 * plan.width.spacing, 0.0, 0.0))),
        );
    }
    if let Some(pole) = &width_pole {
        poles.extend(
            (0..plan.depth.count)
                .map(|i| pole.translate(Vector3::new(0.0, i as f64 * plan.depth.spacing, 0.0))),
        );
    }

    Ok(union_all(&poles))
}
