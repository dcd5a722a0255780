use crate::grid::AxisGrid;
use hatchbox_csg::{Solid, Vector3};
use std::sync::Arc;

/// Subtracts one copy of `mesh` per vertical layer from `shell`.
///
/// Layer `i` is the mesh raised by `i * layers.spacing`; every layer points
/// at the same mesh node and all of them hang off a single difference.
/// Without a mesh or without layers the shell comes back unchanged.
pub fn compose(shell: &Solid, mesh: Option<&Solid>, layers: &AxisGrid) -> Solid {
    let Some(mesh) = mesh else {
        return shell.clone();
    };
    if layers.count == 0 {
        return shell.clone();
    }

    let mesh = Arc::new(mesh.clone());
    let tools = (0..layers.count)
        .map(|i| {
            let offset = Vector3::new(0.0, 0.0, i as f64 * layers.spacing);
            Arc::new(Solid::translate_shared(&mesh, offset))
        })
        .collect();
    Solid::Difference {
        base: Arc::new(shell.clone()),
        tools,
    }
}
