//! Layout of a ventilated incubator box.
//!
//! The pipeline is four pure steps: [`rounded_box`] builds the hollow shell,
//! [`plan_grid`] places holes on each axis, [`ventilation_mesh`] turns the
//! horizontal grids into one layer of poles, and [`compose`] cuts that layer
//! out of the shell once per vertical layer. [`build_incubator`] runs all of
//! them from an [`IncubatorParams`] record.

use hatchbox_base::IncubatorParams;
use hatchbox_csg::{Aabb, Solid};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod compose;
pub mod diagnostics;
pub mod grid;
pub mod mesh;
pub mod rounded_box;

pub use compose::compose;
pub use diagnostics::{Diagnostic, axis_records, plan_diagnostics};
pub use grid::{Axis, AxisGrid, GridPlan, plan_axis, plan_grid, plan_layers};
pub use mesh::ventilation_mesh;
pub use rounded_box::{cavity_size, rounded_box};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parameters(#[from] hatchbox_base::Error),
    #[error(transparent)]
    Csg(#[from] hatchbox_csg::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A generated incubator: the solid plus everything needed to explain it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub params: IncubatorParams,
    pub plan: GridPlan,
    pub diagnostics: Vec<Diagnostic>,
    pub solid: Solid,
}

impl Model {
    pub fn bounding_box(&self) -> Aabb {
        self.solid.bounding_box()
    }
}

pub fn build_incubator(params: &IncubatorParams) -> Result<Model> {
    let dims = params.dimensions()?;
    let walls = params.walls()?.fitted_to(&dims);
    let hole = params.hole()?;

    let shell = rounded_box(&dims, &walls)?;
    let plan = plan_grid(&dims, &walls, &hole)?;
    let mesh = ventilation_mesh(&dims, &plan)?;
    let solid = compose(&shell, mesh.as_ref(), &plan.height);

    Ok(Model {
        name: params.label(),
        params: *params,
        plan,
        diagnostics: plan_diagnostics(&plan, &hole),
        solid,
    })
}
