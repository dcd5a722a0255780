//! Immutable constructive-solid-geometry expressions.
//!
//! A [`Solid`] is a tree of primitives, transforms and boolean operations.
//! Nodes are never modified: every operation returns a new node whose
//! children are shared through [`Arc`], so repeating a sub-expression (the
//! same pole translated many times) costs one pointer per use. Unions and
//! differences hold their operands in a list, so a long chain of cuts stays
//! one level deep.

use hatchbox_geometry::euler_rotation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub use hatchbox_geometry::{Aabb, Point3, Vector3};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Solid {
    /// Box occupying `[0, size]` on every axis.
    Cuboid { size: Vector3 },
    /// Sphere centered at the origin.
    Sphere { radius: f64 },
    /// Cylinder along +Z from `z = 0` to `z = height`.
    Cylinder { radius: f64, height: f64 },
    Translate { offset: Vector3, child: Arc<Solid> },
    /// Euler angles in degrees, applied about X, then Y, then Z.
    Rotate { angles: Vector3, child: Arc<Solid> },
    /// Every child joined; no children is the empty solid.
    Union { children: Vec<Arc<Solid>> },
    /// `base` with everything inside any of `tools` removed.
    Difference {
        base: Arc<Solid>,
        tools: Vec<Arc<Solid>>,
    },
    /// Sweep of `tool` over every point of `base`.
    Minkowski { base: Arc<Solid>, tool: Arc<Solid> },
}

pub struct SolidBuilder;

impl SolidBuilder {
    pub fn cuboid(width: f64, depth: f64, height: f64) -> Result<Solid> {
        ensure_non_negative("width", width)?;
        ensure_non_negative("depth", depth)?;
        ensure_non_negative("height", height)?;
        Ok(Solid::Cuboid {
            size: Vector3::new(width, depth, height),
        })
    }

    pub fn sphere(radius: f64) -> Result<Solid> {
        ensure_positive("radius", radius)?;
        Ok(Solid::Sphere { radius })
    }

    pub fn cylinder_z(radius: f64, height: f64) -> Result<Solid> {
        ensure_positive("radius", radius)?;
        ensure_positive("height", height)?;
        Ok(Solid::Cylinder { radius, height })
    }
}

impl Solid {
    pub fn translate(&self, offset: Vector3) -> Solid {
        Solid::Translate {
            offset,
            child: Arc::new(self.clone()),
        }
    }

    /// Like [`Solid::translate`], pointing at `child` instead of copying it.
    pub fn translate_shared(child: &Arc<Solid>, offset: Vector3) -> Solid {
        Solid::Translate {
            offset,
            child: Arc::clone(child),
        }
    }

    pub fn rotate(&self, angles: Vector3) -> Solid {
        Solid::Rotate {
            angles,
            child: Arc::new(self.clone()),
        }
    }

    /// Conservative axis-aligned bounds.
    ///
    /// Exact for primitives, translations, unions and Minkowski sums of
    /// boxes. A difference reports the bounds of its base, and a rotation
    /// the box around its child's rotated bounds.
    pub fn bounding_box(&self) -> Aabb {
        match self {
            Solid::Cuboid { size } => Aabb::from_size(*size),
            Solid::Sphere { radius } => Aabb::new(
                Point3::new(-radius, -radius, -radius),
                Point3::new(*radius, *radius, *radius),
            ),
            Solid::Cylinder { radius, height } => Aabb::new(
                Point3::new(-radius, -radius, 0.0),
                Point3::new(*radius, *radius, *height),
            ),
            Solid::Translate { offset, child } => child.bounding_box().translated(*offset),
            Solid::Rotate { angles, child } => {
                child.bounding_box().rotated(&euler_rotation(*angles))
            }
            Solid::Union { children } => children
                .iter()
                .fold(Aabb::empty(), |bounds, child| bounds.union(&child.bounding_box())),
            Solid::Difference { base, .. } => base.bounding_box(),
            Solid::Minkowski { base, tool } => base.bounding_box().minkowski(&tool.bounding_box()),
        }
    }

    /// Number of nodes in the tree, counting a shared child at every use.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(Solid::node_count).sum::<usize>()
    }

    /// Number of primitive leaves, counting a shared leaf at every use.
    pub fn primitive_count(&self) -> usize {
        if self.is_primitive() {
            return 1;
        }
        self.children().map(Solid::primitive_count).sum()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Solid::Cuboid { .. } | Solid::Sphere { .. } | Solid::Cylinder { .. }
        )
    }

    pub fn children(&self) -> impl Iterator<Item = &Solid> {
        let none: &[Arc<Solid>] = &[];
        let (first, rest): (Option<&Arc<Solid>>, &[Arc<Solid>]) = match self {
            Solid::Cuboid { .. } | Solid::Sphere { .. } | Solid::Cylinder { .. } => (None, none),
            Solid::Translate { child, .. } | Solid::Rotate { child, .. } => (Some(child), none),
            Solid::Union { children } => (None, children.as_slice()),
            Solid::Difference { base, tools } => (Some(base), tools.as_slice()),
            Solid::Minkowski { base, tool } => (Some(base), std::slice::from_ref(tool)),
        };
        first.into_iter().chain(rest).map(|child| child.as_ref())
    }
}

pub fn union(left: &Solid, right: &Solid) -> Solid {
    Solid::Union {
        children: vec![Arc::new(left.clone()), Arc::new(right.clone())],
    }
}

pub fn difference(base: &Solid, tool: &Solid) -> Solid {
    Solid::Difference {
        base: Arc::new(base.clone()),
        tools: vec![Arc::new(tool.clone())],
    }
}

pub fn minkowski(base: &Solid, tool: &Solid) -> Solid {
    Solid::Minkowski {
        base: Arc::new(base.clone()),
        tool: Arc::new(tool.clone()),
    }
}

/// One union node over every solid, or `None` when there are none.
///
/// A single solid comes back as itself.
pub fn union_all<'a>(solids: impl IntoIterator<Item = &'a Solid>) -> Option<Solid> {
    let mut children: Vec<Arc<Solid>> = solids
        .into_iter()
        .map(|solid| Arc::new(solid.clone()))
        .collect();
    match children.len() {
        0 => None,
        1 => children.pop().map(Arc::unwrap_or_clone),
        _ => Some(Solid::Union { children }),
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be >= 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_bounds_start_at_origin() -> Result<()> {
        let cube = SolidBuilder::cuboid(100.0, 200.0, 300.0)?;
        let bounds = cube.bounding_box();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(100.0, 200.0, 300.0));
        Ok(())
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(SolidBuilder::sphere(0.0).is_err());
        assert!(SolidBuilder::cylinder_z(-1.0, 4.0).is_err());
        assert!(SolidBuilder::cylinder_z(1.0, f64::NAN).is_err());
        assert!(SolidBuilder::cuboid(-1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn operations_do_not_touch_operands() -> Result<()> {
        let cube = SolidBuilder::cuboid(1.0, 1.0, 1.0)?;
        let ball = SolidBuilder::sphere(0.5)?;
        let before = cube.clone();
        let _ = difference(&cube, &ball);
        let _ = cube.translate(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(cube, before);
        Ok(())
    }

    #[test]
    fn union_all_of_nothing_is_none() {
        assert!(union_all(std::iter::empty()).is_none());
    }

    #[test]
    fn union_all_is_one_flat_node() -> Result<()> {
        let pole = SolidBuilder::cylinder_z(0.5, 10.0)?;
        let copies: Vec<Solid> = (0..4)
            .map(|i| pole.translate(Vector3::new(f64::from(i), 0.0, 0.0)))
            .collect();
        let Some(Solid::Union { children }) = union_all(&copies) else {
            panic!("four solids must give a union");
        };
        assert_eq!(children.len(), 4);

        let single = union_all(&copies[..1]);
        assert_eq!(single.as_ref(), Some(&copies[0]));
        Ok(())
    }

    #[test]
    fn wide_union_does_not_recurse_per_child() -> Result<()> {
        let pole = Arc::new(SolidBuilder::cylinder_z(0.25, 100.0)?);
        let copies: Vec<Solid> = (0..50_000)
            .map(|i| Solid::translate_shared(&pole, Vector3::new(f64::from(i) * 0.01, 0.0, 0.0)))
            .collect();
        let Some(mesh) = union_all(&copies) else {
            panic!("copies must give a union");
        };
        let cut = difference(&SolidBuilder::cuboid(600.0, 10.0, 100.0)?, &mesh);

        assert_eq!(mesh.primitive_count(), 50_000);
        assert_eq!(cut.node_count(), 3 + 2 * 50_000);
        let bounds = mesh.bounding_box();
        assert!((bounds.max.x - (499.99 + 0.25)).abs() < 1e-6);
        drop(copies);
        drop(cut);
        Ok(())
    }

    #[test]
    fn node_and_primitive_counts() -> Result<()> {
        let cube = SolidBuilder::cuboid(1.0, 1.0, 1.0)?;
        let moved = cube.translate(Vector3::new(2.0, 0.0, 0.0));
        let both = union(&cube, &moved);
        assert_eq!(both.node_count(), 4);
        assert_eq!(both.primitive_count(), 2);
        Ok(())
    }
}
