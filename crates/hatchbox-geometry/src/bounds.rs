//! Axis-aligned bounding boxes for solid expressions.

use crate::{Matrix3, Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Inverted box; every `include_point` makes it grow.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Box spanning `[0, size]` on every axis.
    pub fn from_size(size: Vector3) -> Self {
        Self::new(Point3::new(0.0, 0.0, 0.0), Point3::new(size.x, size.y, size.z))
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn include_point(&mut self, p: Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let mut out = *self;
        out.include_point(other.min);
        out.include_point(other.max);
        out
    }

    pub fn translated(&self, offset: Vector3) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        Aabb::new(self.min + offset, self.max + offset)
    }

    /// Box of the Minkowski sum of anything inside `self` with anything inside `other`.
    pub fn minkowski(&self, other: &Aabb) -> Aabb {
        if self.is_empty() || other.is_empty() {
            return Aabb::empty();
        }
        Aabb::new(
            Point3::new(
                self.min.x + other.min.x,
                self.min.y + other.min.y,
                self.min.z + other.min.z,
            ),
            Point3::new(
                self.max.x + other.max.x,
                self.max.y + other.max.y,
                self.max.z + other.max.z,
            ),
        )
    }

    /// Box around the eight rotated corners.
    pub fn rotated(&self, rotation: &Matrix3) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        let mut out = Aabb::empty();
        for corner in self.corners() {
            let v = *rotation * Vector3::new(corner.x, corner.y, corner.z);
            out.include_point(Point3::new(v.x, v.y, v.z));
        }
        out
    }

    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }

    /// Extent along each axis; zero for an empty box.
    pub fn size(&self) -> Vector3 {
        if self.is_empty() {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
