//! Parameter records for one incubator generation run.
//!
//! `IncubatorParams` is the flat record read from configuration files and the
//! command line. It splits into the three validated groups the layout code
//! consumes: [`Dimensions`], [`WallSpec`] and [`HoleSpec`].

use crate::{DEFAULT_FILLET_RADIUS, Error, Result, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};

/// Outer bounding box of the enclosure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, depth: f64, height: f64) -> Result<Self> {
        let dims = Self {
            width,
            depth,
            height,
        };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("width", self.width)?;
        ensure_positive("depth", self.depth)?;
        ensure_positive("height", self.height)?;
        Ok(())
    }

    /// Largest fillet radius that still fits inside the box on every axis.
    pub fn max_fillet_radius(&self) -> f64 {
        0.5 * self.width.min(self.depth).min(self.height)
    }
}

/// Wall thickness and corner fillet, both consumed from the interior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub thickness: f64,
    pub radius: f64,
}

impl WallSpec {
    pub fn new(thickness: f64, radius: f64) -> Result<Self> {
        let walls = Self { thickness, radius };
        walls.validate()?;
        Ok(walls)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("thickness", self.thickness)?;
        ensure_non_negative("fillet_radius", self.radius)?;
        Ok(())
    }

    /// Copy with the radius limited to what `dims` can hold.
    pub fn fitted_to(&self, dims: &Dimensions) -> Self {
        Self {
            thickness: self.thickness,
            radius: self.radius.min(dims.max_fillet_radius()),
        }
    }
}

/// Ventilation hole diameter and the minimum gap between hole edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub diameter: f64,
    pub gap: f64,
}

impl HoleSpec {
    pub fn new(diameter: f64, gap: f64) -> Result<Self> {
        let hole = Self { diameter, gap };
        hole.validate()?;
        Ok(hole)
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !self.diameter.is_finite() || !self.gap.is_finite() {
            Some("values must be finite")
        } else if self.spacing() <= 0.0 {
            Some("diameter + gap must be > 0")
        } else if self.diameter <= 0.0 {
            Some("diameter must be > 0")
        } else if self.gap < 0.0 {
            Some("gap must be >= 0")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(Error::InvalidHoleSpec {
                diameter: self.diameter,
                gap: self.gap,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Center-to-center distance between neighbouring holes.
    pub fn spacing(&self) -> f64 {
        self.diameter + self.gap
    }

    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }
}

/// The flat parameter record of one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncubatorParams {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub thickness: f64,
    pub hole_distance: f64,
    pub hole_diameter: f64,
    pub fillet_radius: f64,
}

impl Default for IncubatorParams {
    fn default() -> Self {
        Self {
            width: 175.0,
            depth: 115.0,
            height: 75.0,
            thickness: 8.0,
            hole_distance: 5.0,
            hole_diameter: 0.5,
            fillet_radius: DEFAULT_FILLET_RADIUS,
        }
    }
}

impl IncubatorParams {
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.width, self.depth, self.height)
    }

    pub fn walls(&self) -> Result<WallSpec> {
        WallSpec::new(self.thickness, self.fillet_radius)
    }

    pub fn hole(&self) -> Result<HoleSpec> {
        HoleSpec::new(self.hole_diameter, self.hole_distance)
    }

    /// Checks every group; the first failure wins.
    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        self.walls()?;
        self.hole()?;
        Ok(())
    }

    /// Short identifier such as `175x115x75-8-5-0.5`.
    pub fn label(&self) -> String {
        format!(
            "{}x{}x{}-{}-{}-{}",
            self.width,
            self.depth,
            self.height,
            self.thickness,
            self.hole_distance,
            self.hole_diameter
        )
    }
}
