use thiserror::Error;

pub mod params;

pub use params::{Dimensions, HoleSpec, IncubatorParams, WallSpec};

/// Floor thickness left under the cavity of every box.
pub const FLOOR_THICKNESS: f64 = 0.8;

/// Fillet radius used when the configuration does not name one.
pub const DEFAULT_FILLET_RADIUS: f64 = 3.0;

/// Lengths at or below `linear` are treated as zero.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    pub linear: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { linear: 1.0e-6 }
    }
}

impl Tolerance {
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.linear
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimension: {name} = {value} ({reason})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("invalid hole spec: diameter = {diameter}, gap = {gap} ({reason})")]
    InvalidHoleSpec {
        diameter: f64,
        gap: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(Error::InvalidDimension {
            name,
            value,
            reason: "must be > 0",
        });
    }
    Ok(())
}

pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(Error::InvalidDimension {
            name,
            value,
            reason: "must be >= 0",
        });
    }
    Ok(())
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidDimension {
            name,
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}
