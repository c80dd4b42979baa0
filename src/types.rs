//! Shared value types: material color input and world-space extents.

use glam::{DVec2, dvec2};

use crate::errors::ExportError;
use crate::scene::CurveObject;

/// Material color in linear light, channels in `[0, 1]`. Alpha is not
/// carried; the output format only takes fill and stroke colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned bounding rectangle in world space.
///
/// Accumulated over every selected object's transformed bounding corners
/// before any per-point conversion begins: the coordinate mapper needs the
/// resolved scale, which needs the full extent. Computed once and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: DVec2,
    pub max: DVec2,
}

impl Extent {
    /// The fold seed: expands on the first point it sees.
    pub fn empty() -> Self {
        Self {
            min: dvec2(f64::INFINITY, f64::INFINITY),
            max: dvec2(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Grow to include a world-space point.
    pub fn expand(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True while the seed has never been expanded.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Fold every object's local bounding corners, transformed to world
    /// space, into one extent.
    ///
    /// Fails with [`ExportError::EmptySelection`] when the object set is
    /// empty or no corner moved the seed; that signals "nothing measurable
    /// was selected".
    pub fn measure(objects: &[CurveObject]) -> Result<Self, ExportError> {
        let mut extent = Self::empty();
        for object in objects {
            for corner in object.bounds {
                let world = object.transform.transform_point3(corner);
                extent.expand(dvec2(world.x, world.y));
            }
        }
        if extent.is_empty() {
            return Err(ExportError::EmptySelection);
        }
        crate::log::debug!(
            min_x = extent.min.x,
            min_y = extent.min.y,
            max_x = extent.max.x,
            max_y = extent.max.y,
            "measured selection extent"
        );
        Ok(extent)
    }
}
