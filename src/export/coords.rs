//! World-space to output-space coordinate mapping.
//!
//! The source tool's Y axis points up; the output format's points down, so
//! every mapped point negates Y. Rounding happens here and only here —
//! coordinates are never re-rounded during aggregation.

use glam::{DVec2, dvec2};

use crate::scene::{Point3, Transform};

/// Round to `precision` decimal places, halves away from zero (the semantics
/// of `f64::round`).
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    // Flipping Y can produce -0.0; fold it to 0.0 so no coordinate prints as "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Map a world-space point to a rounded output-space coordinate pair:
/// `x = round(p.x * scale)`, `y = round(-p.y * scale)`.
pub fn map_point(world: Point3, scale: f64, precision: u32) -> DVec2 {
    dvec2(
        round_to(world.x * scale, precision),
        round_to(-world.y * scale, precision),
    )
}

/// The per-object mapping context used by the rasterizer: one world
/// transform plus the resolved scale and precision.
#[derive(Debug, Clone, Copy)]
pub struct MapFrame {
    pub transform: Transform,
    pub scale: f64,
    pub precision: u32,
}

impl MapFrame {
    pub fn new(transform: Transform, scale: f64, precision: u32) -> Self {
        Self {
            transform,
            scale,
            precision,
        }
    }

    /// Transform an object-local point to world space, then map it.
    pub fn project(&self, local: Point3) -> DVec2 {
        map_point(self.transform.transform_point3(local), self.scale, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DMat4, dvec3};

    #[test]
    fn map_flips_y() {
        let mapped = map_point(dvec3(1.0, 2.0, 0.0), 3.0, 3);
        assert_eq!(mapped, dvec2(3.0, -6.0));
    }

    #[test]
    fn map_matches_rounded_flip_for_arbitrary_input() {
        let p = dvec3(0.123456, 0.654321, 9.0);
        let mapped = map_point(p, 7.5, 4);
        assert_eq!(mapped.x, round_to(p.x * 7.5, 4));
        assert_eq!(mapped.y, round_to(-p.y * 7.5, 4));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.0625, 3), 0.063);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [0.1234567, -98.7654321, 5.0, 0.0005] {
            let once = round_to(value, 3);
            assert_eq!(round_to(once, 3), once);
        }
    }

    #[test]
    fn remapping_rounded_input_at_unit_scale_preserves_magnitudes() {
        let mapped = map_point(dvec3(1.234, 5.678, 0.0), 1.0, 3);
        let remapped = map_point(dvec3(mapped.x, -mapped.y, 0.0), 1.0, 3);
        assert_eq!(remapped, mapped);
    }

    #[test]
    fn zero_never_maps_to_negative_zero() {
        let mapped = map_point(dvec3(0.0, 0.0, 0.0), 100.0, 3);
        assert!(mapped.x.is_sign_positive());
        assert!(mapped.y.is_sign_positive());
        assert_eq!(format!("{},{}", mapped.x, mapped.y), "0,0");
    }

    #[test]
    fn frame_projects_through_transform() {
        let frame = MapFrame::new(DMat4::from_translation(dvec3(1.0, 2.0, 0.0)), 10.0, 3);
        let mapped = frame.project(dvec3(1.0, 1.0, 0.0));
        assert_eq!(mapped, dvec2(20.0, -30.0));
    }
}
