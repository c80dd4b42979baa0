//! Scale resolution: keep the emitted document at a sane pixel footprint.
//!
//! Source models come in wildly different native units. Rather than make the
//! caller know the unit scale in advance, the requested scale is overridden
//! whenever the scaled long edge would land outside a reasonable pixel range.

use crate::types::Extent;

/// Long edge of the document after an auto-adjust override, in pixels.
const TARGET_SIZE: f64 = 500.0;

/// Scaled long edges below this trigger an override.
const MIN_FOOTPRINT: f64 = 10.0;

/// Scaled long edges above this trigger an override.
const MAX_FOOTPRINT: f64 = 5000.0;

/// Decide the effective scale factor for a measured extent.
///
/// Degenerate geometry (zero width or height) keeps the requested scale
/// unchanged; there is nothing to auto-adjust against.
pub fn resolve_scale(extent: &Extent, requested: f64) -> f64 {
    let width = extent.width();
    let height = extent.height();
    if width <= 0.0 || height <= 0.0 {
        return requested;
    }

    let long_edge = width.max(height);
    let footprint = long_edge * requested;
    if footprint < MIN_FOOTPRINT || footprint > MAX_FOOTPRINT {
        let adjusted = TARGET_SIZE / long_edge;
        crate::log::warn!(requested, adjusted, footprint, "auto-adjusting export scale");
        adjusted
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn extent(width: f64, height: f64) -> Extent {
        let mut e = Extent::empty();
        e.expand(dvec2(0.0, 0.0));
        e.expand(dvec2(width, height));
        e
    }

    #[test]
    fn tiny_geometry_is_scaled_up() {
        // 0.005 * 1 = 0.005 < 10, so the target size takes over.
        assert_eq!(resolve_scale(&extent(0.005, 0.005), 1.0), 100_000.0);
    }

    #[test]
    fn footprint_at_upper_bound_keeps_requested_scale() {
        // 50 * 100 = 5000 is not above the limit.
        assert_eq!(resolve_scale(&extent(50.0, 50.0), 100.0), 100.0);
    }

    #[test]
    fn footprint_at_lower_bound_keeps_requested_scale() {
        // 0.1 * 100 = 10 is not below the limit.
        assert_eq!(resolve_scale(&extent(0.1, 0.1), 100.0), 100.0);
    }

    #[test]
    fn huge_geometry_is_scaled_down() {
        // 100 * 100 = 10000 > 5000, override to 500 / 100.
        assert_eq!(resolve_scale(&extent(100.0, 100.0), 100.0), 5.0);
    }

    #[test]
    fn long_edge_drives_the_decision() {
        // Height is the long edge here: 200 * 100 > 5000.
        assert_eq!(resolve_scale(&extent(1.0, 200.0), 100.0), 2.5);
    }

    #[test]
    fn degenerate_extent_keeps_requested_scale() {
        assert_eq!(resolve_scale(&extent(0.0, 5.0), 42.0), 42.0);
        assert_eq!(resolve_scale(&extent(5.0, 0.0), 42.0), 42.0);
    }
}
