//! Per-object path compilation: command string, id, and fill/stroke styling.

use super::coords::MapFrame;
use super::raster::{RasterizeSpline, Rasterizer};
use crate::scene::CurveObject;
use crate::types::Rgb;

/// One compiled `<path>` element: everything the document assembler needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub id: String,
    /// Space-joined path command string.
    pub data: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Compile all splines of one curve object into a single path element.
///
/// Returns `None` when the object has no renderable splines; the caller
/// skips such objects silently rather than treating them as errors.
pub fn compile_path(
    object: &CurveObject,
    scale: f64,
    precision: u32,
    include_fills: bool,
) -> Option<PathElement> {
    let frame = MapFrame::new(object.transform, scale, precision);

    let mut commands: Vec<String> = Vec::new();
    for spline in &object.splines {
        let rasterizer = Rasterizer::from(spline.kind);
        commands.extend(
            rasterizer
                .rasterize(spline, &frame)
                .iter()
                .map(ToString::to_string),
        );
    }

    if commands.is_empty() {
        crate::log::debug!(id = object.id.as_str(), "object has no renderable splines");
        return None;
    }

    let (fill, stroke) = match object.fill_color.filter(|_| include_fills) {
        Some(color) => {
            let hex = rgb_to_hex(color);
            (hex.clone(), hex)
        }
        None => ("none".to_string(), "#000000".to_string()),
    };

    Some(PathElement {
        id: object.id.clone(),
        data: commands.join(" "),
        fill,
        stroke,
        // Counteract the document scale so stroke thickness stays visually
        // consistent across scale choices, with a 1px floor.
        stroke_width: (2.0 / scale).max(1.0),
    })
}

/// Encode a linear-light color as `#rrggbb`. Alpha is ignored.
pub fn rgb_to_hex(color: Rgb) -> String {
    format!(
        "#{}{}{}",
        channel_to_hex(color.r),
        channel_to_hex(color.g),
        channel_to_hex(color.b)
    )
}

/// One linear channel to two lowercase hex digits, via the sRGB transfer
/// function: below the linear threshold the channel scales linearly,
/// otherwise it goes through the power-law gamma curve.
fn channel_to_hex(channel: f64) -> String {
    let srgb = if channel < 0.0031308 {
        if channel < 0.0 { 0.0 } else { channel * 12.92 }
    } else {
        channel.powf(1.0 / 2.4) * 1.055 - 0.055
    };
    let byte = ((srgb * 255.0 + 0.5) as i32).clamp(0, 255);
    format!("{byte:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ControlPoint, Spline, SplineKind, Transform};
    use glam::dvec3;

    fn poly_object(id: &str, fill_color: Option<Rgb>) -> CurveObject {
        let spline = Spline::new(
            SplineKind::Poly,
            vec![
                ControlPoint::anchor(dvec3(0.0, 0.0, 0.0)),
                ControlPoint::anchor(dvec3(1.0, 0.0, 0.0)),
                ControlPoint::anchor(dvec3(1.0, 1.0, 0.0)),
            ],
            true,
        );
        CurveObject {
            id: id.to_string(),
            transform: Transform::IDENTITY,
            splines: vec![spline],
            fill_color,
            bounds: [dvec3(0.0, 0.0, 0.0); 8],
        }
    }

    #[test]
    fn midgray_channel_matches_srgb_transfer() {
        // 0.5 linear -> 0.5^(1/2.4) * 1.055 - 0.055 ~ 0.7355 -> 188 -> "bc"
        assert_eq!(channel_to_hex(0.5), "bc");
    }

    #[test]
    fn channel_extremes_clamp() {
        assert_eq!(channel_to_hex(0.0), "00");
        assert_eq!(channel_to_hex(1.0), "ff");
        assert_eq!(channel_to_hex(-0.25), "00");
        assert_eq!(channel_to_hex(2.0), "ff");
    }

    #[test]
    fn dark_channel_uses_linear_segment() {
        // 0.002 * 12.92 * 255 + 0.5 = 7.08 -> "07"
        assert_eq!(channel_to_hex(0.002), "07");
    }

    #[test]
    fn rgb_to_hex_concatenates_channels() {
        assert_eq!(rgb_to_hex(Rgb::new(0.5, 0.5, 0.5)), "#bcbcbc");
        assert_eq!(rgb_to_hex(Rgb::new(1.0, 0.0, 0.5)), "#ff00bc");
    }

    #[test]
    fn object_without_splines_compiles_to_none() {
        let mut object = poly_object("empty", None);
        object.splines.clear();
        assert_eq!(compile_path(&object, 100.0, 3, true), None);
    }

    #[test]
    fn object_with_only_empty_splines_compiles_to_none() {
        let mut object = poly_object("hollow", None);
        object.splines = vec![Spline::new(SplineKind::Bezier, Vec::new(), false)];
        assert_eq!(compile_path(&object, 100.0, 3, true), None);
    }

    #[test]
    fn default_styling_is_black_stroke_no_fill() {
        let element = compile_path(&poly_object("p", None), 100.0, 3, true).unwrap();
        assert_eq!(element.fill, "none");
        assert_eq!(element.stroke, "#000000");
    }

    #[test]
    fn material_color_fills_and_strokes() {
        let color = Some(Rgb::new(0.5, 0.5, 0.5));
        let element = compile_path(&poly_object("p", color), 100.0, 3, true).unwrap();
        assert_eq!(element.fill, "#bcbcbc");
        assert_eq!(element.stroke, "#bcbcbc");
    }

    #[test]
    fn fills_can_be_disabled() {
        let color = Some(Rgb::new(0.5, 0.5, 0.5));
        let element = compile_path(&poly_object("p", color), 100.0, 3, false).unwrap();
        assert_eq!(element.fill, "none");
        assert_eq!(element.stroke, "#000000");
    }

    #[test]
    fn stroke_width_floors_at_one() {
        let element = compile_path(&poly_object("p", None), 100.0, 3, true).unwrap();
        assert_eq!(element.stroke_width, 1.0);
    }

    #[test]
    fn stroke_width_widens_at_small_scales() {
        let element = compile_path(&poly_object("p", None), 0.5, 3, true).unwrap();
        assert_eq!(element.stroke_width, 4.0);
    }

    #[test]
    fn commands_are_space_joined_across_splines() {
        let mut object = poly_object("two", None);
        let second = Spline::new(
            SplineKind::Poly,
            vec![
                ControlPoint::anchor(dvec3(2.0, 0.0, 0.0)),
                ControlPoint::anchor(dvec3(3.0, 0.0, 0.0)),
            ],
            false,
        );
        object.splines.push(second);

        let element = compile_path(&object, 1.0, 3, true).unwrap();
        assert_eq!(element.data, "M 0,0 L 1,0 L 1,-1 Z M 2,0 L 3,0");
    }
}
