//! The curve data model and the capability interface over the host scene.
//!
//! The host application exposes duck-typed scene objects; the compiler never
//! inspects those dynamically. Instead, an adapter implements [`SceneCurve`]
//! and the pipeline works on owned [`CurveObject`] snapshots taken from it.

use glam::{DMat4, DVec3};

use crate::types::Rgb;

/// A coordinate in object-local space. Immutable once read from the source
/// geometry.
pub type Point3 = DVec3;

/// Affine matrix mapping object-local space to world space. Owned by the
/// curve object and applied read-only during conversion.
pub type Transform = DMat4;

/// One anchor of a spline, with tangent handles for Bezier segments.
///
/// Handles are absolute positions, not offsets from the anchor (the host
/// stores them that way). Poly and NURBS-like points carry only the anchor;
/// their handles sit on the anchor itself and `weight` is ignored by the
/// compiler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub anchor: Point3,
    /// Tangent control for the cubic segment entering this point.
    pub handle_in: Point3,
    /// Tangent control for the cubic segment leaving this point.
    pub handle_out: Point3,
    /// NURBS weight; carried through from the host but unused.
    pub weight: f64,
}

impl ControlPoint {
    /// A handle-less point (poly and NURBS-like splines).
    pub fn anchor(position: Point3) -> Self {
        Self {
            anchor: position,
            handle_in: position,
            handle_out: position,
            weight: 1.0,
        }
    }

    /// A Bezier point with explicit tangent handles.
    pub fn with_handles(anchor: Point3, handle_in: Point3, handle_out: Point3) -> Self {
        Self {
            anchor,
            handle_in,
            handle_out,
            weight: 1.0,
        }
    }
}

/// How a spline's point list is interpreted when rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineKind {
    /// Cubic Bezier segments between anchors, shaped by the handles.
    Bezier,
    /// Straight segments between anchors.
    Poly,
    /// NURBS control polygon, approximated by linear resampling.
    NurbsLike,
}

/// One continuous sub-path within a curve object.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub kind: SplineKind,
    pub points: Vec<ControlPoint>,
    /// The last point connects back to the first, forming a loop.
    pub closed: bool,
}

impl Spline {
    pub fn new(kind: SplineKind, points: Vec<ControlPoint>, closed: bool) -> Self {
        Self {
            kind,
            points,
            closed,
        }
    }
}

/// An owned snapshot of one exportable curve object from the host scene.
#[derive(Debug, Clone)]
pub struct CurveObject {
    /// Host object name; becomes the output element id.
    pub id: String,
    pub transform: Transform,
    pub splines: Vec<Spline>,
    /// Material color in linear light, when the host has one assigned.
    pub fill_color: Option<Rgb>,
    /// Corners of the object's axis-aligned local bounding box.
    pub bounds: [Point3; 8],
}

impl CurveObject {
    /// Take an owned snapshot of a host scene object.
    pub fn snapshot<S: SceneCurve + ?Sized>(source: &S) -> Self {
        Self {
            id: source.id().to_string(),
            transform: source.world_transform(),
            splines: source.splines(),
            fill_color: source.fill_color(),
            bounds: source.bound_corners(),
        }
    }
}

/// Fixed capability interface over the host's scene objects.
///
/// Adapters over the real scene implement this; the compiler only ever sees
/// snapshots taken through it.
pub trait SceneCurve {
    fn id(&self) -> &str;
    /// Whether the host flags this curve as 2D. Only 2D curves are exported.
    fn is_two_dimensional(&self) -> bool;
    fn world_transform(&self) -> Transform;
    fn splines(&self) -> Vec<Spline>;
    fn bound_corners(&self) -> [Point3; 8];
    fn fill_color(&self) -> Option<Rgb>;
}

/// Snapshot every eligible (2D) curve in the selection, preserving the
/// host's selection order. That order determines output element order.
pub fn snapshot_selection<'a, I>(sources: I) -> Vec<CurveObject>
where
    I: IntoIterator<Item = &'a dyn SceneCurve>,
{
    sources
        .into_iter()
        .filter(|source| {
            let eligible = source.is_two_dimensional();
            if !eligible {
                crate::log::debug!(id = source.id(), "skipping non-2D curve");
            }
            eligible
        })
        .map(CurveObject::snapshot)
        .collect()
}

/// The eight corners of an axis-aligned box given its min/max corners.
pub fn box_corners(min: Point3, max: Point3) -> [Point3; 8] {
    [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(min.x, max.y, max.z),
        DVec3::new(max.x, max.y, max.z),
    ]
}
