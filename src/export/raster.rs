//! Per-spline-type rasterization into path commands.
//!
//! Each spline kind has its own strategy, dispatched through [`Rasterizer`].
//! Every strategy returns an ordered command sequence; an empty spline yields
//! an empty sequence so the caller can skip it without emitting a stray
//! MoveTo.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::coords::MapFrame;
use crate::scene::{Spline, SplineKind};

/// One drawing command in output space. Sequence order is significant; the
/// sequence renders left-to-right into a single path data string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo { h1: DVec2, h2: DVec2, to: DVec2 },
    ClosePath,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {},{}", p.x, p.y),
            PathCommand::CubicTo { h1, h2, to } => {
                write!(f, "C {},{} {},{} {},{}", h1.x, h1.y, h2.x, h2.y, to.x, to.y)
            }
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// Strategy interface for turning one spline into path commands.
#[enum_dispatch]
pub trait RasterizeSpline {
    fn rasterize(&self, spline: &Spline, frame: &MapFrame) -> Vec<PathCommand>;
}

/// Cubic segments between anchors, shaped by the tangent handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BezierRasterizer;

/// Straight segments between anchors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyRasterizer;

/// Linear resampling of the NURBS control polygon.
///
/// This is a documented approximation: true NURBS evaluation is out of scope,
/// so the control polygon is resampled at `max(point_count * 8, 32)` evenly
/// spaced parameter values and interior samples lerp between the bracketing
/// control points. Weights are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NurbsRasterizer;

/// Rasterizer strategy, selected by spline kind.
#[enum_dispatch(RasterizeSpline)]
#[derive(Debug, Clone, Copy)]
pub enum Rasterizer {
    Bezier(BezierRasterizer),
    Poly(PolyRasterizer),
    Nurbs(NurbsRasterizer),
}

impl From<SplineKind> for Rasterizer {
    fn from(kind: SplineKind) -> Self {
        match kind {
            SplineKind::Bezier => BezierRasterizer.into(),
            SplineKind::Poly => PolyRasterizer.into(),
            SplineKind::NurbsLike => NurbsRasterizer.into(),
        }
    }
}

impl RasterizeSpline for BezierRasterizer {
    fn rasterize(&self, spline: &Spline, frame: &MapFrame) -> Vec<PathCommand> {
        let points = &spline.points;
        let Some(first) = points.first() else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(points.len() + 2);
        commands.push(PathCommand::MoveTo(frame.project(first.anchor)));

        for pair in points.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            commands.push(PathCommand::CubicTo {
                h1: frame.project(prev.handle_out),
                h2: frame.project(curr.handle_in),
                to: frame.project(curr.anchor),
            });
        }

        // Closing a loop takes a real curve segment back to the first anchor.
        // With two or fewer points that segment would be degenerate, so the
        // loop is left open.
        if spline.closed && points.len() > 2 {
            let last = &points[points.len() - 1];
            commands.push(PathCommand::CubicTo {
                h1: frame.project(last.handle_out),
                h2: frame.project(first.handle_in),
                to: frame.project(first.anchor),
            });
            commands.push(PathCommand::ClosePath);
        }

        commands
    }
}

impl RasterizeSpline for PolyRasterizer {
    fn rasterize(&self, spline: &Spline, frame: &MapFrame) -> Vec<PathCommand> {
        let points = &spline.points;
        let Some(first) = points.first() else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(points.len() + 1);
        commands.push(PathCommand::MoveTo(frame.project(first.anchor)));
        for point in &points[1..] {
            commands.push(PathCommand::LineTo(frame.project(point.anchor)));
        }

        // A straight-line close is implicit in the Z command.
        if spline.closed {
            commands.push(PathCommand::ClosePath);
        }

        commands
    }
}

impl RasterizeSpline for NurbsRasterizer {
    fn rasterize(&self, spline: &Spline, frame: &MapFrame) -> Vec<PathCommand> {
        let points = &spline.points;
        let n = points.len();
        // A single control point spans no curve; valid empty case, not an error.
        if n < 2 {
            return Vec::new();
        }

        let resolution = (n * 8).max(32);
        let mut commands = Vec::with_capacity(resolution + 2);

        for i in 0..=resolution {
            let t = i as f64 / resolution as f64;
            let local = if i == 0 {
                points[0].anchor
            } else if i == resolution {
                points[n - 1].anchor
            } else {
                let span = t * (n - 1) as f64;
                let idx = (span as usize).min(n - 2);
                let local_t = span - idx as f64;
                points[idx].anchor.lerp(points[idx + 1].anchor, local_t)
            };

            let mapped = frame.project(local);
            commands.push(if i == 0 {
                PathCommand::MoveTo(mapped)
            } else {
                PathCommand::LineTo(mapped)
            });
        }

        if spline.closed {
            commands.push(PathCommand::ClosePath);
        }

        commands
    }
}
