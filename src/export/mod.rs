//! The geometry-to-SVG export pipeline.
//!
//! Submodules, leaf first:
//! - `coords`: world-space to output-space point mapping (Y-flip, rounding)
//! - `scale`: effective scale resolution with the auto-adjust heuristic
//! - `raster`: per-spline-type path command generation
//! - `path`: per-object path compilation and styling
//! - `svg`: document assembly and serialization
//!
//! Data flows strictly leaf-to-root: the extent and scale are resolved over
//! the whole selection first, then each object is compiled independently in
//! selection order, then the document is assembled and serialized. The whole
//! pipeline is single-threaded and synchronous; the only I/O is the final
//! write.

pub mod coords;
pub mod path;
pub mod raster;
pub mod scale;
pub mod svg;

use std::io;
use std::path::Path;

pub use path::PathElement;
pub use raster::{PathCommand, RasterizeSpline, Rasterizer};
pub use svg::SvgDocument;

use crate::errors::{ConfigError, ExportError};
use crate::scene::CurveObject;
use crate::types::Extent;

/// Immutable export settings, passed in at call time.
///
/// The ranges mirror what the host UI exposes; [`ExportConfig::try_new`]
/// rejects anything outside them. `Default` gives the UI defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Requested scale factor, `0.1..=1000`. May still be overridden by the
    /// auto-adjust heuristic when the geometry's native units are extreme.
    pub scale: f64,
    /// Decimal places for emitted coordinates, `0..=10`.
    pub precision: u32,
    /// Emit the document as a single line.
    pub minify: bool,
    /// Style paths with their material color when one is assigned.
    pub include_fills: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            precision: 3,
            minify: false,
            include_fills: true,
        }
    }
}

impl ExportConfig {
    /// Build a validated configuration.
    pub fn try_new(
        scale: f64,
        precision: u32,
        minify: bool,
        include_fills: bool,
    ) -> Result<Self, ConfigError> {
        if !scale.is_finite() {
            return Err(ConfigError::ScaleNotFinite(scale));
        }
        if !(0.1..=1000.0).contains(&scale) {
            return Err(ConfigError::ScaleOutOfRange(scale));
        }
        if precision > 10 {
            return Err(ConfigError::PrecisionOutOfRange(precision));
        }
        Ok(Self {
            scale,
            precision,
            minify,
            include_fills,
        })
    }
}

/// Compile a selection of curve objects into a serialized SVG document.
///
/// Objects render in input order; that order is the host's selection order
/// and determines output element order. Objects without renderable splines
/// are skipped silently.
pub fn export_document(
    objects: &[CurveObject],
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let extent = Extent::measure(objects)?;
    let scale = scale::resolve_scale(&extent, config.scale);

    let mut document = SvgDocument::new(&extent, scale);
    for object in objects {
        if let Some(element) =
            path::compile_path(object, scale, config.precision, config.include_fills)
        {
            document.push(element);
        }
    }

    crate::log::debug!(
        paths = document.path_count(),
        scale,
        "assembled SVG document"
    );
    Ok(document.render(config.minify))
}

/// Export and write to an arbitrary destination in one attempt.
///
/// The document is fully rendered before the write begins, so a fatal
/// pipeline error never leaves partial output behind.
pub fn export_to_writer<W: io::Write>(
    writer: &mut W,
    objects: &[CurveObject],
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let rendered = export_document(objects, config)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(|source| ExportError::Write { source })
}

/// Export and write to a file in one attempt.
pub fn export_to_file(
    destination: impl AsRef<Path>,
    objects: &[CurveObject],
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let rendered = export_document(objects, config)?;
    std::fs::write(destination, rendered).map_err(|source| ExportError::Write { source })
}
