//! Error types for the export pipeline.
//!
//! Only two conditions abort an export: an empty/unmeasurable selection and a
//! failed write. Malformed individual splines and pathless curve objects are
//! skipped silently so one bad object cannot sink the whole document.

use miette::Diagnostic;
use thiserror::Error;

/// Fatal export failures. No partial output is written when these occur.
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    /// The selection contained no eligible 2D curve objects, or none of their
    /// bounding corners produced a measurable world-space extent.
    #[error("no 2D curve objects with measurable bounds")]
    #[diagnostic(
        code(curvesvg::export::empty_selection),
        help("select at least one 2D curve object before exporting")
    )]
    EmptySelection,

    /// The destination could not be written. Surfaced with the underlying
    /// cause; the write is attempted once and never retried.
    #[error("failed to write SVG document")]
    #[diagnostic(code(curvesvg::export::write))]
    Write {
        #[source]
        source: std::io::Error,
    },
}

/// Rejected configuration values (outside the ranges the host UI exposes).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scale {0} is not finite")]
    #[diagnostic(code(curvesvg::config::scale_not_finite))]
    ScaleNotFinite(f64),

    #[error("scale {0} is outside 0.1..=1000")]
    #[diagnostic(code(curvesvg::config::scale_out_of_range))]
    ScaleOutOfRange(f64),

    #[error("precision {0} is outside 0..=10")]
    #[diagnostic(code(curvesvg::config::precision_out_of_range))]
    PrecisionOutOfRange(u32),
}
