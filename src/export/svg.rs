//! SVG document assembly and serialization.
//!
//! The output surface is deliberately small: a fixed root attribute set, a
//! generator comment, and one group of path elements. Serialization is
//! either a single minified line or an indented document with the SVG 1.1
//! doctype.

use std::fmt::Write as _;
use std::io;

use glam::{DVec2, dvec2};

use super::path::PathElement;
use crate::errors::ExportError;
use crate::types::Extent;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// An assembled document: extents resolved to pixel dimensions, plus one
/// path element per renderable curve object in selection order.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    /// Top-left corner in flipped output space.
    origin: DVec2,
    paths: Vec<PathElement>,
}

impl SvgDocument {
    /// Size the document from the measured extent and the resolved scale.
    ///
    /// The origin Y is `-max_y * scale`: the extent's top edge lands at the
    /// top of the viewport once the Y axis is flipped.
    pub fn new(extent: &Extent, scale: f64) -> Self {
        Self {
            width: extent.width() * scale,
            height: extent.height() * scale,
            origin: dvec2(extent.min.x * scale, -extent.max.y * scale),
            paths: Vec::new(),
        }
    }

    pub fn push(&mut self, path: PathElement) {
        self.paths.push(path);
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Serialize the document. Minified output is a single line after the
    /// XML declaration; pretty output is indented and carries the doctype.
    pub fn render(&self, minify: bool) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        if minify {
            self.write_body(&mut out, "", "");
        } else {
            out.push('\n');
            out.push_str(DOCTYPE);
            out.push('\n');
            self.write_body(&mut out, "  ", "\n");
            out.push('\n');
        }
        out
    }

    /// Serialize and write in one blocking call. No retry: a failure is
    /// surfaced with its cause and the operation is over.
    pub fn write_to<W: io::Write>(&self, writer: &mut W, minify: bool) -> Result<(), ExportError> {
        writer
            .write_all(self.render(minify).as_bytes())
            .map_err(|source| ExportError::Write { source })
    }

    fn write_body(&self, out: &mut String, indent: &str, newline: &str) {
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" x="0px" y="0px" width="{w:.1}px" height="{h:.1}px" viewBox="{x:.1} {y:.1} {w:.1} {h:.1}" xml:space="preserve">"#,
            w = self.width,
            h = self.height,
            x = self.origin.x,
            y = self.origin.y,
        );

        let _ = write!(
            out,
            "{newline}{indent}<!-- Generated by curvesvg {} -->",
            env!("CARGO_PKG_VERSION"),
        );

        let _ = write!(out, r#"{newline}{indent}<g id="curves">"#);
        for path in &self.paths {
            let _ = write!(
                out,
                r#"{newline}{indent}{indent}<path id="{id}" d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{sw:.2}"/>"#,
                id = escape_attr(&path.id),
                d = path.data,
                fill = path.fill,
                stroke = path.stroke,
                sw = path.stroke_width,
            );
        }
        let _ = write!(out, "{newline}{indent}</g>{newline}</svg>");
    }
}

/// Escape XML-significant characters in an attribute value. Object ids come
/// straight from host object names and can contain anything.
fn escape_attr(value: &str) -> String {
    if !value.contains(['&', '<', '>', '"']) {
        return value.to_string();
    }
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
