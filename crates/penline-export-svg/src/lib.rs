//! SVG export for pen plotters
//!
//! Turns a [`Scene`] into an SVG document made of strokes only:
//!
//! - One `<g>` per colour, in order of first use, marked as an Inkscape layer
//!   so plotter tooling can pause for a pen change between them
//! - `fill="none"` everywhere; shading is already hatch lines
//! - Region rings as closed subpaths, polylines and hatch segments open
//!
//! Coordinates are written with a configurable number of decimals and
//! trailing zeros trimmed.

use std::fmt::Write as FmtWrite;

use geo::LineString;
use penline_core::{
    error::{ExportError, Result},
    Color, Drawable, Part, Region, Scene,
};

/// SVG exporter for plotter scenes
#[derive(Debug, Clone)]
pub struct SvgExporter {
    /// Decimal places for coordinates
    precision: usize,
    /// Emit Inkscape layer attributes on colour groups
    layers: bool,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self {
            precision: 3,
            layers: true,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_layers(mut self, layers: bool) -> Self {
        self.layers = layers;
        self
    }

    /// Export a scene to a complete SVG document
    pub fn export(&self, scene: &Scene) -> Result<String> {
        let mut svg = String::new();

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        let (w, h) = (self.num(scene.width), self.num(scene.height));
        let namespaces = if self.layers {
            r#" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape""#
        } else {
            ""
        };
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} viewBox="0 0 {} {}" width="{}" height="{}">"#,
            namespaces, w, h, w, h
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        let colors = scene.colors();
        for (index, color) in colors.iter().enumerate() {
            self.write_layer(&mut svg, index + 1, *color, scene)?;
        }

        writeln!(&mut svg, "</svg>").map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        log::debug!(
            "Exported {} drawables in {} layers ({} bytes)",
            scene.drawables.len(),
            colors.len(),
            svg.len()
        );

        Ok(svg)
    }

    fn write_layer(&self, svg: &mut String, index: usize, color: Color, scene: &Scene) -> Result<()> {
        let layer = if self.layers {
            format!(
                r#" inkscape:groupmode="layer" inkscape:label="{} {}""#,
                index,
                color.to_hex()
            )
        } else {
            String::new()
        };
        writeln!(
            svg,
            r#"  <g id="layer{}"{} stroke="{}" fill="none" stroke-linecap="round" stroke-linejoin="round">"#,
            index, layer, color
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        for drawable in scene.drawables.iter().filter(|d| d.color == color) {
            self.write_drawable(svg, drawable)?;
        }

        writeln!(svg, "  </g>").map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    fn write_drawable(&self, svg: &mut String, drawable: &Drawable) -> Result<()> {
        let d = self.path_data(&drawable.part);
        if d.is_empty() {
            return Ok(());
        }
        writeln!(
            svg,
            r#"    <path d="{}" stroke-width="{}"/>"#,
            d,
            self.num(drawable.stroke_width)
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    /// SVG path data for one part; empty when there is nothing to stroke
    pub fn path_data(&self, part: &Part) -> String {
        let mut d = String::new();
        match part {
            Part::Outline(region) => self.push_region(&mut d, region),
            Part::Stroke(polyline) => self.push_line(&mut d, polyline.as_line_string(), false),
            Part::Hatch(hatch) => {
                for segment in hatch.segments() {
                    self.push_move(&mut d, segment.from.x, segment.from.y);
                    self.push_line_to(&mut d, segment.to.x, segment.to.y);
                }
            }
        }
        d
    }

    fn push_region(&self, d: &mut String, region: &Region) {
        for polygon in region.polygons() {
            self.push_line(d, polygon.exterior(), true);
            for hole in polygon.interiors() {
                self.push_line(d, hole, true);
            }
        }
    }

    fn push_line(&self, d: &mut String, line: &LineString<f64>, closed: bool) {
        let mut coords = line.0.as_slice();
        if closed && coords.len() > 1 && coords.first() == coords.last() {
            coords = &coords[..coords.len() - 1];
        }
        if coords.len() < 2 {
            return;
        }
        self.push_move(d, coords[0].x, coords[0].y);
        for c in &coords[1..] {
            self.push_line_to(d, c.x, c.y);
        }
        if closed {
            d.push('Z');
        }
    }

    fn push_move(&self, d: &mut String, x: f64, y: f64) {
        if !d.is_empty() {
            d.push(' ');
        }
        d.push('M');
        self.push_point(d, x, y);
    }

    fn push_line_to(&self, d: &mut String, x: f64, y: f64) {
        d.push('L');
        self.push_point(d, x, y);
    }

    fn push_point(&self, d: &mut String, x: f64, y: f64) {
        d.push_str(&self.num(x));
        d.push(',');
        d.push_str(&self.num(y));
    }

    fn num(&self, value: f64) -> String {
        let mut s = format!("{:.*}", self.precision, value);
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s = "0".to_string();
        }
        s
    }
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new()
    }
}
