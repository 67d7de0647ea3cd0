//! Drawable output: what a render call hands to a serializer

use std::fmt;
use std::str::FromStr;

use crate::error::PenlineError;
use crate::hatch_set::HatchSet;
use crate::polyline::Polyline;
use crate::region::Region;
use crate::types::{Bounds, Position, Transform};

/// Stroke color. Each distinct color becomes its own plotter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    fn from_u32(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// The next color up as a 24-bit number, saturating at white.
    ///
    /// Visually identical, but keeps overlapping strokes in their own layer.
    pub fn nudged(self) -> Self {
        Self::from_u32((self.to_u32() + 1).min(0xFF_FFFF))
    }

    pub fn to_hex(self) -> String {
        format!("{:06x}", self.to_u32())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = PenlineError;

    /// Accepts `RRGGBB` with or without a leading `#`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(PenlineError::Config(format!("invalid color: {s}")));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|_| PenlineError::Config(format!("invalid color: {s}")))
    }
}

/// The closed set of things a serializer has to know how to stroke
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Boundary rings of a closed area
    Outline(Region),
    /// An open path
    Stroke(Polyline),
    /// Hatch segments standing in for a fill
    Hatch(HatchSet),
}

impl Part {
    pub fn is_empty(&self) -> bool {
        match self {
            Part::Outline(region) => region.is_empty(),
            Part::Stroke(polyline) => polyline.is_empty(),
            Part::Hatch(hatch) => hatch.is_empty(),
        }
    }
}

impl Transform for Part {
    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Part::Outline(region) => region.translate(dx, dy),
            Part::Stroke(polyline) => polyline.translate(dx, dy),
            Part::Hatch(hatch) => hatch.translate(dx, dy),
        }
    }

    fn scale(&mut self, factor: f64, origin: Position) {
        match self {
            Part::Outline(region) => region.scale(factor, origin),
            Part::Stroke(polyline) => polyline.scale(factor, origin),
            Part::Hatch(hatch) => hatch.scale(factor, origin),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Part::Outline(region) => region.bounds(),
            Part::Stroke(polyline) => polyline.bounds(),
            Part::Hatch(hatch) => hatch.bounds(),
        }
    }
}

/// A part tagged with its pen
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub part: Part,
    pub color: Color,
    pub stroke_width: f64,
}

impl Drawable {
    pub fn new(part: Part, color: Color) -> Self {
        Self {
            part,
            color,
            stroke_width: 1.0,
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// One finished illustration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drawables: Vec::new(),
        }
    }

    /// Adds a part; empty geometry is dropped
    pub fn push(&mut self, part: Part, color: Color) {
        if !part.is_empty() {
            self.drawables.push(Drawable::new(part, color));
        }
    }

    pub fn extend(&mut self, drawables: impl IntoIterator<Item = Drawable>) {
        self.drawables
            .extend(drawables.into_iter().filter(|d| !d.part.is_empty()));
    }

    /// Distinct colors in order of first use
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = Vec::new();
        for d in &self.drawables {
            if !colors.contains(&d.color) {
                colors.push(d.color);
            }
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("#DA291C".parse::<Color>().unwrap(), Color::rgb(0xda, 0x29, 0x1c));
        assert_eq!("00843D".parse::<Color>().unwrap(), Color::rgb(0x00, 0x84, 0x3d));
        assert!("red".parse::<Color>().is_err());
        assert!("12345".parse::<Color>().is_err());
    }

    #[test]
    fn test_nudged_carries_and_saturates() {
        assert_eq!(Color::black().nudged().to_hex(), "000001");
        assert_eq!(Color::rgb(0, 0, 0xff).nudged().to_hex(), "000100");
        assert_eq!(Color::rgb(0xff, 0xff, 0xff).nudged().to_hex(), "ffffff");
    }

    #[test]
    fn test_scene_drops_empty_parts_and_lists_colors() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(Part::Outline(Region::empty()), Color::black());
        scene.push(
            Part::Outline(Region::rectangle(Bounds::new(0.0, 0.0, 1.0, 1.0))),
            Color::blue(),
        );
        scene.push(
            Part::Outline(Region::rectangle(Bounds::new(2.0, 0.0, 1.0, 1.0))),
            Color::black(),
        );
        assert_eq!(scene.drawables.len(), 2);
        assert_eq!(scene.colors(), vec![Color::blue(), Color::black()]);
    }
}
