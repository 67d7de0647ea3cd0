//! Parameters shared by the layout engines and poster templates

use std::fmt;
use std::str::FromStr;

use crate::error::PenlineError;

/// Spacing used when a caller does not pick one.
pub const DEFAULT_HATCH_SPACING: f64 = 1.5;

/// How a pill is shaded with hatch lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStyle {
    /// Outline only
    #[default]
    None,
    /// Hatch the glyphs themselves
    Inside,
    /// Hatch the badge around the glyphs, leaving the text as a cutout
    Outside,
    InsideCrosshatch,
    OutsideCrosshatch,
}

impl FillStyle {
    /// Whether both diagonals are swept
    pub fn is_crosshatch(self) -> bool {
        matches!(self, FillStyle::InsideCrosshatch | FillStyle::OutsideCrosshatch)
    }

    /// Whether the style is available on content-sized pills
    pub fn is_two_state(self) -> bool {
        matches!(self, FillStyle::None | FillStyle::Inside | FillStyle::Outside)
    }

    pub fn name(self) -> &'static str {
        match self {
            FillStyle::None => "NONE",
            FillStyle::Inside => "INSIDE",
            FillStyle::Outside => "OUTSIDE",
            FillStyle::InsideCrosshatch => "INSIDE_CROSSHATCH",
            FillStyle::OutsideCrosshatch => "OUTSIDE_CROSSHATCH",
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillStyle {
    type Err = PenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "NONE" | "" => Ok(FillStyle::None),
            "INSIDE" => Ok(FillStyle::Inside),
            "OUTSIDE" => Ok(FillStyle::Outside),
            "INSIDE_CROSSHATCH" => Ok(FillStyle::InsideCrosshatch),
            "OUTSIDE_CROSSHATCH" => Ok(FillStyle::OutsideCrosshatch),
            other => Err(PenlineError::Config(format!("unknown fill style: {other}"))),
        }
    }
}
