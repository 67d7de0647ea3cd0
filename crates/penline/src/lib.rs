//! Penline - transit posters as pen-plotter line art
//!
//! Everything Penline draws is strokes: glyph outlines, hatch lines standing
//! in for fills, and map traces. The crates split along the pipeline:
//!
//! 1. Fonts become glyph contours (`penline-fontdb`)
//! 2. Contours become regions, laid out as text, pills and maps (`penline-layout`)
//! 3. Poster templates arrange those on a page ([`posters`])
//! 4. The finished [`Scene`] becomes SVG (`penline-export-svg`)
//!
//! # Example
//!
//! ```ignore
//! use penline::prelude::*;
//! use penline::posters::{self, BusRouteData, Format, PosterFonts};
//!
//! let regular = Font::from_file("Inter-Regular.otf")?;
//! let bold = Font::from_file("Inter-Bold.otf")?;
//! let scene = posters::bus_route(Format::Print, &data, PosterFonts::new(&regular, &bold))?;
//! let svg = SvgExporter::new().export(&scene)?;
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb`: font loading through skrifa
//! - `export-svg`: SVG output

pub use penline_core::{error, params, traits, Color, Part, Scene};
pub use penline_layout as layout;

#[cfg(feature = "fontdb")]
pub use penline_fontdb as fontdb;

#[cfg(feature = "export-svg")]
pub use penline_export_svg as export_svg;

pub mod posters;

/// Common imports for typical usage
pub mod prelude {
    pub use penline_core::{
        error::{PenlineError, Result},
        traits::OutlineProvider,
        Bounds, Color, Drawable, FillStyle, Part, Position, Region, Scene, Transform,
    };
    pub use penline_layout::{
        fixed_size_pill, full_fit, layout_lines, split_description, variable_width_pill,
        windowed_fit, FixedPillParams, MapStyle, TextParams, VariablePillParams,
    };

    #[cfg(feature = "export-svg")]
    pub use penline_export_svg::SvgExporter;

    #[cfg(feature = "fontdb")]
    pub use penline_fontdb::Font;
}
