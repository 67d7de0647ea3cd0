//! Penline Layout: from text and coordinates to plotter-ready geometry
//!
//! Every engine here is a pure function of its inputs. Nothing is cached
//! between calls and nothing touches the filesystem; fonts arrive through an
//! [`OutlineProvider`](penline_core::traits::OutlineProvider) and map data as
//! already-decoded coordinates.
//!
//! | Module | Does |
//! |---|---|
//! | [`glyph`] | contour lists to one region, counters cut out |
//! | [`hatch`] | diagonal hatching clipped to a region |
//! | [`text`] | multi-line blocks at one shared scale |
//! | [`pill`] | fixed and content-sized badges |
//! | [`map`] | projection plus full or windowed fitting |
//! | [`description`] | route descriptions to display lines |
//!
//! Bad parameters (zero spacing, negative sizes) are rejected up front with
//! [`PenlineError::InvalidParameter`](penline_core::PenlineError). Odd data
//! (unknown glyphs, empty polylines) quietly yields empty geometry.

pub mod description;
pub mod fit;
pub mod glyph;
pub mod hatch;
pub mod map;
pub mod pill;
pub mod text;

pub use description::split_description;
pub use glyph::{resolve_contours, resolve_text};
pub use hatch::{hatch, HatchParams};
pub use map::{
    decode_polyline, full_fit, project, windowed_fit, GeoCoord, MapStyle, MapTrace, TracePiece,
    Window,
};
pub use pill::{fixed_size_pill, variable_width_pill, FixedPillParams, Pill, VariablePillParams};
pub use text::{layout_lines, TextBlock, TextParams};
