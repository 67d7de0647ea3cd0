//! Penline Core: the shapes every layout engine speaks
//!
//! Penline draws data-driven posters as pure line art for pen plotters:
//! strokes only, with shaded areas approximated by clipped hatch lines.
//! This crate holds the vocabulary the rest of the workspace shares.
//!
//! ## What lives here
//!
//! - [`Region`] - closed planar areas with boolean algebra (glyphs, pills)
//! - [`Contour`] - one closed subpath, the raw material of a glyph
//! - [`Polyline`] - open stroked paths (map traces) with parallel offsets
//! - [`HatchSet`] - the segments that stand in for a solid fill
//! - [`Scene`] / [`Drawable`] - colored parts ready for a serializer
//! - [`traits::OutlineProvider`] - where glyph contours come from
//!
//! Every value is created per render call and never shared between calls.
//! Boolean operations consume their operands, so a superseded region cannot
//! be reached again after it has been combined.
//!
//! ```
//! use penline_core::{Bounds, Region, Transform};
//!
//! let badge = Region::rounded_rectangle(Bounds::new(0.0, 0.0, 72.0, 36.0), 18.0);
//! let hole = Region::rectangle(Bounds::new(30.0, 10.0, 12.0, 16.0));
//! let mut cutout = badge.subtract(hole);
//! cutout.translate(10.0, 10.0);
//! assert!((cutout.bounds().x - 10.0).abs() < 1e-4);
//! ```

pub mod contour;
pub mod error;
pub mod hatch_set;
pub mod params;
pub mod polyline;
pub mod region;
pub mod scene;
pub mod traits;

pub use contour::Contour;
pub use error::{PenlineError, Result};
pub use hatch_set::{HatchSet, Segment};
pub use params::FillStyle;
pub use polyline::Polyline;
pub use region::Region;
pub use scene::{Color, Drawable, Part, Scene};
pub use types::{Bounds, Position, Transform};

/// Plain geometric value types
pub mod types {
    use geo::{Coord, Rect};

    /// A point in the drawing plane (y grows downward)
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Position {
        pub x: f64,
        pub y: f64,
    }

    impl Position {
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }
    }

    impl From<Position> for Coord<f64> {
        fn from(p: Position) -> Self {
            Coord { x: p.x, y: p.y }
        }
    }

    impl From<Coord<f64>> for Position {
        fn from(c: Coord<f64>) -> Self {
            Position::new(c.x, c.y)
        }
    }

    impl From<kurbo::Point> for Position {
        fn from(p: kurbo::Point) -> Self {
            Position::new(p.x, p.y)
        }
    }

    /// Axis-aligned box. The default value is the empty box at the origin.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Bounds {
        pub x: f64,
        pub y: f64,
        pub width: f64,
        pub height: f64,
    }

    impl Bounds {
        pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
            Self {
                x,
                y,
                width,
                height,
            }
        }

        /// A zero-size box contributes nothing to unions
        pub fn is_empty(&self) -> bool {
            self.width <= 0.0 && self.height <= 0.0
        }

        pub fn right(&self) -> f64 {
            self.x + self.width
        }

        pub fn bottom(&self) -> f64 {
            self.y + self.height
        }

        pub fn origin(&self) -> Position {
            Position::new(self.x, self.y)
        }

        pub fn center(&self) -> Position {
            Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
        }

        /// Smallest box covering both; empty boxes are ignored.
        pub fn union(self, other: Bounds) -> Bounds {
            if other.is_empty() {
                return self;
            }
            if self.is_empty() {
                return other;
            }
            let x = self.x.min(other.x);
            let y = self.y.min(other.y);
            Bounds::new(
                x,
                y,
                self.right().max(other.right()) - x,
                self.bottom().max(other.bottom()) - y,
            )
        }

        /// Containment with a tolerance for floating point noise
        pub fn contains_bounds(&self, other: &Bounds, epsilon: f64) -> bool {
            other.x >= self.x - epsilon
                && other.y >= self.y - epsilon
                && other.right() <= self.right() + epsilon
                && other.bottom() <= self.bottom() + epsilon
        }

        pub fn to_rect(self) -> Rect<f64> {
            Rect::new(
                Coord {
                    x: self.x,
                    y: self.y,
                },
                Coord {
                    x: self.right(),
                    y: self.bottom(),
                },
            )
        }
    }

    impl From<Rect<f64>> for Bounds {
        fn from(rect: Rect<f64>) -> Self {
            let min = rect.min();
            Bounds::new(min.x, min.y, rect.width(), rect.height())
        }
    }

    /// Uniform affine moves shared by every drawable geometry.
    ///
    /// Transforms mutate in place; boolean operations never do.
    pub trait Transform {
        fn translate(&mut self, dx: f64, dy: f64);

        /// Scale uniformly about `origin`
        fn scale(&mut self, factor: f64, origin: Position);

        /// Zero-size bounds when there is no geometry
        fn bounds(&self) -> Bounds;
    }
}
