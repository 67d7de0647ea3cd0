// this_file: crates/penline-core/src/region.rs

//! Closed areas with boolean algebra
//!
//! A [`Region`] is a `geo::MultiPolygon`, so holes and disjoint islands are
//! both first-class. Boolean operations take their operands by value and hand
//! back a fresh region; the operands are gone afterwards.

use geo::orient::{Direction, Orient};
use geo::{
    Area, BooleanOps, BoundingRect, Contains, Coord, LineString, MultiLineString, MultiPolygon,
    Point, Polygon, Scale, Translate,
};
use kurbo::{PathEl, RoundedRect, Shape};

use crate::contour::{Contour, FLATTEN_TOLERANCE};
use crate::types::{Bounds, Position, Transform};

/// Tolerance for flattening pill corners, in drawing units
const CORNER_TOLERANCE: f64 = 0.05;

/// Ring points closer than this are the same point
const RING_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shape: MultiPolygon<f64>,
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

impl Region {
    pub fn empty() -> Self {
        Self {
            shape: MultiPolygon::new(Vec::new()),
        }
    }

    /// The area enclosed by a single contour, regardless of its winding.
    ///
    /// Contours that flatten to fewer than three points enclose nothing.
    pub fn from_contour(contour: &Contour) -> Self {
        Self::from_ring(contour.ring(FLATTEN_TOLERANCE))
    }

    pub fn rectangle(bounds: Bounds) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::empty();
        }
        Self {
            shape: MultiPolygon::new(vec![bounds.to_rect().to_polygon()]),
        }
    }

    /// Rectangle with circular corners; the radius is clamped to half the
    /// shorter side.
    pub fn rounded_rectangle(bounds: Bounds, radius: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::empty();
        }
        let radius = radius.clamp(0.0, bounds.width.min(bounds.height) / 2.0);
        let shape = RoundedRect::new(bounds.x, bounds.y, bounds.right(), bounds.bottom(), radius);

        let mut ring = Vec::new();
        kurbo::flatten(shape.path_elements(CORNER_TOLERANCE), CORNER_TOLERANCE, |el| {
            if let PathEl::MoveTo(p) | PathEl::LineTo(p) = el {
                ring.push(Coord { x: p.x, y: p.y });
            }
        });
        Self::from_ring(ring)
    }

    /// Near-coincident points are merged; a flattened arc can end a rounding
    /// error away from where the ring started.
    fn from_ring(mut ring: Vec<Coord<f64>>) -> Self {
        ring.dedup_by(|a, b| same_point(*a, *b));
        while ring.len() > 1 && same_point(ring[0], ring[ring.len() - 1]) {
            ring.pop();
        }
        if ring.len() < 3 {
            return Self::empty();
        }
        let polygon = Polygon::new(LineString::from(ring), Vec::new()).orient(Direction::Default);
        Self {
            shape: MultiPolygon::new(vec![polygon]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0.is_empty()
    }

    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    pub fn union(self, other: Region) -> Region {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Region {
            shape: self.shape.union(&other.shape),
        }
    }

    pub fn subtract(self, other: Region) -> Region {
        if self.is_empty() || other.is_empty() {
            return self;
        }
        Region {
            shape: self.shape.difference(&other.shape),
        }
    }

    pub fn intersect(self, other: Region) -> Region {
        if self.is_empty() || other.is_empty() {
            return Region::empty();
        }
        Region {
            shape: self.shape.intersection(&other.shape),
        }
    }

    /// Strictly-inside test; points on the boundary are outside.
    pub fn contains(&self, point: Position) -> bool {
        !self.is_empty() && self.shape.contains(&Point::new(point.x, point.y))
    }

    pub fn area(&self) -> f64 {
        self.shape.unsigned_area()
    }

    /// The parts of `lines` that fall inside this region
    pub fn clip_lines(&self, lines: &MultiLineString<f64>) -> MultiLineString<f64> {
        if self.is_empty() || lines.0.is_empty() {
            return MultiLineString::new(Vec::new());
        }
        self.shape.clip(lines, false)
    }
}

fn same_point(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.x - b.x).abs() <= RING_EPSILON && (a.y - b.y).abs() <= RING_EPSILON
}

impl Transform for Region {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.shape.translate_mut(dx, dy);
    }

    fn scale(&mut self, factor: f64, origin: Position) {
        self.shape
            .scale_around_point_mut(factor, factor, Coord::from(origin));
    }

    fn bounds(&self) -> Bounds {
        self.shape
            .bounding_rect()
            .map(Bounds::from)
            .unwrap_or_default()
    }
}
