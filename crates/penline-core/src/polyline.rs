//! Open stroked paths and their parallel offsets

use geo::{BoundingRect, Coord, LineString, Scale, Translate};

use crate::types::{Bounds, Position, Transform};

/// Interior joins sharper than this fall back to a bevel
const MITER_LIMIT: f64 = 4.0;

/// An ordered run of points drawn as one stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    line: LineString<f64>,
}

impl Default for Polyline {
    fn default() -> Self {
        Self {
            line: LineString::new(Vec::new()),
        }
    }
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Position>) -> Self {
        Self {
            line: points.into_iter().map(Coord::from).collect(),
        }
    }

    pub fn from_line_string(line: LineString<f64>) -> Self {
        Self { line }
    }

    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.line
    }

    pub fn into_line_string(self) -> LineString<f64> {
        self.line
    }

    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.line.coords().map(|c| Position::from(*c))
    }

    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    /// Parallel curve at a signed perpendicular distance.
    ///
    /// Positive distances move to the left of the direction of travel
    /// (screen coordinates). Returns `None` for geometry that has no
    /// direction to offset from: fewer than two distinct points.
    pub fn offset(&self, distance: f64) -> Option<Polyline> {
        let mut points: Vec<Coord<f64>> = Vec::with_capacity(self.line.0.len());
        for c in self.line.coords() {
            if points.last() != Some(c) {
                points.push(*c);
            }
        }
        if points.len() < 2 || !distance.is_finite() {
            return None;
        }

        let normals: Vec<Coord<f64>> = points
            .windows(2)
            .map(|w| left_normal(w[0], w[1]))
            .collect();

        let mut out = Vec::with_capacity(points.len() + 4);
        out.push(points[0] + normals[0] * distance);

        for i in 1..points.len() - 1 {
            let (n1, n2) = (normals[i - 1], normals[i]);
            let sum = n1 + n2;
            let sum_len = sum.x.hypot(sum.y);
            let cos_half = if sum_len > f64::EPSILON {
                (sum.x * n1.x + sum.y * n1.y) / sum_len
            } else {
                0.0
            };

            if cos_half > 1.0 / MITER_LIMIT {
                let miter = sum * (distance / (sum_len * cos_half));
                out.push(points[i] + miter);
            } else {
                out.push(points[i] + n1 * distance);
                out.push(points[i] + n2 * distance);
            }
        }

        let last = points.len() - 1;
        out.push(points[last] + normals[last - 1] * distance);

        Some(Polyline {
            line: LineString::from(out),
        })
    }
}

fn left_normal(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    let d = b - a;
    let len = d.x.hypot(d.y);
    Coord {
        x: d.y / len,
        y: -d.x / len,
    }
}

impl Transform for Polyline {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.line.translate_mut(dx, dy);
    }

    fn scale(&mut self, factor: f64, origin: Position) {
        self.line
            .scale_around_point_mut(factor, factor, Coord::from(origin));
    }

    fn bounds(&self) -> Bounds {
        self.line
            .bounding_rect()
            .map(Bounds::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Position::new(x, y)))
    }

    #[test]
    fn test_straight_offset_is_parallel() {
        let base = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let left = base.offset(2.0).unwrap();
        let right = base.offset(-2.0).unwrap();
        let l: Vec<_> = left.points().collect();
        let r: Vec<_> = right.points().collect();
        assert!((l[0].y + 2.0).abs() < EPS && (l[1].y + 2.0).abs() < EPS);
        assert!((r[0].y - 2.0).abs() < EPS && (r[1].y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_right_angle_uses_miter() {
        let base = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let out = base.offset(-1.0).unwrap();
        let pts: Vec<_> = out.points().collect();
        assert_eq!(pts.len(), 3);
        assert!((pts[1].x - 9.0).abs() < EPS);
        assert!((pts[1].y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_reversal_bevels() {
        let base = line(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]);
        let out = base.offset(1.0).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_degenerate_lines_cannot_offset() {
        assert!(Polyline::default().offset(1.0).is_none());
        assert!(line(&[(3.0, 3.0)]).offset(1.0).is_none());
        assert!(line(&[(3.0, 3.0), (3.0, 3.0)]).offset(1.0).is_none());
    }

    #[test]
    fn test_default_is_empty_with_zero_bounds() {
        let empty = Polyline::default();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.bounds(), Bounds::default());
    }

    #[test]
    fn test_bounds_cover_every_point() {
        let base = line(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]);
        assert_eq!(base.bounds(), Bounds::new(0.0, 0.0, 3.0, 10.0));
    }
}
