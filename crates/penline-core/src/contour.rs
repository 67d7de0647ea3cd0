//! Closed subpaths as emitted by font outlines

use geo::Coord;
use kurbo::{BezPath, PathEl, Point};

use crate::error::{PenlineError, Result};
use crate::types::Position;

/// Curve flattening tolerance, in the units of the contour
pub const FLATTEN_TOLERANCE: f64 = 0.1;

/// One closed subpath with its curve control data.
///
/// Contours keep the order they were emitted in; hole resolution depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    path: BezPath,
}

impl Contour {
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// On-curve points in drawing order.
    ///
    /// A final point that lands back on the start is the closing edge, not a
    /// new anchor.
    pub fn anchors(&self) -> Vec<Position> {
        let mut anchors: Vec<Position> = self
            .path
            .elements()
            .iter()
            .filter_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p.into()),
                PathEl::QuadTo(_, p) => Some(p.into()),
                PathEl::CurveTo(_, _, p) => Some(p.into()),
                PathEl::ClosePath => None,
            })
            .collect();

        if anchors.len() > 1 && anchors.first() == anchors.last() {
            anchors.pop();
        }
        anchors
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors().len()
    }

    /// Flattened boundary ring, unclosed
    pub fn ring(&self, tolerance: f64) -> Vec<Coord<f64>> {
        let mut ring: Vec<Coord<f64>> = Vec::new();
        kurbo::flatten(self.path.iter(), tolerance, |el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => push_distinct(&mut ring, p),
            _ => {}
        });
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        ring
    }

    /// Breaks a multi-subpath path at every move and close marker.
    pub fn split_path(path: &BezPath) -> Vec<Contour> {
        let mut contours = Vec::new();
        let mut current = BezPath::new();

        for el in path.elements() {
            match el {
                PathEl::MoveTo(_) => {
                    if !current.elements().is_empty() {
                        contours.push(Contour::new(std::mem::take(&mut current)));
                    }
                    current.push(*el);
                }
                PathEl::ClosePath => {
                    current.push(*el);
                    contours.push(Contour::new(std::mem::take(&mut current)));
                }
                _ => current.push(*el),
            }
        }
        if !current.elements().is_empty() {
            contours.push(Contour::new(current));
        }

        contours
    }

    /// Parses SVG path data into contours, one per closed subpath
    pub fn split_path_data(data: &str) -> Result<Vec<Contour>> {
        let path =
            BezPath::from_svg(data).map_err(|e| PenlineError::InvalidPathData(e.to_string()))?;
        Ok(Self::split_path(&path))
    }
}

fn push_distinct(ring: &mut Vec<Coord<f64>>, p: Point) {
    let c = Coord { x: p.x, y: p.y };
    if ring.last() != Some(&c) {
        ring.push(c);
    }
}
