// this_file: crates/penline-fontdb/src/pen.rs

//! Collects skrifa outline callbacks into contours.

use kurbo::{BezPath, Point};
use penline_core::Contour;
use skrifa::outline::OutlinePen;

/// Records one glyph at a horizontal pen position, flipping y so the
/// outline reads top-down. Every closed subpath becomes its own contour,
/// in the order the font emits them.
#[derive(Debug, Default)]
pub(crate) struct ContourPen {
    origin_x: f64,
    path: BezPath,
    contours: Vec<Contour>,
}

impl ContourPen {
    pub(crate) fn new(origin_x: f64) -> Self {
        Self {
            origin_x,
            ..Self::default()
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Contour> {
        self.flush();
        self.contours
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin_x + f64::from(x), -f64::from(y))
    }

    fn flush(&mut self) {
        if !self.path.is_empty() {
            self.contours.push(Contour::new(std::mem::take(&mut self.path)));
        }
    }
}

impl OutlinePen for ContourPen {
    fn move_to(&mut self, x: f32, y: f32) {
        // An unclosed subpath still counts as a contour
        self.flush();
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.point(cx0, cy0), self.point(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.point(cx0, cy0), self.point(cx1, cy1), self.point(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::Position;

    #[test]
    fn test_pen_splits_on_close_and_flips_y() {
        let mut pen = ContourPen::new(100.0);
        pen.move_to(0.0, 0.0);
        pen.line_to(10.0, 0.0);
        pen.line_to(10.0, 20.0);
        pen.close();
        pen.move_to(2.0, 2.0);
        pen.quad_to(4.0, 8.0, 6.0, 2.0);
        pen.close();

        let contours = pen.finish();
        assert_eq!(contours.len(), 2);
        let anchors = contours[0].anchors();
        assert_eq!(anchors[0], Position::new(100.0, 0.0));
        assert_eq!(anchors[2], Position::new(110.0, -20.0));
    }

    #[test]
    fn test_unclosed_subpath_is_kept() {
        let mut pen = ContourPen::new(0.0);
        pen.move_to(0.0, 0.0);
        pen.curve_to(1.0, 1.0, 2.0, 1.0, 3.0, 0.0);
        pen.move_to(5.0, 0.0);
        pen.line_to(6.0, 0.0);
        assert_eq!(pen.finish().len(), 2);
    }

    #[test]
    fn test_empty_glyph_has_no_contours() {
        assert!(ContourPen::new(0.0).finish().is_empty());
    }
}
