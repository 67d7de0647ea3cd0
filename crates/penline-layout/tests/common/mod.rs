//! Synthetic block-letter font for layout tests
//!
//! Capitals are 10x20, lower case 10x14, digits 8x20, all sitting on y = 0
//! with y growing downward (so glyphs occupy negative y, as font outlines
//! flipped into screen space do). Letters with counters get a five-anchor
//! inner box; "A" gets a four-anchor crossbar that must stay solid.

use kurbo::{BezPath, Point};
use penline_core::traits::OutlineProvider;
use penline_core::Contour;

pub const ADVANCE: f64 = 14.0;

const WITH_COUNTER: &str = "BDOPQR0689abdegopq";
const NARROW: &str = "Iil1|!";

pub struct BlockFont;

impl OutlineProvider for BlockFont {
    fn outline(&self, text: &str) -> Vec<Contour> {
        let mut contours = Vec::new();
        for (i, c) in text.chars().enumerate() {
            let x = i as f64 * ADVANCE;
            if c.is_whitespace() || c.is_control() {
                continue;
            }
            let height = if c.is_ascii_lowercase() { 14.0 } else { 20.0 };
            let width = if NARROW.contains(c) {
                4.0
            } else if c.is_ascii_digit() {
                8.0
            } else {
                10.0
            };

            // Eight anchors keep outer boxes clear of the four-anchor rule
            contours.push(polygon(&[
                (x, -height),
                (x + width / 2.0, -height),
                (x + width, -height),
                (x + width, -height / 2.0),
                (x + width, 0.0),
                (x + width / 2.0, 0.0),
                (x, 0.0),
                (x, -height / 2.0),
            ]));

            if WITH_COUNTER.contains(c) {
                let (l, r) = (x + width * 0.3, x + width * 0.7);
                let (t, b) = (-height * 0.8, -height * 0.2);
                contours.push(polygon(&[(l, t), ((l + r) / 2.0, t), (r, t), (r, b), (l, b)]));
            }
            if c == 'A' {
                contours.push(polygon(&[
                    (x + 3.0, -12.0),
                    (x + 7.0, -12.0),
                    (x + 7.0, -8.0),
                    (x + 3.0, -8.0),
                ]));
            }
        }
        contours
    }
}

fn polygon(points: &[(f64, f64)]) -> Contour {
    let mut path = BezPath::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(Point::new(x, y));
        } else {
            path.line_to(Point::new(x, y));
        }
    }
    path.close_path();
    Contour::new(path)
}
