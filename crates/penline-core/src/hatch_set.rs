//! Hatch line collections

use crate::types::{Bounds, Position, Transform};

/// A single straight hatch stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
}

impl Segment {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }

    pub fn midpoint(&self) -> Position {
        Position::new(
            (self.from.x + self.to.x) / 2.0,
            (self.from.y + self.to.y) / 2.0,
        )
    }
}

/// Ordered hatch segments, in sweep order.
///
/// Built once by the hatch filler and only moved as a whole afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HatchSet {
    segments: Vec<Segment>,
}

impl HatchSet {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends another sweep after this one
    pub fn concat(mut self, other: HatchSet) -> HatchSet {
        self.segments.extend(other.segments);
        self
    }
}

impl Transform for HatchSet {
    fn translate(&mut self, dx: f64, dy: f64) {
        for s in &mut self.segments {
            s.from.x += dx;
            s.from.y += dy;
            s.to.x += dx;
            s.to.y += dy;
        }
    }

    fn scale(&mut self, factor: f64, origin: Position) {
        let apply = |p: &mut Position| {
            p.x = origin.x + (p.x - origin.x) * factor;
            p.y = origin.y + (p.y - origin.y) * factor;
        };
        for s in &mut self.segments {
            apply(&mut s.from);
            apply(&mut s.to);
        }
    }

    fn bounds(&self) -> Bounds {
        let mut iter = self.segments.iter().flat_map(|s| [s.from, s.to]);
        let Some(first) = iter.next() else {
            return Bounds::default();
        };
        let (mut min, mut max) = (first, first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Bounds::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_all_segments() {
        let set = HatchSet::new(vec![
            Segment::new(Position::new(0.0, 0.0), Position::new(2.0, 2.0)),
            Segment::new(Position::new(5.0, 1.0), Position::new(6.0, -1.0)),
        ]);
        assert_eq!(set.bounds(), Bounds::new(0.0, -1.0, 6.0, 3.0));
    }

    #[test]
    fn test_translate_and_scale() {
        let mut set = HatchSet::new(vec![Segment::new(
            Position::new(1.0, 1.0),
            Position::new(2.0, 2.0),
        )]);
        set.translate(1.0, 1.0);
        set.scale(2.0, Position::new(2.0, 2.0));
        assert_eq!(set.segments()[0].to, Position::new(4.0, 4.0));
        assert_eq!(set.segments()[0].from, Position::new(2.0, 2.0));
    }

    #[test]
    fn test_concat_keeps_order() {
        let a = HatchSet::new(vec![Segment::new(Position::new(0.0, 0.0), Position::new(1.0, 1.0))]);
        let b = HatchSet::new(vec![Segment::new(Position::new(9.0, 9.0), Position::new(8.0, 8.0))]);
        let joined = a.concat(b);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.segments()[1].from, Position::new(9.0, 9.0));
    }
}
