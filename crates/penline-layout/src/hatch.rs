// this_file: crates/penline-layout/src/hatch.rs

//! Diagonal hatch fills clipped to arbitrary regions

use geo::{LineString, MultiLineString};
use penline_core::error::{ensure_positive, Result};
use penline_core::params::DEFAULT_HATCH_SPACING;
use penline_core::{Bounds, HatchSet, Position, Region, Segment};

/// Pieces shorter than this are clipping noise, not strokes
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// How densely and in which directions to hatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatchParams {
    /// Distance between neighbouring sweep lines, measured along x
    pub spacing: f64,
    /// Add a second sweep along the opposite diagonal
    pub cross: bool,
}

impl Default for HatchParams {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_HATCH_SPACING,
            cross: false,
        }
    }
}

impl HatchParams {
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            cross: false,
        }
    }

    pub fn crosshatched(mut self, cross: bool) -> Self {
        self.cross = cross;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagonal {
    /// Top-left to bottom-right (y grows downward)
    Falling,
    /// Bottom-left to top-right
    Rising,
}

/// Hatches `fill` with 45° lines swept across `sweep`.
///
/// The sweep box only decides where lines are generated; every segment is
/// clipped to `fill`. Segments come back in sweep order (falling diagonal
/// first, then rising when crosshatching), which makes output reproducible.
pub fn hatch(fill: &Region, sweep: Bounds, params: &HatchParams) -> Result<HatchSet> {
    let spacing = ensure_positive("hatch spacing", params.spacing)?;

    if fill.is_empty() || sweep.is_empty() {
        return Ok(HatchSet::default());
    }

    let count = ((sweep.width + sweep.height) / spacing).ceil() as usize;
    let mut set = sweep_diagonal(fill, sweep, spacing, count, Diagonal::Falling);
    if params.cross {
        set = set.concat(sweep_diagonal(fill, sweep, spacing, count, Diagonal::Rising));
    }

    log::debug!(
        "Hatched {:.1}x{:.1} box with {} sweeps -> {} segments",
        sweep.width,
        sweep.height,
        count * if params.cross { 2 } else { 1 },
        set.len()
    );

    Ok(set)
}

fn sweep_diagonal(
    fill: &Region,
    sweep: Bounds,
    spacing: f64,
    count: usize,
    diagonal: Diagonal,
) -> HatchSet {
    let mut segments = Vec::new();

    for i in 0..count {
        let line = sweep_line(sweep, i as f64 * spacing, diagonal);
        let clipped = fill.clip_lines(&MultiLineString::new(vec![line]));

        for piece in clipped.0 {
            let (Some(first), Some(last)) = (piece.0.first(), piece.0.last()) else {
                continue;
            };
            let segment = Segment::new(Position::from(*first), Position::from(*last));
            if segment.length() > MIN_SEGMENT_LENGTH {
                segments.push(segment);
            }
        }
    }

    HatchSet::new(segments)
}

/// One sweep line at `offset` along x, overshooting the box on both ends
/// so that clipping alone decides where the stroke starts and stops.
fn sweep_line(sweep: Bounds, offset: f64, diagonal: Diagonal) -> LineString<f64> {
    let h = sweep.height;
    let overshoot = h.max(sweep.width).max(1.0);
    let base_x = sweep.x + offset;
    let (top, bottom) = (sweep.y, sweep.bottom());

    // Both diagonals run at 45°: the line crosses the top edge and the bottom
    // edge h apart in x.
    match diagonal {
        Diagonal::Falling => LineString::from(vec![
            (base_x - h - overshoot, top - overshoot),
            (base_x + overshoot, bottom + overshoot),
        ]),
        Diagonal::Rising => LineString::from(vec![
            (base_x - h - overshoot, bottom + overshoot),
            (base_x + overshoot, top - overshoot),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::Transform;

    fn square() -> Region {
        Region::rectangle(Bounds::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn test_rejects_bad_spacing() {
        let region = square();
        assert!(hatch(&region, region.bounds(), &HatchParams::new(0.0)).is_err());
        assert!(hatch(&region, region.bounds(), &HatchParams::new(-1.5)).is_err());
    }

    #[test]
    fn test_empty_region_yields_no_segments() {
        let set = hatch(
            &Region::empty(),
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            &HatchParams::default(),
        )
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_segments_are_45_degrees() {
        let region = square();
        let set = hatch(&region, region.bounds(), &HatchParams::new(1.0)).unwrap();
        assert!(!set.is_empty());
        for s in set.segments() {
            let dx = s.to.x - s.from.x;
            let dy = s.to.y - s.from.y;
            assert!((dx.abs() - dy.abs()).abs() < 1e-6);
            assert!(dx * dy > 0.0, "falling diagonal must move down-right");
        }
    }

    #[test]
    fn test_crosshatch_doubles_the_sweep() {
        let region = square();
        let single = hatch(&region, region.bounds(), &HatchParams::new(1.0)).unwrap();
        let cross = hatch(
            &region,
            region.bounds(),
            &HatchParams::new(1.0).crosshatched(true),
        )
        .unwrap();
        assert_eq!(cross.len(), single.len() * 2);
        assert_eq!(&cross.segments()[..single.len()], single.segments());
        let last = cross.segments()[cross.len() - 1];
        assert!((last.to.x - last.from.x) * (last.to.y - last.from.y) < 0.0);
    }

    #[test]
    fn test_output_is_reproducible() {
        let region = square().subtract(Region::rectangle(Bounds::new(3.0, 3.0, 4.0, 4.0)));
        let a = hatch(&region, region.bounds(), &HatchParams::new(0.7)).unwrap();
        let b = hatch(&region, region.bounds(), &HatchParams::new(0.7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hole_splits_segments() {
        let region = square().subtract(Region::rectangle(Bounds::new(3.0, 3.0, 4.0, 4.0)));
        let set = hatch(&region, region.bounds(), &HatchParams::new(1.0)).unwrap();
        for s in set.segments() {
            assert!(!Region::rectangle(Bounds::new(3.1, 3.1, 3.8, 3.8)).contains(s.midpoint()));
        }
    }
}
