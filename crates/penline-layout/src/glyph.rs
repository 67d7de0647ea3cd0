//! Glyph contours to a single region with counters cut out

use penline_core::{traits::OutlineProvider, Contour, Region};

/// Folds contours, in font order, into one region.
///
/// Each contour is either a counter (subtracted) or a new island (united).
/// A contour is a counter when every one of its anchors lies inside what
/// has been accumulated so far. Contours with exactly four anchors are
/// always united: the crossbar triangle of glyphs like "A" sits entirely
/// inside the accumulated outline yet must not be cut out.
pub fn resolve_contours(contours: &[Contour]) -> Region {
    let mut accumulated = Region::empty();

    for contour in contours {
        let candidate = Region::from_contour(contour);
        if candidate.is_empty() {
            continue;
        }

        accumulated = if is_counter(contour, &accumulated) {
            accumulated.subtract(candidate)
        } else {
            accumulated.union(candidate)
        };
    }

    accumulated
}

/// Outline `text` through `provider` and resolve it.
///
/// Unknown or control-only text resolves to an empty region.
pub fn resolve_text(provider: &dyn OutlineProvider, text: &str) -> Region {
    let contours = provider.outline(text);
    log::trace!("Resolving {} contours for {:?}", contours.len(), text);
    resolve_contours(&contours)
}

fn is_counter(contour: &Contour, accumulated: &Region) -> bool {
    let anchors = contour.anchors();
    if anchors.len() == 4 || anchors.is_empty() {
        return false;
    }
    anchors.iter().all(|p| accumulated.contains(*p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::{Position, Transform};

    fn contours(data: &str) -> Vec<Contour> {
        Contour::split_path_data(data).unwrap()
    }

    // Outer box with eight anchors, so the four-anchor rule never applies
    const OUTER: &str = "M0,0 L5,0 L10,0 L10,5 L10,10 L5,10 L0,10 L0,5 Z";
    // Five-anchor counter
    const COUNTER: &str = "M3,3 L5,3 L7,3 L7,7 L3,7 Z";

    #[test]
    fn test_empty_input_is_empty_region() {
        assert!(resolve_contours(&[]).is_empty());
    }

    #[test]
    fn test_enclosed_contour_becomes_hole() {
        let region = resolve_contours(&contours(&format!("{OUTER} {COUNTER}")));
        assert!((region.area() - 84.0).abs() < 1e-4);
        assert!(!region.contains(Position::new(5.0, 5.0)));
        assert!(region.contains(Position::new(1.0, 1.0)));
    }

    #[test]
    fn test_four_anchor_contour_is_never_a_hole() {
        let data = format!("{OUTER} M3,3 L7,3 L7,7 L3,7 Z");
        let region = resolve_contours(&contours(&data));
        assert!((region.area() - 100.0).abs() < 1e-4);
        assert!(region.contains(Position::new(5.0, 5.0)));
    }

    #[test]
    fn test_counter_before_outline_is_united() {
        // Order matters: the counter arrives first, so nothing contains it yet
        let region = resolve_contours(&contours(&format!("{COUNTER} {OUTER}")));
        assert!((region.area() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_separate_islands_are_united() {
        let data = format!("{OUTER} M20,0 L25,0 L30,0 L30,10 L20,10 Z");
        let region = resolve_contours(&contours(&data));
        assert!((region.area() - 200.0).abs() < 1e-4);
        assert!((region.bounds().width - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_island_inside_counter_is_united() {
        // Like the dot of a bullseye: outline, counter, then a blob in the counter
        let data = format!("{OUTER} {COUNTER} M4,4 L5,4 L6,4 L6,6 L4,6 Z");
        let region = resolve_contours(&contours(&data));
        assert!(region.contains(Position::new(5.0, 5.0)));
        assert!(!region.contains(Position::new(3.5, 3.5)));
    }
}
