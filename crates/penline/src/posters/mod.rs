// this_file: crates/penline/src/posters/mod.rs

//! Poster templates
//!
//! Each template turns a small data record into a [`Scene`] for one
//! [`Format`]. Templates only do layout arithmetic; all geometry comes from
//! `penline-layout`.
//!
//! Encoded polylines that fail to decode are logged and left off the map.

mod bus_poster;
mod bus_route;
mod data;
mod format;
mod station;
mod subway_route;

pub use bus_poster::{bus_poster, grid_size};
pub use bus_route::bus_route;
pub use data::{
    BusPosterData, BusRouteData, MapData, MapPolyline, RoutePill, StationData, SubwayRouteData,
};
pub use format::{
    BusPosterLayout, BusRouteLayout, Format, Page, StationLayout, SubwayRouteLayout,
};
pub use station::station;
pub use subway_route::subway_route;

pub mod constants {
    pub use super::format::{
        BRANCH_PILL_TEXT_HEIGHT_FACTOR, DESCRIPTION_LINE_HEIGHT_FACTOR,
        DESCRIPTION_LINE_SPACING_FACTOR, MAP_INNER_MARGIN_FACTOR, PILL_HEIGHT_RATIO,
        PILL_TEXT_HEIGHT_FACTOR, STATION_MAP_HEIGHT_RATIO, STATION_MAP_WIDTH_LONG,
        STOP_NAME_SPACING_FACTOR,
    };
}

use penline_core::traits::OutlineProvider;
use penline_core::{Bounds, Color, Drawable, Part, Polyline, Position, Region, Scene, Transform};
use penline_layout::{decode_polyline, GeoCoord, Pill};

/// Stroke width of the page outline
const PAGE_OUTLINE_WIDTH: f64 = 2.0;

/// The two weights a poster draws with
#[derive(Clone, Copy)]
pub struct PosterFonts<'a> {
    pub regular: &'a dyn OutlineProvider,
    /// Pill labels
    pub bold: &'a dyn OutlineProvider,
}

impl<'a> PosterFonts<'a> {
    pub fn new(regular: &'a dyn OutlineProvider, bold: &'a dyn OutlineProvider) -> Self {
        Self { regular, bold }
    }
}

/// Blank scene with the page edge and binding line in blue.
///
/// The blue layer marks the paper for alignment and is not meant to be
/// plotted.
pub fn page_scene(page: Page) -> Scene {
    let mut scene = Scene::new(page.width, page.height);
    let edge = Region::rectangle(Bounds::new(0.0, 0.0, page.width, page.height));
    scene.extend([Drawable::new(Part::Outline(edge), Color::blue())
        .with_stroke_width(PAGE_OUTLINE_WIDTH)]);

    if page.binding_width > 0.0 {
        let binding = Polyline::new([
            Position::new(page.binding_width, 0.0),
            Position::new(page.binding_width, page.height),
        ]);
        scene.extend([Drawable::new(Part::Stroke(binding), Color::blue())
            .with_stroke_width(PAGE_OUTLINE_WIDTH)]);
    }
    scene
}

/// Lays pills out in rows, left to right from `origin`.
///
/// A pill moves to a new row when it would reach `max_width`, unless it is
/// first in its row. Rows are `row_height + gap` apart. Returns the height of
/// the flowed block.
pub fn flow_pills(pills: &mut [Pill], origin: Position, max_width: f64, row_height: f64, gap: f64) -> f64 {
    let (mut x, mut y) = (0.0, 0.0);
    for pill in pills.iter_mut() {
        let bounds = pill.bounds();
        if x > 0.0 && x + bounds.width >= max_width {
            x = 0.0;
            y += row_height + gap;
        }
        pill.translate(origin.x + x - bounds.x, origin.y + y - bounds.y);
        x += bounds.width + gap;
    }
    y + row_height
}

/// Decodes one encoded polyline, logging and skipping bad input
pub(crate) fn decode_or_skip(encoded: &str) -> Option<Vec<GeoCoord>> {
    match decode_polyline(encoded) {
        Ok(coords) => Some(coords),
        Err(err) => {
            log::warn!("Skipping polyline: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::HatchSet;

    fn pill(width: f64) -> Pill {
        Pill {
            outline: Region::rectangle(Bounds::new(0.0, 0.0, width, 10.0)),
            text: Region::empty(),
            hatch: HatchSet::default(),
            color: Color::black(),
        }
    }

    #[test]
    fn test_flow_keeps_pills_on_one_row_when_they_fit() {
        let mut pills = vec![pill(20.0), pill(20.0), pill(20.0)];
        let height = flow_pills(&mut pills, Position::new(100.0, 50.0), 100.0, 10.0, 5.0);
        assert_eq!(height, 10.0);
        let xs: Vec<f64> = pills.iter().map(|p| p.bounds().x).collect();
        assert_eq!(xs, vec![100.0, 125.0, 150.0]);
        assert!(pills.iter().all(|p| p.bounds().y == 50.0));
    }

    #[test]
    fn test_flow_wraps_to_a_new_row() {
        let mut pills = vec![pill(40.0), pill(40.0), pill(40.0)];
        let height = flow_pills(&mut pills, Position::new(0.0, 0.0), 100.0, 10.0, 5.0);
        assert_eq!(height, 25.0);
        assert_eq!(pills[2].bounds().origin(), Position::new(0.0, 15.0));
    }

    #[test]
    fn test_flow_never_leaves_an_empty_row() {
        let mut pills = vec![pill(150.0)];
        let height = flow_pills(&mut pills, Position::new(0.0, 0.0), 100.0, 10.0, 5.0);
        assert_eq!(height, 10.0);
        assert_eq!(pills[0].bounds().y, 0.0);
    }

    #[test]
    fn test_page_scene_draws_binding_only_when_present() {
        assert_eq!(page_scene(Format::Notebook.page()).drawables.len(), 2);
        let print = page_scene(Format::Print.page());
        assert_eq!(print.drawables.len(), 1);
        assert_eq!(print.drawables[0].stroke_width, 2.0);
        assert_eq!(print.colors(), vec![Color::blue()]);
    }

    #[test]
    fn test_bad_polyline_is_skipped() {
        assert!(decode_or_skip("!!").is_none());
        assert!(decode_or_skip("_p~iF~ps|U").is_some());
    }
}
