//! Bus route poster: route pill, description, full-route map

use penline_core::{Bounds, Color, Part, Position, Region, Result, Scene};
use penline_layout::{
    fixed_size_pill, full_fit, layout_lines, split_description, FixedPillParams, GeoCoord,
    MapStyle, TextParams,
};

use super::format::{
    Format, DESCRIPTION_LINE_HEIGHT_FACTOR, DESCRIPTION_LINE_SPACING_FACTOR,
    MAP_INNER_MARGIN_FACTOR, PILL_HEIGHT_RATIO, PILL_TEXT_HEIGHT_FACTOR,
};
use super::{decode_or_skip, page_scene, BusRouteData, PosterFonts};

/// Renders the bus route poster.
///
/// The pill sits top-left with the description to its right; the map fills
/// the rest of the page below whichever of the two is taller.
pub fn bus_route(format: Format, data: &BusRouteData, fonts: PosterFonts<'_>) -> Result<Scene> {
    data.validate()?;
    let layout = format.bus_route();
    let page = layout.page;

    let pill_x = page.binding_width + layout.left_right_margin;
    let pill_y = layout.top_bottom_margin;
    let pill_height = layout.pill_width * PILL_HEIGHT_RATIO;

    let pill = fixed_size_pill(
        fonts.bold,
        Position::new(pill_x, pill_y),
        &data.route,
        &FixedPillParams {
            width: layout.pill_width,
            height: pill_height,
            max_text_height: pill_height * PILL_TEXT_HEIGHT_FACTOR,
            max_text_width: None,
            fill: layout.pill_fill,
            hatch_spacing: layout.hatch_spacing,
        },
        Color::black(),
    )?;

    let description_x = pill_x + layout.pill_width + layout.description_margin;
    let description_max_width = page.usable_width()
        - (layout.pill_width + 2.0 * layout.left_right_margin + layout.description_margin);
    let lines = split_description(&data.description);
    let description = layout_lines(
        fonts.regular,
        Position::new(description_x, pill_y),
        &lines,
        &TextParams {
            line_height: pill_height * DESCRIPTION_LINE_HEIGHT_FACTOR,
            spacing_factor: DESCRIPTION_LINE_SPACING_FACTOR,
            max_width: description_max_width,
            fill: true,
            hatch_spacing: layout.hatch_spacing,
        },
    )?;

    let header_height = pill_height.max(description.height);
    let map_x = pill_x;
    let map_y = layout.top_bottom_margin + header_height + layout.map_top_margin;
    let map_width = page.usable_width() - 2.0 * layout.left_right_margin;
    let map_height =
        page.height - (2.0 * layout.top_bottom_margin + header_height + layout.map_top_margin);
    let inner = map_width.min(map_height) * MAP_INNER_MARGIN_FACTOR;

    let traces: Vec<Vec<GeoCoord>> = data
        .encoded_polylines
        .iter()
        .filter_map(|encoded| decode_or_skip(encoded))
        .collect();
    let map = full_fit(
        &traces,
        Bounds::new(
            map_x + inner,
            map_y + inner,
            map_width - 2.0 * inner,
            map_height - 2.0 * inner,
        ),
        &MapStyle::new(Color::black(), layout.map_offset),
    )?;

    log::debug!(
        "Bus route {:?} on {}: {} description lines, map {:.1}x{:.1} with {} pieces",
        data.route,
        format,
        lines.len(),
        map_width,
        map_height,
        map.len()
    );

    let mut scene = page_scene(page);
    scene.extend(pill.into_drawables());
    scene.extend(description.into_drawables(Color::black()));
    scene.extend(map.into_drawables());
    if layout.map_outline {
        let border = Region::rectangle(Bounds::new(map_x, map_y, map_width, map_height));
        scene.push(Part::Outline(border), Color::black());
    }
    Ok(scene)
}
