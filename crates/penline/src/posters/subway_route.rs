//! Subway route poster: a bus route poster in the line's colour

use std::str::FromStr;

use penline_core::{Bounds, Color, FillStyle, Part, Position, Region, Result, Scene};
use penline_layout::{
    fixed_size_pill, full_fit, layout_lines, split_description, FixedPillParams, GeoCoord,
    MapStyle, TextParams,
};

use super::format::{
    Format, BRANCH_PILL_TEXT_HEIGHT_FACTOR, DESCRIPTION_LINE_HEIGHT_FACTOR,
    DESCRIPTION_LINE_SPACING_FACTOR, MAP_INNER_MARGIN_FACTOR, PILL_HEIGHT_RATIO,
    PILL_TEXT_HEIGHT_FACTOR,
};
use super::{decode_or_skip, page_scene, PosterFonts, SubwayRouteData};

/// Renders the subway route poster.
///
/// Same arrangement as the bus route poster, but the pill and the offset
/// map take the line colour. Green Line branch labels get smaller pill text,
/// and the trunk's description drops by a sixth of the pill height.
pub fn subway_route(
    format: Format,
    data: &SubwayRouteData,
    fonts: PosterFonts<'_>,
) -> Result<Scene> {
    data.validate()?;
    let layout = format.subway_route();
    let page = layout.page;
    let color = Color::from_str(&data.color)?;

    let pill_x = page.binding_width + layout.left_right_margin;
    let pill_y = layout.top_bottom_margin;
    let pill_height = layout.pill_width * PILL_HEIGHT_RATIO;
    let text_factor = if data.is_branch() {
        BRANCH_PILL_TEXT_HEIGHT_FACTOR
    } else {
        PILL_TEXT_HEIGHT_FACTOR
    };

    let pill = fixed_size_pill(
        fonts.bold,
        Position::new(pill_x, pill_y),
        &data.route,
        &FixedPillParams {
            width: layout.pill_width,
            height: pill_height,
            max_text_height: pill_height * text_factor,
            max_text_width: None,
            fill: FillStyle::Outside,
            hatch_spacing: layout.pill_hatch_spacing,
        },
        color,
    )?;

    let description_x = pill_x + layout.pill_width + layout.description_margin;
    let description_y = if data.id() == "Green" {
        pill_y + pill_height / 6.0
    } else {
        pill_y
    };
    let lines = split_description(&data.description);
    let description = layout_lines(
        fonts.regular,
        Position::new(description_x, description_y),
        &lines,
        &TextParams {
            line_height: pill_height * DESCRIPTION_LINE_HEIGHT_FACTOR,
            spacing_factor: DESCRIPTION_LINE_SPACING_FACTOR,
            max_width: page.usable_width()
                - (layout.pill_width + 2.0 * layout.left_right_margin + layout.description_margin),
            fill: true,
            hatch_spacing: layout.description_hatch_spacing,
        },
    )?;

    let map_x = pill_x;
    let map_width = page.usable_width() - 2.0 * layout.left_right_margin;
    // Padding follows the pill-only header even when the description is taller
    let nominal_height =
        page.height - (2.0 * layout.top_bottom_margin + pill_height + layout.map_top_margin);
    let inner = map_width.min(nominal_height) * MAP_INNER_MARGIN_FACTOR;

    let header_height = pill_height.max(description.height);
    let map_y = layout.top_bottom_margin + header_height + layout.map_top_margin;
    let map_height =
        page.height - (2.0 * layout.top_bottom_margin + header_height + layout.map_top_margin);

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
        &MapStyle::new(color, Some(layout.map_offset)),
    )?;

    log::debug!(
        "Subway route {:?} ({}) on {}: branch {}, map {:.1}x{:.1} with {} pieces",
        data.route,
        data.id(),
        format,
        data.is_branch(),
        map_width,
        map_height,
        map.len()
    );

    let mut scene = page_scene(page);
    scene.extend(pill.into_drawables());
    scene.extend(description.into_drawables(Color::black()));
    scene.extend(map.into_drawables());
    let border = Region::rectangle(Bounds::new(map_x, map_y, map_width, map_height));
    scene.push(Part::Outline(border), Color::black());
    Ok(scene)
}
