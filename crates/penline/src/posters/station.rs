// this_file: crates/penline/src/posters/station.rs

//! Station poster: stop name, route pills, neighbourhood map

use std::str::FromStr;

use penline_core::{Bounds, Color, FillStyle, Position, Result, Scene};
use penline_layout::{
    layout_lines, variable_width_pill, windowed_fit, MapStyle, Pill, TextParams,
    VariablePillParams, Window,
};

use super::format::{
    Format, PILL_HEIGHT_RATIO, PILL_TEXT_HEIGHT_FACTOR, STATION_MAP_HEIGHT_RATIO,
    STATION_MAP_WIDTH_LONG, STOP_NAME_SPACING_FACTOR,
};
use super::{decode_or_skip, flow_pills, page_scene, PosterFonts, StationData};

pub fn station(format: Format, data: &StationData, fonts: PosterFonts<'_>) -> Result<Scene> {
    data.validate()?;
    let layout = format.station();
    let page = layout.page;

    let body_x = page.binding_width + layout.left_right_margin;
    let body_width = page.usable_width() - 2.0 * layout.left_right_margin;

    let stop_name = layout_lines(
        fonts.regular,
        Position::new(body_x, layout.top_margin),
        &[data.stop_name.as_str()],
        &TextParams {
            line_height: layout.stop_name_line_height,
            spacing_factor: STOP_NAME_SPACING_FACTOR,
            max_width: body_width,
            fill: true,
            hatch_spacing: layout.hatch_spacing,
        },
    )?;

    let pill_height = layout.pill_min_width * PILL_HEIGHT_RATIO;
    let pill_params = VariablePillParams {
        height: pill_height,
        text_height: pill_height * PILL_TEXT_HEIGHT_FACTOR,
        margin: layout.pill_inner_margin,
        min_width: layout.pill_min_width,
        fill: FillStyle::Outside,
        hatch_spacing: layout.hatch_spacing,
    };
    let mut pills = data
        .route_pills
        .iter()
        .map(|route| {
            variable_width_pill(
                fonts.bold,
                Position::new(0.0, 0.0),
                &route.label,
                &pill_params,
                Color::from_str(&route.color)?,
            )
        })
        .collect::<Result<Vec<Pill>>>()?;

    let pills_y = layout.top_margin + stop_name.height + layout.pills_top_margin;
    let pills_height = flow_pills(
        &mut pills,
        Position::new(body_x, pills_y),
        body_width,
        pill_height,
        layout.pill_outer_margin,
    );

    let map_y = pills_y + pills_height + layout.map_top_margin;
    let target = Bounds::new(
        body_x,
        map_y,
        body_width,
        body_width * STATION_MAP_HEIGHT_RATIO,
    );
    let window = Window {
        center_lat: data.map_data.lat,
        center_long: data.map_data.long,
        long_width: STATION_MAP_WIDTH_LONG,
    };

    let mut scene = page_scene(page);
    scene.extend(stop_name.into_drawables(Color::black()));
    for pill in pills {
        scene.extend(pill.into_drawables());
    }

    for line in &data.map_data.polylines {
        let Some(coords) = decode_or_skip(&line.polyline) else {
            continue;
        };
        let color = Color::from_str(&line.color)?;
        // Black routes are drawn as a single stroke
        let offset = (color != Color::black()).then_some(layout.map_color_offset);
        let style = MapStyle::new(color.nudged(), offset);
        let trace = windowed_fit(&[coords], &window, target, &style)?;
        scene.extend(trace.into_drawables());
    }

    log::debug!(
        "Station {:?} on {}: {} pills, map at y {:.1}, {} drawables",
        data.stop_name,
        format,
        data.route_pills.len(),
        map_y,
        scene.drawables.len()
    );

    Ok(scene)
}
