// this_file: crates/penline/src/posters/bus_poster.rs

//! Bus poster: every route in an area on one page
//!
//! Routes fill a near-square grid under a hatched header, in input order.
//! A short last row is centred. Each cell holds a pill, an unfilled
//! description and an unframed map.

use penline_core::{Bounds, Color, FillStyle, Part, Position, Region, Result, Scene};
use penline_layout::{
    fixed_size_pill, full_fit, layout_lines, split_description, FixedPillParams, GeoCoord,
    MapStyle, TextParams,
};

use super::format::{
    BusPosterLayout, DESCRIPTION_LINE_SPACING_FACTOR, PILL_HEIGHT_RATIO, PILL_TEXT_HEIGHT_FACTOR,
};
use super::{decode_or_skip, page_scene, BusPosterData, BusRouteData, PosterFonts};

/// Columns and rows for `count` cells: `ceil(sqrt(n))` columns and as many
/// rows as that needs
pub fn grid_size(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = (count as f64).sqrt().ceil() as usize;
    // Float rounding on perfect squares
    while cols * cols < count {
        cols += 1;
    }
    (cols, count.div_ceil(cols))
}

pub fn bus_poster(data: &BusPosterData, fonts: PosterFonts<'_>) -> Result<Scene> {
    data.validate()?;
    let layout = BusPosterLayout::default();
    let page = layout.page;

    let mut scene = page_scene(page);
    draw_header(&mut scene, &layout, &data.area_name, fonts)?;

    let (cols, rows) = grid_size(data.buses.len());
    let cell_width = (page.width - 2.0 * layout.page_margin) / cols as f64;
    let cell_height =
        (page.height - layout.header_height - 2.0 * layout.page_margin) / rows as f64;
    let last_row_len = data.buses.len() - (rows - 1) * cols;

    for (i, bus) in data.buses.iter().enumerate() {
        let row = i / cols;
        let mut col = (i % cols) as f64;
        if row == rows - 1 {
            col += (cols - last_row_len) as f64 / 2.0;
        }
        let cell = Bounds::new(
            layout.page_margin + cell_width * col,
            layout.page_margin + layout.header_height + cell_height * row as f64,
            cell_width,
            cell_height,
        );
        draw_cell(&mut scene, &layout, cell, bus, fonts)?;
    }

    log::debug!(
        "Bus poster for {:?}: {} routes in {}x{} cells of {:.1}x{:.1}",
        data.area_name,
        data.buses.len(),
        cols,
        rows,
        cell_width,
        cell_height
    );
    Ok(scene)
}

fn draw_header(
    scene: &mut Scene,
    layout: &BusPosterLayout,
    area_name: &str,
    fonts: PosterFonts<'_>,
) -> Result<()> {
    let frame = Bounds::new(0.0, layout.page_margin, layout.page.width, layout.header_height);
    // Guide only, like the page edge
    scene.push(Part::Outline(Region::rectangle(frame)), Color::blue());

    let mut title = layout_lines(
        fonts.bold,
        frame.origin(),
        &[format!("Bus Routes of {area_name}")],
        &TextParams {
            line_height: layout.header_text_height,
            spacing_factor: 0.0,
            max_width: layout.page.width - 2.0 * layout.header_left_right_margin,
            fill: true,
            hatch_spacing: layout.header_hatch_spacing,
        },
    )?;
    title.center_in(frame);
    scene.extend(title.into_drawables(Color::black()));
    Ok(())
}

fn draw_cell(
    scene: &mut Scene,
    layout: &BusPosterLayout,
    cell: Bounds,
    bus: &BusRouteData,
    fonts: PosterFonts<'_>,
) -> Result<()> {
    scene.push(Part::Outline(Region::rectangle(cell)), Color::blue());

    let margin = cell.width * layout.bus_margin_factor;
    let pill_width = cell.width * layout.pill_width_factor;
    let pill_height = pill_width * PILL_HEIGHT_RATIO;
    let pill_margin = cell.width * layout.pill_margin_factor;
    let map_margin = cell.height * layout.map_margin_factor;

    let pill = fixed_size_pill(
        fonts.bold,
        Position::new(cell.x + margin, cell.y + margin),
        &bus.route,
        &FixedPillParams {
            width: pill_width,
            height: pill_height,
            max_text_height: pill_height * PILL_TEXT_HEIGHT_FACTOR,
            max_text_width: None,
            fill: FillStyle::Inside,
            hatch_spacing: layout.hatch_spacing,
        },
        Color::black(),
    )?;

    let description_factor = 1.0
        - (2.0 * layout.bus_margin_factor + layout.pill_margin_factor + layout.pill_width_factor);
    let description = layout_lines(
        fonts.bold,
        Position::new(cell.x + pill_width + margin + pill_margin, cell.y + margin),
        &split_description(&bus.description),
        &TextParams {
            line_height: pill_height * layout.description_line_height_factor,
            spacing_factor: DESCRIPTION_LINE_SPACING_FACTOR,
            max_width: cell.width * description_factor,
            fill: false,
            hatch_spacing: layout.hatch_spacing,
        },
    )?;

    let header_height = pill_height.max(description.height);
    let map = Bounds::new(
        cell.x + margin,
        cell.y + margin + map_margin + header_height,
        cell.width - 2.0 * margin,
        cell.height - (2.0 * margin + header_height + map_margin),
    );

    scene.extend(pill.into_drawables());
    scene.extend(description.into_drawables(Color::black()));

    if map.height <= 0.0 {
        log::warn!(
            "No room for the {:?} map: header is {:.1} tall in a {:.1} cell",
            bus.route,
            header_height,
            cell.height
        );
        return Ok(());
    }
    let traces: Vec<Vec<GeoCoord>> = bus
        .encoded_polylines
        .iter()
        .filter_map(|encoded| decode_or_skip(encoded))
        .collect();
    let trace = full_fit(&traces, map, &MapStyle::new(Color::black(), None))?;
    scene.extend(trace.into_drawables());
    Ok(())
}
