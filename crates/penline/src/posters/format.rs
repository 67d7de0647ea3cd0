//! Paper formats and their layout constants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use penline_core::{FillStyle, PenlineError};

/// Pill height as a fraction of the pill's (minimum) width
pub const PILL_HEIGHT_RATIO: f64 = 0.5;
/// Pill text height as a fraction of the pill height
pub const PILL_TEXT_HEIGHT_FACTOR: f64 = 0.6;
/// Description line height as a fraction of the pill height
pub const DESCRIPTION_LINE_HEIGHT_FACTOR: f64 = 4.0 / 9.0;
pub const DESCRIPTION_LINE_SPACING_FACTOR: f64 = 0.2;
/// Map padding inside its border, as a fraction of the shorter map side
pub const MAP_INNER_MARGIN_FACTOR: f64 = 0.04;
/// Longitudinal width of the station map window, in degrees
pub const STATION_MAP_WIDTH_LONG: f64 = 0.02;
/// Station map height as a fraction of the body width
pub const STATION_MAP_HEIGHT_RATIO: f64 = 0.625;
/// Gap after the stop name; only matters for multi-line names
pub const STOP_NAME_SPACING_FACTOR: f64 = 10.0;
/// Pill text height for Green Line branches, whose labels run longer
pub const BRANCH_PILL_TEXT_HEIGHT_FACTOR: f64 = 0.45;

/// A paper size the posters know how to lay out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Muji B5 lined notebook, drawn across a binding
    #[default]
    Notebook,
    /// 11x14 print
    Print,
}

/// Page size plus the strip lost to a binding on the left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub binding_width: f64,
}

impl Page {
    /// Width to the right of the binding
    pub fn usable_width(&self) -> f64 {
        self.width - self.binding_width
    }
}

/// Layout constants for the bus route poster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusRouteLayout {
    pub page: Page,
    pub left_right_margin: f64,
    pub top_bottom_margin: f64,
    pub map_top_margin: f64,
    pub map_outline: bool,
    pub description_margin: f64,
    pub pill_width: f64,
    pub pill_fill: FillStyle,
    pub hatch_spacing: f64,
    pub map_offset: Option<f64>,
}

/// Layout constants for the station poster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationLayout {
    pub page: Page,
    pub left_right_margin: f64,
    pub top_margin: f64,
    pub pills_top_margin: f64,
    pub map_top_margin: f64,
    pub stop_name_line_height: f64,
    pub pill_min_width: f64,
    pub pill_inner_margin: f64,
    pub pill_outer_margin: f64,
    pub hatch_spacing: f64,
    /// Offset used for coloured routes; black ones get none
    pub map_color_offset: f64,
}

/// Layout constants for the subway route poster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubwayRouteLayout {
    pub page: Page,
    pub left_right_margin: f64,
    pub top_bottom_margin: f64,
    pub map_top_margin: f64,
    pub description_margin: f64,
    pub pill_width: f64,
    pub pill_hatch_spacing: f64,
    pub description_hatch_spacing: f64,
    pub map_offset: f64,
}

/// Layout constants for the bus poster, a grid of every bus route in an area.
///
/// Cell sizes are fractions of the cell, which depends on how many routes
/// share the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusPosterLayout {
    pub page: Page,
    pub page_margin: f64,
    pub header_height: f64,
    pub header_text_height: f64,
    pub header_left_right_margin: f64,
    pub header_hatch_spacing: f64,
    /// Cell padding, as a fraction of the cell width
    pub bus_margin_factor: f64,
    /// Gap between pill and description, as a fraction of the cell width
    pub pill_margin_factor: f64,
    /// Gap above the map, as a fraction of the cell height
    pub map_margin_factor: f64,
    pub pill_width_factor: f64,
    pub description_line_height_factor: f64,
    pub hatch_spacing: f64,
}

impl Default for BusPosterLayout {
    fn default() -> Self {
        Self {
            page: Format::Print.page(),
            page_margin: 16.0,
            header_height: 80.0,
            header_text_height: 36.0,
            header_left_right_margin: 32.0,
            header_hatch_spacing: 1.0,
            bus_margin_factor: 0.08,
            pill_margin_factor: 0.05,
            map_margin_factor: 0.04,
            pill_width_factor: 0.25,
            description_line_height_factor: 0.5,
            hatch_spacing: 0.7,
        }
    }
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Notebook, Format::Print];

    pub fn name(self) -> &'static str {
        match self {
            Format::Notebook => "notebook",
            Format::Print => "print",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Notebook => "Muji B5 Lined Notebook",
            Format::Print => "11x14 print",
        }
    }

    pub fn page(self) -> Page {
        match self {
            Format::Notebook => Page {
                width: 420.0,
                height: 595.0,
                binding_width: 48.0,
            },
            Format::Print => Page {
                width: 550.0,
                height: 700.0,
                binding_width: 0.0,
            },
        }
    }

    pub fn bus_route(self) -> BusRouteLayout {
        let page = self.page();
        match self {
            Format::Notebook => BusRouteLayout {
                page,
                left_right_margin: 32.0,
                top_bottom_margin: 64.0,
                map_top_margin: 24.0,
                map_outline: true,
                description_margin: 16.0,
                pill_width: 72.0,
                pill_fill: FillStyle::Outside,
                hatch_spacing: 1.5,
                map_offset: None,
            },
            Format::Print => BusRouteLayout {
                page,
                left_right_margin: 64.0,
                top_bottom_margin: 64.0,
                map_top_margin: 32.0,
                map_outline: true,
                description_margin: 16.0,
                pill_width: 96.0,
                pill_fill: FillStyle::Outside,
                hatch_spacing: 1.2,
                map_offset: Some(0.5),
            },
        }
    }

    pub fn subway_route(self) -> SubwayRouteLayout {
        let page = self.page();
        match self {
            Format::Notebook => SubwayRouteLayout {
                page,
                left_right_margin: 32.0,
                top_bottom_margin: 64.0,
                map_top_margin: 24.0,
                description_margin: 16.0,
                pill_width: 72.0,
                pill_hatch_spacing: 1.2,
                description_hatch_spacing: 1.5,
                map_offset: 0.7,
            },
            Format::Print => SubwayRouteLayout {
                page,
                left_right_margin: 64.0,
                top_bottom_margin: 64.0,
                map_top_margin: 32.0,
                description_margin: 16.0,
                pill_width: 96.0,
                pill_hatch_spacing: 1.0,
                description_hatch_spacing: 1.2,
                map_offset: 0.5,
            },
        }
    }

    pub fn station(self) -> StationLayout {
        let page = self.page();
        match self {
            Format::Notebook => StationLayout {
                page,
                left_right_margin: 32.0,
                top_margin: 80.0,
                pills_top_margin: 16.0,
                map_top_margin: 32.0,
                stop_name_line_height: 24.0,
                pill_min_width: 48.0,
                pill_inner_margin: 8.0,
                pill_outer_margin: 8.0,
                hatch_spacing: 1.5,
                map_color_offset: 0.7,
            },
            Format::Print => StationLayout {
                page,
                left_right_margin: 64.0,
                top_margin: 96.0,
                pills_top_margin: 16.0,
                map_top_margin: 32.0,
                stop_name_line_height: 32.0,
                pill_min_width: 64.0,
                pill_inner_margin: 8.0,
                pill_outer_margin: 8.0,
                hatch_spacing: 1.2,
                map_color_offset: 0.5,
            },
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = PenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PenlineError::Config(format!("unknown format: {s}")))
    }
}
