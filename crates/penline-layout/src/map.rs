// this_file: crates/penline-layout/src/map.rs

//! Geographic polylines projected and fitted into a drawing box
//!
//! Projection is plain equirectangular: `x = longitude`, `y = -latitude`, so
//! north is up once y grows downward on the page. Two fitting modes exist:
//!
//! - [`full_fit`] scales every trace by one shared factor so that their
//!   combined extent fills the target box, keeping relative sizes intact
//! - [`windowed_fit`] crops the traces to a fixed geographic window centred
//!   on a point, then maps that window onto the target box
//!
//! Either mode can add a pair of parallel offset strokes around each piece.

use geo::{LineString, MultiLineString};
use penline_core::error::{ensure_positive, PenlineError, Result};
use penline_core::{Bounds, Color, Drawable, Part, Polyline, Position, Region, Transform};

use crate::fit::fit_scale;

/// Precision of the encoded polyline format (five decimal places)
pub const POLYLINE_PRECISION: u32 = 5;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoord {
    pub lat: f64,
    pub long: f64,
}

impl GeoCoord {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Decodes an encoded polyline string at standard precision.
pub fn decode_polyline(encoded: &str) -> Result<Vec<GeoCoord>> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| PenlineError::Decode(e.to_string()))?;
    Ok(line.0.iter().map(|c| GeoCoord::new(c.y, c.x)).collect())
}

/// Projects coordinates into drawing space, before any fitting
pub fn project(coords: &[GeoCoord]) -> Polyline {
    Polyline::new(coords.iter().map(|c| Position::new(c.long, -c.lat)))
}

/// Colour and optional offset distance for a trace
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapStyle {
    pub color: Color,
    /// Distance of the parallel strokes, in drawing units, applied after fitting
    pub offset: Option<f64>,
}

impl MapStyle {
    pub fn new(color: Color, offset: Option<f64>) -> Self {
        Self { color, offset }
    }
}

/// A geographic window of fixed longitudinal width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub center_lat: f64,
    pub center_long: f64,
    /// Width of the window in degrees of longitude
    pub long_width: f64,
}

/// One fitted stroke and, when offsetting succeeded, its two parallels
#[derive(Debug, Clone, PartialEq)]
pub struct TracePiece {
    pub base: Polyline,
    /// Left and right parallels
    pub offsets: Option<(Polyline, Polyline)>,
}

/// Fitted map strokes in a single colour
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapTrace {
    pub pieces: Vec<TracePiece>,
    pub color: Color,
}

impl MapTrace {
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Extent of the base strokes
    pub fn bounds(&self) -> Bounds {
        extent(self.pieces.iter().map(|p| &p.base))
    }

    pub fn into_drawables(self) -> Vec<Drawable> {
        let color = self.color;
        let mut drawables = Vec::with_capacity(self.pieces.len() * 3);
        for piece in self.pieces {
            drawables.push(Drawable::new(Part::Stroke(piece.base), color));
            if let Some((left, right)) = piece.offsets {
                drawables.push(Drawable::new(Part::Stroke(left), color));
                drawables.push(Drawable::new(Part::Stroke(right), color));
            }
        }
        drawables
    }
}

/// Fits every trace into `target` with one shared scale, centring their
/// combined extent. Empty coordinate lists are dropped first.
pub fn full_fit(traces: &[Vec<GeoCoord>], target: Bounds, style: &MapStyle) -> Result<MapTrace> {
    validate_target(target)?;
    let offset = validate_offset(style.offset)?;

    let mut lines: Vec<Polyline> = traces
        .iter()
        .filter(|coords| !coords.is_empty())
        .map(|coords| project(coords))
        .collect();
    if lines.len() < traces.len() {
        log::warn!("Dropped {} empty polylines", traces.len() - lines.len());
    }

    let combined = extent(lines.iter());
    let scale = fit_scale(&[
        (target.width, combined.width),
        (target.height, combined.height),
    ]);
    let dx = target.x + (target.width - combined.width * scale) / 2.0 - combined.x;
    let dy = target.y + (target.height - combined.height * scale) / 2.0 - combined.y;

    for line in &mut lines {
        line.scale(scale, combined.origin());
        line.translate(dx, dy);
    }

    log::debug!(
        "Full fit of {} polylines: extent {:.4}x{:.4}, scale {:.2}",
        lines.len(),
        combined.width,
        combined.height,
        scale
    );

    Ok(with_offsets(lines, offset, style.color))
}

/// Crops traces to `window` and maps the window onto `target`.
///
/// The window's latitudinal height follows the target box's aspect ratio.
/// Traces that never enter the window contribute no pieces; a trace that
/// leaves and re-enters contributes one piece per visit.
pub fn windowed_fit(
    traces: &[Vec<GeoCoord>],
    window: &Window,
    target: Bounds,
    style: &MapStyle,
) -> Result<MapTrace> {
    validate_target(target)?;
    let long_width = ensure_positive("window width", window.long_width)?;
    let offset = validate_offset(style.offset)?;

    let lat_height = long_width * target.height / target.width;
    let center = Position::new(window.center_long, -window.center_lat);
    let clip = Region::rectangle(Bounds::new(
        center.x - long_width / 2.0,
        center.y - lat_height / 2.0,
        long_width,
        lat_height,
    ));

    let projected: Vec<LineString<f64>> = traces
        .iter()
        .filter(|coords| coords.len() >= 2)
        .map(|coords| project(coords).into_line_string())
        .collect();
    let clipped = clip.clip_lines(&MultiLineString::new(projected));

    let scale = target.width / long_width;
    let goal = target.center();
    let lines: Vec<Polyline> = clipped
        .0
        .into_iter()
        .map(|piece| {
            let mut line = Polyline::from_line_string(piece);
            line.scale(scale, center);
            line.translate(goal.x - center.x, goal.y - center.y);
            line
        })
        .collect();

    log::debug!(
        "Windowed fit around ({:.5}, {:.5}): {} traces -> {} pieces",
        window.center_lat,
        window.center_long,
        traces.len(),
        lines.len()
    );

    Ok(with_offsets(lines, offset, style.color))
}

fn with_offsets(lines: Vec<Polyline>, offset: Option<f64>, color: Color) -> MapTrace {
    let pieces = lines
        .into_iter()
        .map(|base| {
            let offsets = offset.and_then(|d| match (base.offset(d), base.offset(-d)) {
                (Some(left), Some(right)) => Some((left, right)),
                _ => {
                    log::debug!("Skipping offset for degenerate piece of {} points", base.len());
                    None
                }
            });
            TracePiece { base, offsets }
        })
        .collect();
    MapTrace { pieces, color }
}

/// Smallest box around every point, including lone points
fn extent<'a>(lines: impl Iterator<Item = &'a Polyline>) -> Bounds {
    let mut points = lines.flat_map(|line| line.points()).peekable();
    if points.peek().is_none() {
        return Bounds::default();
    }
    let (min_x, min_y, max_x, max_y) = points.fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
    );
    Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

fn validate_target(target: Bounds) -> Result<()> {
    ensure_positive("map width", target.width)?;
    ensure_positive("map height", target.height)?;
    Ok(())
}

fn validate_offset(offset: Option<f64>) -> Result<Option<f64>> {
    offset.map(|d| ensure_positive("map offset", d)).transpose()
}
