//! Command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use penline::export_svg::SvgExporter;
use penline::fontdb::Font;
use penline::layout::split_description;
use penline::posters::{
    self, BusPosterData, BusRouteData, Format, PosterFonts, StationData, SubwayRouteData,
};

use crate::cli::PosterArgs;

/// Which poster template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterKind {
    BusRoute,
    SubwayRoute,
    BusPoster,
    Station,
}

pub fn render(kind: PosterKind, args: &PosterArgs) -> Result<()> {
    let regular = load_font(&args.font_regular)?;
    let bold = load_font(&args.font_bold)?;
    let fonts = PosterFonts::new(&regular, &bold);

    let scene = match kind {
        PosterKind::BusRoute => {
            let data: BusRouteData = read_json(&args.input)?;
            posters::bus_route(args.format, &data, fonts)
                .context("Failed to lay out bus route poster")?
        }
        PosterKind::SubwayRoute => {
            let data: SubwayRouteData = read_json(&args.input)?;
            posters::subway_route(args.format, &data, fonts)
                .context("Failed to lay out subway route poster")?
        }
        PosterKind::BusPoster => {
            let data: BusPosterData = read_json(&args.input)?;
            posters::bus_poster(&data, fonts).context("Failed to lay out bus poster")?
        }
        PosterKind::Station => {
            let data: StationData = read_json(&args.input)?;
            posters::station(args.format, &data, fonts)
                .context("Failed to lay out station poster")?
        }
    };

    let svg = SvgExporter::new()
        .with_precision(args.precision)
        .export(&scene)
        .context("Failed to export SVG")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} ({} bytes)", path.display(), svg.len());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(svg.as_bytes())
                .context("Failed to write SVG to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Prints each line of a split description
pub fn split(description: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in split_description(description) {
        writeln!(handle, "{}", line).context("Failed to write line")?;
    }
    Ok(())
}

pub fn formats() {
    println!("Formats:");
    for format in Format::ALL {
        let page = format.page();
        println!(
            "  {:<10} - {} ({}x{})",
            format.name(),
            format.description(),
            page.width,
            page.height
        );
    }
}

fn load_font(path: &Path) -> Result<Font> {
    Font::from_file(path).with_context(|| format!("Failed to load font {}", path.display()))
}

/// Reads a poster data file; validation happens in the templates
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
