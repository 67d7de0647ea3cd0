//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use penline::posters::Format;

/// Penline - transit posters for pen plotters
#[derive(Parser, Debug)]
#[command(name = "penline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a bus route poster: route pill, description and route map
    #[command(alias = "bus")]
    BusRoute(PosterArgs),

    /// Render a subway route poster: the bus route layout in the line colour
    #[command(alias = "subway")]
    SubwayRoute(PosterArgs),

    /// Render a bus poster: every route in an area on one 11x14 page
    /// (--format is ignored)
    BusPoster(PosterArgs),

    /// Render a station poster: stop name, route pills and nearby map
    Station(PosterArgs),

    /// Show how a route description is broken into lines
    Split {
        /// Description such as "Harvard - Dudley via Massachusetts Avenue"
        description: String,
    },

    /// List the supported paper formats
    Formats,
}

/// Arguments shared by the poster commands
#[derive(Args, Debug)]
pub struct PosterArgs {
    /// Poster data as JSON
    #[arg(short, long)]
    pub input: PathBuf,

    /// Font for the description, stop name and map labels (.ttf, .otf, .ttc)
    #[arg(long = "font-regular")]
    pub font_regular: PathBuf,

    /// Font for the route pills
    #[arg(long = "font-bold")]
    pub font_bold: PathBuf,

    /// Paper format: notebook, print
    #[arg(long, default_value = "notebook")]
    pub format: Format,

    /// Output SVG file (writes to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decimal places for SVG coordinates
    #[arg(long, default_value = "3")]
    pub precision: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
