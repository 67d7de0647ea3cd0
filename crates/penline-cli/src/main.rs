// this_file: crates/penline-cli/src/main.rs

//! Penline CLI: transit posters as pen-plotter SVG.

use anyhow::Result;
use clap::Parser;
use penline_cli::cli::{Cli, Commands};
use penline_cli::commands::{self, PosterKind};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BusRoute(args) => {
            init_logger(args.verbose);
            commands::render(PosterKind::BusRoute, &args)?;
        }

        Commands::SubwayRoute(args) => {
            init_logger(args.verbose);
            commands::render(PosterKind::SubwayRoute, &args)?;
        }

        Commands::BusPoster(args) => {
            init_logger(args.verbose);
            commands::render(PosterKind::BusPoster, &args)?;
        }

        Commands::Station(args) => {
            init_logger(args.verbose);
            commands::render(PosterKind::Station, &args)?;
        }

        Commands::Split { description } => {
            init_logger(false);
            commands::split(&description)?;
        }

        Commands::Formats => commands::formats(),
    }

    Ok(())
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
