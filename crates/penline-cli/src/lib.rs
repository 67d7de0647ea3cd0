//! Command-line interface for Penline posters
//!
//! The `penline` binary reads poster data as JSON, lays it out with the
//! chosen fonts and paper format, and writes plotter-ready SVG.

pub mod cli;
pub mod commands;
