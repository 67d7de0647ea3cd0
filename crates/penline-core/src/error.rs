//! Error types for Penline
//!
//! Only caller contract violations and font or export failures surface as
//! errors. Odd input data (empty polylines, glyphs without outlines) degrades
//! to empty geometry.

use thiserror::Error;

use crate::params::FillStyle;

pub type Result<T> = std::result::Result<T, PenlineError>;

/// Main error type for Penline
#[derive(Debug, Error)]
pub enum PenlineError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Fill style {0} is not supported here")]
    UnsupportedFillStyle(FillStyle),

    #[error("Invalid path data: {0}")]
    InvalidPathData(String),

    #[error("Polyline decoding failed: {0}")]
    Decode(String),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Rejects zero, negative and non-finite values.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PenlineError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(PenlineError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Rejects negative and non-finite values; zero is allowed.
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PenlineError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(PenlineError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}
