//! Seams to external collaborators
//!
//! The layout engines never parse fonts themselves. They ask an
//! [`OutlineProvider`] for contours and resolve those into regions.

use crate::contour::Contour;

/// Turns a run of text into glyph contours
///
/// Coordinates are font design units with y pointing down, so a line of text
/// sits above its baseline at negative y. Contours must come back in the
/// order the font stores them; hole detection relies on outer contours
/// arriving before the counters they enclose.
///
/// ```
/// use penline_core::{traits::OutlineProvider, Contour};
///
/// struct Nothing;
///
/// impl OutlineProvider for Nothing {
///     fn outline(&self, _text: &str) -> Vec<Contour> {
///         Vec::new()
///     }
/// }
///
/// assert!(Nothing.outline("abc").is_empty());
/// ```
pub trait OutlineProvider {
    /// Contours for `text`; empty when nothing is drawable
    fn outline(&self, text: &str) -> Vec<Contour>;
}

impl<T: OutlineProvider + ?Sized> OutlineProvider for &T {
    fn outline(&self, text: &str) -> Vec<Contour> {
        (**self).outline(text)
    }
}

impl<T: OutlineProvider + ?Sized> OutlineProvider for std::sync::Arc<T> {
    fn outline(&self, text: &str) -> Vec<Contour> {
        (**self).outline(text)
    }
}
