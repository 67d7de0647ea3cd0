//! Fonts for Penline: bytes in, glyph contours out
//!
//! A [`Font`] keeps the raw font data and parses tables on demand, which
//! keeps it `Send + Sync` and supports faces inside TTC collections.
//!
//! Text is laid out left to right with `hmtx` advances only: no shaping, no
//! kerning. Outlines stay in font design units (unscaled), with y flipped so
//! that glyphs sit above y = 0 in screen space. The layout engines rescale
//! whatever comes out, so the absolute unit does not matter.

mod pen;

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::MetadataProvider;

use penline_core::{
    error::{FontLoadError, Result},
    traits::OutlineProvider,
    Contour,
};

use crate::pen::ContourPen;

/// Glyph used when a character is not in the font
const NOTDEF: u32 = 0;

/// A font loaded into memory
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        log::debug!(
            "Loaded font face {} ({} bytes, {} units/em)",
            face_index,
            data.len(),
            units_per_em
        );

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    /// Horizontal advance in font units; half an em when the font has no
    /// metrics for the glyph
    pub fn advance_width(&self, glyph_id: u32) -> f64 {
        self.font_ref()
            .and_then(|font| {
                use read_fonts::types::GlyphId;
                font.hmtx().ok()?.advance(GlyphId::new(glyph_id))
            })
            .map(f64::from)
            .unwrap_or_else(|| f64::from(self.units_per_em) / 2.0)
    }

    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| u32::from(maxp.num_glyphs())))
    }

    /// Contours of one glyph with its origin at `origin_x`
    pub fn glyph_contours(&self, glyph_id: u32, origin_x: f64) -> Vec<Contour> {
        let Ok(font) = skrifa::FontRef::from_index(&self.data, self.face_index) else {
            return Vec::new();
        };
        draw_glyph(&font, glyph_id, origin_x)
    }
}

fn draw_glyph(font: &skrifa::FontRef<'_>, glyph_id: u32, origin_x: f64) -> Vec<Contour> {
    let Some(glyph) = font.outline_glyphs().get(skrifa::GlyphId::new(glyph_id)) else {
        return Vec::new();
    };

    let mut pen = ContourPen::new(origin_x);
    let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
    if let Err(err) = glyph.draw(settings, &mut pen) {
        log::warn!("Failed to draw glyph {}: {}", glyph_id, err);
        return Vec::new();
    }
    pen.finish()
}

impl OutlineProvider for Font {
    fn outline(&self, text: &str) -> Vec<Contour> {
        let Ok(font) = skrifa::FontRef::from_index(&self.data, self.face_index) else {
            return Vec::new();
        };

        let mut contours = Vec::new();
        let mut pen_x = 0.0;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let glyph_id = self.glyph_id(ch).unwrap_or_else(|| {
                log::warn!("No glyph for {:?}, drawing .notdef", ch);
                NOTDEF
            });
            contours.extend(draw_glyph(&font, glyph_id, pen_x));
            pen_x += self.advance_width(glyph_id);
        }

        log::trace!(
            "Outlined {:?}: {} contours, advance {}",
            text,
            contours.len(),
            pen_x
        );
        contours
    }
}
