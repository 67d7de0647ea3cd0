//! Rounded-rectangle badges with scaled text
//!
//! Two flavours share one outline shape (corner radius is half the height):
//!
//! - [`fixed_size_pill`] fits text into a badge of a given size
//! - [`variable_width_pill`] sizes the badge around text of a given height
//!
//! Both hand back the outline, the text and the hatch as separate parts, so a
//! caller can stroke them as distinct layers.

use penline_core::error::{ensure_non_negative, ensure_positive, PenlineError, Result};
use penline_core::params::DEFAULT_HATCH_SPACING;
use penline_core::traits::OutlineProvider;
use penline_core::{
    Bounds, Color, Drawable, FillStyle, HatchSet, Part, Position, Region, Transform,
};

use crate::fit::fit_scale;
use crate::glyph::resolve_text;
use crate::hatch::{hatch, HatchParams};

/// A laid-out pill
#[derive(Debug, Clone, PartialEq)]
pub struct Pill {
    pub outline: Region,
    pub text: Region,
    /// Empty when the fill style is [`FillStyle::None`]
    pub hatch: HatchSet,
    pub color: Color,
}

impl Pill {
    pub fn width(&self) -> f64 {
        self.outline.bounds().width
    }

    pub fn into_drawables(self) -> Vec<Drawable> {
        let color = self.color;
        [
            Part::Outline(self.outline),
            Part::Outline(self.text),
            Part::Hatch(self.hatch),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(|part| Drawable::new(part, color))
        .collect()
    }
}

impl Transform for Pill {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.outline.translate(dx, dy);
        self.text.translate(dx, dy);
        self.hatch.translate(dx, dy);
    }

    fn scale(&mut self, factor: f64, origin: Position) {
        self.outline.scale(factor, origin);
        self.text.scale(factor, origin);
        self.hatch.scale(factor, origin);
    }

    fn bounds(&self) -> Bounds {
        self.outline.bounds().union(self.text.bounds())
    }
}

/// Badge of a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPillParams {
    pub width: f64,
    pub height: f64,
    pub max_text_height: f64,
    /// Defaults to the pill width
    pub max_text_width: Option<f64>,
    pub fill: FillStyle,
    pub hatch_spacing: f64,
}

impl Default for FixedPillParams {
    fn default() -> Self {
        Self {
            width: 72.0,
            height: 36.0,
            max_text_height: 21.6,
            max_text_width: None,
            fill: FillStyle::Outside,
            hatch_spacing: DEFAULT_HATCH_SPACING,
        }
    }
}

impl FixedPillParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("pill width", self.width)?;
        ensure_positive("pill height", self.height)?;
        ensure_positive("max text height", self.max_text_height)?;
        if let Some(max_width) = self.max_text_width {
            ensure_positive("max text width", max_width)?;
        }
        if self.fill != FillStyle::None {
            ensure_positive("hatch spacing", self.hatch_spacing)?;
        }
        Ok(())
    }
}

/// Badge sized around its text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariablePillParams {
    pub height: f64,
    pub text_height: f64,
    /// Horizontal room on each side of the text
    pub margin: f64,
    pub min_width: f64,
    /// Only the two-state styles are accepted
    pub fill: FillStyle,
    pub hatch_spacing: f64,
}

impl Default for VariablePillParams {
    fn default() -> Self {
        Self {
            height: 24.0,
            text_height: 14.4,
            margin: 8.0,
            min_width: 48.0,
            fill: FillStyle::Outside,
            hatch_spacing: DEFAULT_HATCH_SPACING,
        }
    }
}

impl VariablePillParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("pill height", self.height)?;
        ensure_positive("text height", self.text_height)?;
        ensure_non_negative("pill margin", self.margin)?;
        ensure_non_negative("pill min width", self.min_width)?;
        if !self.fill.is_two_state() {
            return Err(PenlineError::UnsupportedFillStyle(self.fill));
        }
        if self.fill != FillStyle::None {
            ensure_positive("hatch spacing", self.hatch_spacing)?;
        }
        Ok(())
    }
}

/// Draws `text` centred in a `width` x `height` badge at `position`.
///
/// The text is scaled uniformly to the largest size that respects both text
/// limits. Limits larger than the pill itself are clamped to it, so the text
/// never pokes out of the outline's box.
pub fn fixed_size_pill(
    provider: &dyn OutlineProvider,
    position: Position,
    text: &str,
    params: &FixedPillParams,
    color: Color,
) -> Result<Pill> {
    params.validate()?;

    let max_height = params.max_text_height.min(params.height);
    let max_width = params.max_text_width.unwrap_or(params.width).min(params.width);

    let mut glyphs = resolve_text(provider, text);
    let raw = glyphs.bounds();
    let scale = fit_scale(&[(max_height, raw.height), (max_width, raw.width)]);

    let origin = Position::new(
        position.x + (params.width - raw.width * scale) / 2.0,
        position.y + (params.height - raw.height * scale) / 2.0,
    );
    place(&mut glyphs, raw, origin, scale);

    let frame = Bounds::new(position.x, position.y, params.width, params.height);
    let outline = Region::rounded_rectangle(frame, params.height / 2.0);
    let hatch = hatch_fill(params.fill, &outline, &glyphs, frame, params.hatch_spacing)?;

    log::debug!(
        "Fixed pill {:?}: scale {:.4}, {} hatch segments",
        text,
        scale,
        hatch.len()
    );

    Ok(Pill {
        outline,
        text: glyphs,
        hatch,
        color,
    })
}

/// Draws `text` at `text_height` in a badge wide enough to hold it.
///
/// The badge is `text width + 2 * margin` wide, but never narrower than
/// `min_width`. Crosshatch styles are rejected.
pub fn variable_width_pill(
    provider: &dyn OutlineProvider,
    position: Position,
    text: &str,
    params: &VariablePillParams,
    color: Color,
) -> Result<Pill> {
    params.validate()?;

    let mut glyphs = resolve_text(provider, text);
    let raw = glyphs.bounds();
    let scale = fit_scale(&[(params.text_height, raw.height)]);
    let text_width = raw.width * scale;
    let width = (text_width + 2.0 * params.margin).max(params.min_width);

    let origin = Position::new(
        position.x + (width - text_width) / 2.0,
        position.y + (params.height - raw.height * scale) / 2.0,
    );
    place(&mut glyphs, raw, origin, scale);

    let frame = Bounds::new(position.x, position.y, width, params.height);
    let outline = Region::rounded_rectangle(frame, params.height / 2.0);
    let hatch = hatch_fill(params.fill, &outline, &glyphs, frame, params.hatch_spacing)?;

    log::debug!("Variable pill {:?}: width {:.1}, scale {:.4}", text, width, scale);

    Ok(Pill {
        outline,
        text: glyphs,
        hatch,
        color,
    })
}

/// Moves the top-left of `region` (currently at `raw`) to `origin`, then
/// scales about that corner.
fn place(region: &mut Region, raw: Bounds, origin: Position, scale: f64) {
    if region.is_empty() {
        return;
    }
    region.translate(origin.x - raw.x, origin.y - raw.y);
    region.scale(scale, origin);
}

/// Hatch for a pill: the glyphs for inside styles, the badge minus the
/// glyphs for outside styles.
pub fn hatch_fill(
    style: FillStyle,
    outline: &Region,
    text: &Region,
    sweep: Bounds,
    spacing: f64,
) -> Result<HatchSet> {
    let fill = match style {
        FillStyle::None => return Ok(HatchSet::default()),
        FillStyle::Inside | FillStyle::InsideCrosshatch => text.clone(),
        FillStyle::Outside | FillStyle::OutsideCrosshatch => {
            outline.clone().subtract(text.clone())
        }
    };
    hatch(
        &fill,
        sweep,
        &HatchParams::new(spacing).crosshatched(style.is_crosshatch()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::Contour;

    const EPS: f64 = 1e-4;

    /// "I" is a 4x20 bar, anything else a 12x20 box with a counter.
    struct Letters;

    impl OutlineProvider for Letters {
        fn outline(&self, text: &str) -> Vec<Contour> {
            let mut data = String::new();
            let mut x = 0.0;
            for c in text.chars() {
                match c {
                    ' ' => {}
                    'I' => data += &format!("M{x},-20 L{},-20 L{},0 L{x},0 Z ", x + 4.0, x + 4.0),
                    _ => {
                        data += &format!(
                            "M{x},-20 L{},-20 L{},-20 L{},0 L{x},0 Z ",
                            x + 6.0,
                            x + 12.0,
                            x + 12.0
                        );
                        data += &format!(
                            "M{},-16 L{},-16 L{},-16 L{},-4 L{},-4 Z ",
                            x + 3.0,
                            x + 6.0,
                            x + 9.0,
                            x + 9.0,
                            x + 3.0
                        );
                    }
                }
                x += if c == 'I' { 6.0 } else { 14.0 };
            }
            Contour::split_path_data(&data).unwrap_or_default()
        }
    }

    fn fixed(fill: FillStyle) -> FixedPillParams {
        FixedPillParams {
            width: 72.0,
            height: 36.0,
            max_text_height: 21.6,
            max_text_width: None,
            fill,
            hatch_spacing: 1.5,
        }
    }

    fn within(inner: Bounds, outer: Bounds) -> bool {
        outer.contains_bounds(&inner, EPS)
    }

    #[test]
    fn test_fixed_pill_centres_text() {
        let pill = fixed_size_pill(
            &Letters,
            Position::new(80.0, 64.0),
            "OO",
            &fixed(FillStyle::None),
            Color::black(),
        )
        .unwrap();
        let text = pill.text.bounds();
        let frame = pill.outline.bounds();
        assert!((text.height - 21.6).abs() < EPS);
        assert!((text.center().x - frame.center().x).abs() < EPS);
        assert!((text.center().y - frame.center().y).abs() < EPS);
        assert!(pill.hatch.is_empty());
    }

    #[test]
    fn test_fixed_pill_shrinks_wide_text() {
        let pill = fixed_size_pill(
            &Letters,
            Position::new(0.0, 0.0),
            "OOOOOOOO",
            &fixed(FillStyle::None),
            Color::black(),
        )
        .unwrap();
        let text = pill.text.bounds();
        assert!(text.width <= 72.0 + EPS);
        assert!(text.height < 21.6);
        assert!(within(text, pill.outline.bounds()));
    }

    #[test]
    fn test_oversized_limits_are_clamped_to_the_pill() {
        let mut params = fixed(FillStyle::None);
        params.max_text_height = 500.0;
        params.max_text_width = Some(500.0);
        let pill = fixed_size_pill(&Letters, Position::default(), "I", &params, Color::black())
            .unwrap();
        assert!(within(pill.text.bounds(), pill.outline.bounds()));
    }

    #[test]
    fn test_outside_fill_leaves_text_clear() {
        let pill = fixed_size_pill(
            &Letters,
            Position::new(0.0, 0.0),
            "II",
            &fixed(FillStyle::Outside),
            Color::black(),
        )
        .unwrap();
        assert!(!pill.hatch.is_empty());
        for s in pill.hatch.segments().iter().filter(|s| s.length() > 0.1) {
            assert!(!pill.text.contains(s.midpoint()));
        }
    }

    #[test]
    fn test_inside_fill_stays_in_text() {
        let pill = fixed_size_pill(
            &Letters,
            Position::new(0.0, 0.0),
            "II",
            &fixed(FillStyle::Inside),
            Color::black(),
        )
        .unwrap();
        assert!(!pill.hatch.is_empty());
        for s in pill.hatch.segments().iter().filter(|s| s.length() > 0.1) {
            assert!(pill.text.contains(s.midpoint()));
        }
    }

    #[test]
    fn test_crosshatch_sweeps_both_diagonals() {
        let single = fixed_size_pill(
            &Letters,
            Position::default(),
            "I",
            &fixed(FillStyle::Outside),
            Color::black(),
        )
        .unwrap();
        let cross = fixed_size_pill(
            &Letters,
            Position::default(),
            "I",
            &fixed(FillStyle::OutsideCrosshatch),
            Color::black(),
        )
        .unwrap();
        assert!(cross.hatch.len() > single.hatch.len());
    }

    #[test]
    fn test_variable_pill_grows_with_text() {
        let params = VariablePillParams {
            fill: FillStyle::None,
            ..VariablePillParams::default()
        };
        let short = variable_width_pill(&Letters, Position::default(), "I", &params, Color::blue())
            .unwrap();
        let long = variable_width_pill(
            &Letters,
            Position::default(),
            "OOOOOO",
            &params,
            Color::blue(),
        )
        .unwrap();
        assert!((short.width() - 48.0).abs() < EPS);
        // 6 boxes: 82 units at scale 0.72, plus 8 on each side
        assert!((long.width() - (82.0 * 0.72 + 16.0)).abs() < 1e-3);
        let text = long.text.bounds();
        assert!((text.height - 14.4).abs() < EPS);
        assert!((text.center().x - long.outline.bounds().center().x).abs() < EPS);
    }

    #[test]
    fn test_variable_pill_rejects_crosshatch() {
        let params = VariablePillParams {
            fill: FillStyle::InsideCrosshatch,
            ..VariablePillParams::default()
        };
        let err = variable_width_pill(&Letters, Position::default(), "I", &params, Color::black())
            .unwrap_err();
        assert!(matches!(err, PenlineError::UnsupportedFillStyle(_)));
    }

    #[test]
    fn test_contract_violations_rejected() {
        let mut params = fixed(FillStyle::Outside);
        params.hatch_spacing = 0.0;
        assert!(fixed_size_pill(&Letters, Position::default(), "I", &params, Color::black())
            .is_err());
        let mut params = fixed(FillStyle::None);
        params.height = -1.0;
        assert!(fixed_size_pill(&Letters, Position::default(), "I", &params, Color::black())
            .is_err());
    }

    #[test]
    fn test_empty_text_still_draws_the_badge() {
        let pill = fixed_size_pill(
            &Letters,
            Position::default(),
            "",
            &fixed(FillStyle::Outside),
            Color::black(),
        )
        .unwrap();
        assert!(pill.text.is_empty());
        assert!(!pill.hatch.is_empty());
        assert_eq!(pill.into_drawables().len(), 2);
    }

    #[test]
    fn test_transform_moves_every_part() {
        let mut pill = fixed_size_pill(
            &Letters,
            Position::default(),
            "I",
            &fixed(FillStyle::Inside),
            Color::black(),
        )
        .unwrap();
        let before = pill.hatch.bounds();
        pill.translate(10.0, 5.0);
        let after = pill.hatch.bounds();
        assert!((after.x - before.x - 10.0).abs() < 1e-9);
        assert!((pill.outline.bounds().y - 5.0).abs() < EPS);
    }
}
