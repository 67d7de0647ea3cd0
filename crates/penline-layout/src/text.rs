//! Multi-line text blocks at one shared scale

use penline_core::error::{ensure_non_negative, ensure_positive, Result};
use penline_core::params::DEFAULT_HATCH_SPACING;
use penline_core::traits::OutlineProvider;
use penline_core::{Bounds, Color, Drawable, HatchSet, Part, Position, Region, Transform};

use crate::fit::fit_scale;
use crate::glyph::resolve_text;
use crate::hatch::{hatch, HatchParams};

/// Sizing and shading for a text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextParams {
    /// Preferred height of the tallest line
    pub line_height: f64,
    /// Gap between lines, as a fraction of the line height
    pub spacing_factor: f64,
    /// Hard ceiling on the widest line
    pub max_width: f64,
    /// Hatch the glyphs
    pub fill: bool,
    pub hatch_spacing: f64,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            spacing_factor: 0.2,
            max_width: 300.0,
            fill: false,
            hatch_spacing: DEFAULT_HATCH_SPACING,
        }
    }
}

impl TextParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("line height", self.line_height)?;
        ensure_non_negative("line spacing factor", self.spacing_factor)?;
        ensure_positive("max width", self.max_width)?;
        if self.fill {
            ensure_positive("hatch spacing", self.hatch_spacing)?;
        }
        Ok(())
    }
}

/// Laid-out lines sharing one scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// One region per input line, in input order
    pub lines: Vec<Region>,
    pub scale: f64,
    /// Rendered height of the tallest line
    pub line_height: f64,
    /// Top of the first line to bottom of the last
    pub height: f64,
    /// Empty unless the block was filled
    pub hatch: HatchSet,
}

impl TextBlock {
    pub fn bounds(&self) -> Bounds {
        self.lines
            .iter()
            .fold(Bounds::default(), |acc, line| acc.union(line.bounds()))
    }

    /// Moves the whole block, hatch included, so its bounds are centred
    /// in `frame`
    pub fn center_in(&mut self, frame: Bounds) {
        let (to, from) = (frame.center(), self.bounds().center());
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        for line in &mut self.lines {
            line.translate(dx, dy);
        }
        self.hatch.translate(dx, dy);
    }

    pub fn into_drawables(self, color: Color) -> Vec<Drawable> {
        let mut parts: Vec<Drawable> = self
            .lines
            .into_iter()
            .map(|line| Drawable::new(Part::Outline(line), color))
            .collect();
        if !self.hatch.is_empty() {
            parts.push(Drawable::new(Part::Hatch(self.hatch), color));
        }
        parts
    }
}

/// Lays out `lines` top-down from `position`.
///
/// All lines share one scale: the one that makes the tallest line
/// `line_height` tall, unless that would push the widest line past
/// `max_width`, in which case width wins.
pub fn layout_lines<S: AsRef<str>>(
    provider: &dyn OutlineProvider,
    position: Position,
    lines: &[S],
    params: &TextParams,
) -> Result<TextBlock> {
    params.validate()?;

    let raw: Vec<Region> = lines
        .iter()
        .map(|line| resolve_text(provider, line.as_ref()))
        .collect();

    let max_line_width = raw.iter().map(|r| r.bounds().width).fold(0.0, f64::max);
    let max_line_height = raw.iter().map(|r| r.bounds().height).fold(0.0, f64::max);

    let scale = fit_scale(&[
        (params.max_width, max_line_width),
        (params.line_height, max_line_height),
    ]);
    let line_height = max_line_height * scale;
    let pitch = line_height * (1.0 + params.spacing_factor);

    log::debug!(
        "Text block: {} lines, widest {:.1}, tallest {:.1}, scale {:.4}",
        raw.len(),
        max_line_width,
        max_line_height,
        scale
    );

    let placed: Vec<Region> = raw
        .into_iter()
        .enumerate()
        .map(|(i, mut region)| {
            if !region.is_empty() {
                let target = Position::new(position.x, position.y + i as f64 * pitch);
                let b = region.bounds();
                region.translate(target.x - b.x, target.y - b.y);
                region.scale(scale, target);
            }
            region
        })
        .collect();

    let count = placed.len() as f64;
    let height = if placed.is_empty() {
        0.0
    } else {
        count * line_height + (count - 1.0) * params.spacing_factor * line_height
    };

    let mut block = TextBlock {
        lines: placed,
        scale,
        line_height,
        height,
        hatch: HatchSet::default(),
    };

    if params.fill {
        let sweep = block.bounds();
        let fill_area = block
            .lines
            .iter()
            .cloned()
            .fold(Region::empty(), Region::union);
        block.hatch = hatch(&fill_area, sweep, &HatchParams::new(params.hatch_spacing))?;
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::Contour;

    /// Every character is a 10x20 box on a 12 unit advance.
    struct Boxes;

    impl OutlineProvider for Boxes {
        fn outline(&self, text: &str) -> Vec<Contour> {
            let data: String = text
                .chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(|(i, _)| {
                    let x = i as f64 * 12.0;
                    format!("M{x},-20 L{},-20 L{},0 L{x},0 Z ", x + 10.0, x + 10.0)
                })
                .collect();
            Contour::split_path_data(&data).unwrap_or_default()
        }
    }

    fn params(line_height: f64, max_width: f64) -> TextParams {
        TextParams {
            line_height,
            spacing_factor: 0.5,
            max_width,
            fill: false,
            hatch_spacing: 1.0,
        }
    }

    #[test]
    fn test_height_constraint_preferred() {
        let block = layout_lines(&Boxes, Position::new(0.0, 0.0), &["ab"], &params(10.0, 1000.0))
            .unwrap();
        assert!((block.scale - 0.5).abs() < 1e-9);
        assert!((block.line_height - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_width_is_a_hard_ceiling() {
        // "abcd" is 46 units wide; at height scale 1.0 it would overflow 23
        let block = layout_lines(&Boxes, Position::new(0.0, 0.0), &["abcd"], &params(20.0, 23.0))
            .unwrap();
        assert!((block.scale - 0.5).abs() < 1e-9);
        assert!(block.bounds().width <= 23.0 + 1e-6);
    }

    #[test]
    fn test_lines_stack_with_spacing() {
        let block = layout_lines(
            &Boxes,
            Position::new(5.0, 7.0),
            &["a", "bb", "c"],
            &params(10.0, 1000.0),
        )
        .unwrap();
        assert_eq!(block.lines.len(), 3);
        for (i, line) in block.lines.iter().enumerate() {
            let b = line.bounds();
            assert!((b.x - 5.0).abs() < 1e-6);
            assert!((b.y - (7.0 + i as f64 * 15.0)).abs() < 1e-6);
        }
        // 3 lines * 10 + 2 gaps * 5
        assert!((block.height - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_string_does_not_divide_by_zero() {
        let block = layout_lines(&Boxes, Position::new(0.0, 0.0), &[""], &params(10.0, 100.0))
            .unwrap();
        assert_eq!(block.scale, 1.0);
        assert_eq!(block.height, 0.0);
        assert!(block.lines[0].is_empty());
    }

    #[test]
    fn test_no_lines_is_an_empty_block() {
        let lines: [&str; 0] = [];
        let block = layout_lines(&Boxes, Position::new(0.0, 0.0), &lines, &params(10.0, 100.0))
            .unwrap();
        assert!(block.lines.is_empty());
        assert_eq!(block.height, 0.0);
    }

    #[test]
    fn test_center_in_moves_lines_and_hatch_together() {
        let mut p = params(10.0, 100.0);
        p.fill = true;
        let mut block = layout_lines(&Boxes, Position::new(0.0, 0.0), &["ab"], &p).unwrap();
        let hatch_before = block.hatch.bounds();
        let text_before = block.bounds();

        block.center_in(Bounds::new(0.0, 100.0, 200.0, 50.0));
        let b = block.bounds();
        assert!((b.center().x - 100.0).abs() < 1e-6);
        assert!((b.center().y - 125.0).abs() < 1e-6);

        let hatch_after = block.hatch.bounds();
        assert!((hatch_after.x - hatch_before.x - (b.x - text_before.x)).abs() < 1e-6);
        assert!((hatch_after.y - hatch_before.y - (b.y - text_before.y)).abs() < 1e-6);
    }

    #[test]
    fn test_fill_produces_hatch() {
        let mut p = params(10.0, 100.0);
        p.fill = true;
        let block = layout_lines(&Boxes, Position::new(0.0, 0.0), &["ab", "c"], &p).unwrap();
        assert!(!block.hatch.is_empty());
        let drawables = block.into_drawables(Color::black());
        assert_eq!(drawables.len(), 3);
        assert!(matches!(drawables[2].part, Part::Hatch(_)));
    }

    #[test]
    fn test_contract_violations_rejected() {
        assert!(layout_lines(&Boxes, Position::default(), &["a"], &params(0.0, 10.0)).is_err());
        assert!(layout_lines(&Boxes, Position::default(), &["a"], &params(10.0, -1.0)).is_err());
        let mut p = params(10.0, 10.0);
        p.spacing_factor = -0.1;
        assert!(layout_lines(&Boxes, Position::default(), &["a"], &p).is_err());
    }
}
