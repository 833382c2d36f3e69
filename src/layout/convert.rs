//! The bridge between the shaper and the layout tree: turning strings into [`TextLayout`]s.

use crate::dimensions::Unit;
use crate::font::{FaceMetrics, ShapedGlyph, Shaper};
use crate::font::common::GlyphId;
use crate::geometry::BBox;

use super::{Composite, Glyph, TextLayout};

impl Glyph {
    fn from_shaped(gid : GlyphId, face : &FaceMetrics, shaped : &ShapedGlyph) -> Self {
        Self {
            gid,
            style:   face.style,
            x:       shaped.x,
            bbox:    shaped.bbox.unwrap_or_else(|| BBox::baseline_span(shaped.x, shaped.advance)),
            advance: shaped.advance,
        }
    }
}

impl<'e> Composite<'e, Glyph> {
    /// Shapes `value` in the given face, with the origin of the run at (0, 0).
    ///
    /// The run keeps the face's nominal ascender and descender. A run without ink (e.g. a space, or a string
    /// the shaper could not resolve) spans its advance along the baseline.
    pub fn from_string<S : Shaper + ?Sized>(value : &str, face : &FaceMetrics, shaper : &S) -> TextLayout<'e> {
        let gids = shaper.shape(value, face);
        if gids.is_empty() && !value.is_empty() {
            warn!("no glyph for {:?} in the {:?} face", value, face.style);
        }
        let run = shaper.layout_glyphs(&gids, face);

        let mut text : TextLayout<'e> = Composite::new(Unit::ZERO, Unit::ZERO);
        text.advance   = run.advance;
        text.bbox      = run.bbox.unwrap_or_else(|| BBox::baseline_span(Unit::ZERO, run.advance));
        text.ascender  = face.ascender();
        text.descender = face.descender();
        text.children  = gids
            .iter()
            .zip(run.glyphs.iter())
            .map(|(&gid, shaped)| Glyph::from_shaped(gid, face, shaped))
            .collect();

        trace!("shaped {:?}: {} glyphs, advance {}", value, text.children.len(), text.advance);
        text
    }

    /// Turns a run into a rule: its advance ends at the right of its ink
    /// and its ascender and descender hug the ink.
    pub(crate) fn into_rule(mut self) -> Self {
        self.advance   = self.bbox.x_max - self.x;
        self.ascender  = self.bbox.y_max;
        self.descender = self.bbox.y_min;
        self
    }
}
