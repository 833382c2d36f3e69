//! A [`Shaper`] reading glyphs straight out of a `ttf_parser::Face`.
//!
//! Each character is mapped through the font's `cmap` and glyphs are placed one after the other using their horizontal advance:
//! there is no kerning, no ligature and no reordering.

use crate::dimensions::Unit;
use crate::dimensions::units::Em;
use crate::font::{FaceMetrics, FontStyle, GlyphId, ShapedGlyph, ShapedRun, Shaper};
use crate::geometry::BBox;


/// A wrapper around 'ttf_parser::Face' implementing the [`Shaper`] trait.
pub struct TtfShaper<'a> {
    font: ttf_parser::Face<'a>,
}

impl<'a> TtfShaper<'a> {
    /// Creates a new 'TtfShaper' from a 'ttf_parser::Face'.
    pub fn new(font: ttf_parser::Face<'a>) -> Self {
        Self { font }
    }

    /// Returns a reference to the wrapped 'ttf_parser::Face'
    pub fn font(&self) -> &ttf_parser::Face<'a> {
        &self.font
    }

    /// Extracts the face-wide measurements from the `head`, `hhea` and `OS/2` tables.
    /// Fonts lacking an `OS/2` table get script sizes and offsets of zero.
    pub fn face_metrics(&self) -> FaceMetrics {
        let font = &self.font;
        let subscript   = font.subscript_metrics();
        let superscript = font.superscript_metrics();
        let underline   = font.underline_metrics();

        FaceMetrics {
            units_per_em:         font.units_per_em().into(),
            ascender:             font.ascender().into(),
            descender:            font.descender().into(),
            subscript_x_size:     subscript.map_or(0, |m| m.x_size).into(),
            subscript_y_size:     subscript.map_or(0, |m| m.y_size).into(),
            subscript_x_offset:   subscript.map_or(0, |m| m.x_offset).into(),
            subscript_y_offset:   subscript.map_or(0, |m| m.y_offset).into(),
            superscript_x_size:   superscript.map_or(0, |m| m.x_size).into(),
            superscript_y_size:   superscript.map_or(0, |m| m.y_size).into(),
            superscript_x_offset: superscript.map_or(0, |m| m.x_offset).into(),
            superscript_y_offset: superscript.map_or(0, |m| m.y_offset).into(),
            underline_position:   underline.map_or(0, |m| m.position).into(),
            line_gap:             font.line_gap().into(),
            style:                FontStyle::Regular,
        }
    }

    fn em(&self, value: i16, face: &FaceMetrics) -> Unit<Em> {
        face.to_em(value.into())
    }
}

impl<'a> Shaper for TtfShaper<'a> {
    fn shape(&self, text: &str, _face: &FaceMetrics) -> Vec<GlyphId> {
        text.chars()
            .filter_map(|character| {
                let gid = self.font.glyph_index(character);
                if gid.is_none() {
                    warn!("no glyph for {:?} in font, dropping it", character);
                }
                gid.map(GlyphId::from)
            })
            .collect()
    }

    fn layout_glyphs(&self, glyphs: &[GlyphId], face: &FaceMetrics) -> ShapedRun {
        let mut run = ShapedRun::empty();
        for &gid in glyphs {
            let ttf_gid = ttf_parser::GlyphId::from(gid);
            let advance = face.to_em(self.font.glyph_hor_advance(ttf_gid).unwrap_or(0).into());
            let bbox = self.font.glyph_bounding_box(ttf_gid).map(|rect| {
                BBox::new(
                    self.em(rect.x_min, face), self.em(rect.y_min, face),
                    self.em(rect.x_max, face), self.em(rect.y_max, face),
                ).translate(run.advance, Unit::ZERO)
            });

            if let Some(bbox) = bbox {
                run.bbox = Some(run.bbox.map_or(bbox, |run_bbox| run_bbox.union(bbox)));
            }
            run.glyphs.push(ShapedGlyph {
                advance,
                x: run.advance,
                bbox,
            });
            run.advance += advance;
        }
        run
    }
}
