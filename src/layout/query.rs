//! Queries on a finished layout tree: flattening it into positioned glyphs and hit-testing,
//! for editors which need to map a pointer position back to the expression under it.

use crate::dimensions::Unit;
use crate::dimensions::units::Em;
use crate::expression::Expression;
use crate::font::{FontStyle, GlyphId};
use crate::geometry::BBox;

use super::{ExpressionLayout, LayoutNode, LineLayout, TextLayout};


/// A glyph with everything needed to paint it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    /// glyph id
    pub gid:     GlyphId,
    /// face of the glyph
    pub style:   FontStyle,
    /// x-coordinate of the origin
    pub x:       Unit<Em>,
    /// baseline
    pub y:       Unit<Em>,
    /// horizontal stretch of the outline
    pub scale_x: f64,
    /// vertical stretch of the outline
    pub scale_y: f64,
    /// ink box
    pub bbox:    BBox<Em>,
}

impl PlacedGlyph {
    fn new(text : &TextLayout, index : usize) -> Option<Self> {
        let glyph = text.children.get(index)?;
        Some(Self {
            gid:     glyph.gid,
            style:   glyph.style,
            x:       glyph.x,
            y:       text.y,
            scale_x: text.scale_x,
            scale_y: text.scale_y,
            bbox:    glyph.bbox,
        })
    }
}

fn texts<'a, 'e>(line : &'a LineLayout<'e>, out : &mut Vec<&'a TextLayout<'e>>) {
    for node in line.children.iter() {
        match node {
            LayoutNode::Text(text) => out.push(text),
            LayoutNode::Expression(expression) => {
                for line in expression.lines() {
                    texts(line, out);
                }
            },
        }
    }
}

impl<'e> ExpressionLayout<'e> {
    /// Every glyph of the tree, in drawing order
    pub fn glyphs(&self) -> Vec<PlacedGlyph> {
        let mut runs = Vec::new();
        for line in self.lines() {
            texts(line, &mut runs);
        }

        runs.into_iter()
            .flat_map(|text| (0 .. text.children.len()).filter_map(move |i| PlacedGlyph::new(text, i)))
            .collect()
    }

    /// The innermost expression whose ink box contains the point, if any
    pub fn expression_at(&self, x : Unit<Em>, y : Unit<Em>) -> Option<&'e Expression> {
        if !self.bbox.contains(x, y) {
            return None;
        }

        let inner = self.lines()
            .iter()
            .filter(|line| line.bbox.contains(x, y))
            .flat_map(|line| line.children.iter())
            .find_map(|node| match node {
                LayoutNode::Expression(expression) => expression.expression_at(x, y),
                LayoutNode::Text(text) if text.bbox.contains(x, y) => text.expression,
                LayoutNode::Text(_) => None,
            });

        inner.or(self.expression)
    }

    /// The glyph whose ink box contains the point, if any
    pub fn glyph_at(&self, x : Unit<Em>, y : Unit<Em>) -> Option<PlacedGlyph> {
        self.glyphs()
            .into_iter()
            .find(|glyph| glyph.bbox.contains(x, y))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Sequence;
    use crate::font::{FaceMetrics, Metrics, ShapedGlyph, ShapedRun, Shaper};
    use crate::layout::LayoutSettings;
    use crate::layout::engine::layout;

    struct SquareShaper;

    impl Shaper for SquareShaper {
        fn shape(&self, text : &str, _ : &FaceMetrics) -> Vec<GlyphId> {
            text.chars().map(|c| GlyphId::from(c as u16)).collect()
        }

        fn layout_glyphs(&self, glyphs : &[GlyphId], _ : &FaceMetrics) -> ShapedRun {
            let mut run = ShapedRun::empty();
            for _ in glyphs {
                let x = run.advance;
                let bbox = BBox::new(x, Unit::ZERO, x + em(1.), em(1.));
                run.glyphs.push(ShapedGlyph { advance : em(1.), x, bbox : Some(bbox) });
                run.bbox = Some(run.bbox.map_or(bbox, |b| b.union(bbox)));
                run.advance += em(1.);
            }
            run
        }
    }

    fn em(v : f64) -> Unit<Em> { Unit::new(v) }

    fn metrics() -> Metrics {
        Metrics::uniform(FaceMetrics {
            units_per_em:         1000.,
            ascender:             1000.,
            descender:               0.,
            subscript_x_size:      500.,
            subscript_y_size:      500.,
            subscript_x_offset:      0.,
            subscript_y_offset:    250.,
            superscript_x_size:    500.,
            superscript_y_size:    500.,
            superscript_x_offset:    0.,
            superscript_y_offset:  500.,
            underline_position:   -100.,
            line_gap:                0.,
            style:                FontStyle::Regular,
        })
    }

    #[test]
    fn hit_testing_finds_innermost_expression() {
        let metrics = metrics();
        let expression : Expression = Sequence::new([Expression::text("ab"), Expression::text("c")]).into();
        let layout = layout(&expression, LayoutSettings::new(&metrics, &SquareShaper));

        let c = match &expression {
            Expression::Sequence(sequence) => &sequence.children[1],
            _ => unreachable!(),
        };
        assert_eq!(layout.expression_at(em(2.5), em(0.5)), Some(c));
        assert_eq!(layout.expression_at(em(3.5), em(0.5)), None);

        let glyph = layout.glyph_at(em(1.5), em(0.5)).unwrap();
        assert_eq!(u16::from(glyph.gid), 'b' as u16);
        assert_eq!(layout.glyphs().len(), 3);
    }
}
