/*! # A font-unit layout engine for mathematical expressions.

This library takes a tree of mathematical expressions (text runs, scripts, stacks, radicals, grids, multi-line blocks, ...)
as built by an editor, and computes where every glyph goes. The result is a tree of positioned boxes (glyphs, runs of glyphs, lines and
expressions) which can be painted or queried, e.g. to find the expression under the mouse pointer.

All measurements are in em, normalized from the design units of the font. The library neither parses fonts nor paints anything:
it only needs the metrics of four faces (regular, bold, italic, bold italic) and something that can shape strings,
i.e. an implementation of [`Shaper`](crate::font::Shaper).

## Basic usage

```
use mathshape::dimensions::Unit;
use mathshape::expression::{Expression, Script};
use mathshape::font::{FaceMetrics, GlyphId, Metrics, ShapedGlyph, ShapedRun, Shaper};

// A shaper placing every character in a 0.5em wide cell, without ink.
struct Monospace;

impl Shaper for Monospace {
    fn shape(&self, text: &str, _: &FaceMetrics) -> Vec<GlyphId> {
        text.chars().map(|c| GlyphId::from(c as u16)).collect()
    }

    fn layout_glyphs(&self, glyphs: &[GlyphId], _: &FaceMetrics) -> ShapedRun {
        let mut run = ShapedRun::empty();
        for _ in glyphs {
            run.glyphs.push(ShapedGlyph { advance: Unit::new(0.5), x: run.advance, bbox: None });
            run.advance += Unit::new(0.5);
        }
        run
    }
}

let face : FaceMetrics = serde_json::from_str(r#"{
    "unitsPerEm": 1000, "ascender": 800, "descender": -200,
    "subscriptXSize": 650, "subscriptYSize": 600, "subscriptXOffset": 0, "subscriptYOffset": 75,
    "superscriptXSize": 650, "superscriptYSize": 600, "superscriptXOffset": 0, "superscriptYOffset": 350,
    "underlinePosition": -100, "lineGap": 90
}"#).unwrap();
let metrics = Metrics::uniform(face);

let expression : Expression = Script::new(Expression::text("x")).top_right(Expression::text("2")).scaled(true).into();
let layout = mathshape::layout(&expression, &metrics, &Monospace);

assert_eq!(layout.lines().len(), 1);
assert_eq!(layout.glyphs().len(), 2);
```

With the `ttfparser-shaper` feature, [`TtfShaper`](crate::font::backend::ttf_parser::TtfShaper) shapes strings
with the glyphs of a font file and extracts the face metrics from it.

## More control

[`layout()`] is a thin wrapper around [`engine::layout`](crate::layout::engine::layout) with some [`LayoutSettings`](crate::layout::LayoutSettings).
The [`ExpressionLayout`](crate::layout::ExpressionLayout) it returns can be:

  1. drawn on a graphical backend, by implementing [`Backend`](crate::render::Backend) and calling [`Renderer::render`](crate::render::Renderer::render).
  2. flattened into positioned glyphs, cf [`ExpressionLayout::glyphs`](crate::layout::ExpressionLayout::glyphs).
  3. hit-tested, cf [`ExpressionLayout::expression_at`](crate::layout::ExpressionLayout::expression_at).

Laying out is total: malformed trees (e.g. ragged grids) are rejected when they are built (cf [`error`]),
and characters the shaper cannot resolve simply yield empty runs.
*/

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

#[deny(missing_docs)]
pub mod error;
#[deny(missing_docs)]
pub mod dimensions;
#[deny(missing_docs)]
pub mod geometry;
pub mod expression;
#[deny(missing_docs)]
pub mod layout;
#[deny(missing_docs)]
pub mod render;

pub mod font;

use expression::Expression;
use font::{Metrics, Shaper};
use layout::{ExpressionLayout, LayoutSettings};
pub use render::*;


/// Lays out `expression`, given the metrics of the four faces and a shaper.
pub fn layout<'e, S : Shaper + ?Sized>(expression : &'e Expression, metrics : &Metrics, shaper : &S) -> ExpressionLayout<'e> {
    let settings = LayoutSettings::new(metrics, shaper);
    crate::layout::engine::layout(expression, settings)
}

/// Lays out `expression` and renders it to a given surface `backend`, the baseline of its first line at (0, 0),
/// with a font size of [`Renderer::DEFAULT_FONT_SIZE`] surface units per em.
pub fn render<S : Shaper + ?Sized, B : Backend>(expression : &Expression, metrics : &Metrics, shaper : &S, backend : &mut B) {
    let layout = layout(expression, metrics, shaper);
    let renderer = Renderer::new();
    renderer.render(&layout, backend);
}
