//! Draw a layout tree (as defined in the `layout` module) onto a `Backend`, such as a screen, a PNG image, etc.
//!
//! To do this, a `Renderer` must first be created using the `Renderer::new` function
//! and then `Renderer::render` must be called on the `ExpressionLayout` and the desired `Backend`.
//!
//! ## Backends
//!
//! The `Backend` trait represents all graphical operations that are needed to render a formula:
//!
//!   - drawing a glyph of a given face, possibly stretched: `Backend::symbol`. Rules, radical strokes and
//!     delimiters are all glyphs, so this is the only thing a backend must know how to do.
//!   - drawing a debug rectangle: `Backend::bbox` (optional)
//!
//! ## Caveat on coordinate systems
//!
//! Layouts are expressed in em with y growing upwards. The renderer converts them to pixels, with the top oriented along -Y.
//! So in particular, the Y coordinate of the position of a superscript is less than the Y coordinate of its base.
//! Glyph outlines in font files are often given with the opposite convention: the top of the glyph has the highest Y coordinate.
//! Some adjustment needs to be made when implementing [`Backend::symbol`].

use crate::dimensions::Unit;
use crate::dimensions::units::{Em, FontSize, Px};
use crate::font::{FontStyle, GlyphId};
use crate::geometry::BBox;
use crate::layout::{ExpressionLayout, LayoutNode, LineLayout, TextLayout};

/// Context used for rendering.
pub struct Renderer {
    /// When set to true, the renderer additionally calls [`Backend::bbox`] to draw boxes
    /// around every glyph, text, line and expression of the layout.
    pub debug: bool,
    /// Pixels per em
    pub font_size: Unit<FontSize>,
}

/// Position of the cursor in space. The unit used in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cursor {
    /// x-coordinate
    pub x: f64,
    /// y-coordinate (NB: `cursor1.y` < `cursor2.y`  means `cursor1` is above `cursor2` on the screen)
    pub y: f64,
}

impl Cursor {
    /// Adds `dx` and `dy` to the x- and y- coordinates resp. of the cursor
    pub fn translate(self, dx: f64, dy: f64) -> Cursor {
        Cursor {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Something glyphs can be drawn on.
pub trait Backend {
    /// Draws glyph with id `gid` from the face `style`, with its origin at `pos`.
    /// The glyph's outline, in em, is to be multiplied by `scale_x` horizontally and `scale_y` vertically (both in pixels per em).
    ///
    /// **NB:** fonts typically provide the outline with positive Y values representing points above the baseline.
    /// The renderer works with the opposite convention so drawing a symbol involves a step of transformation, namely flipping the Y-axis.
    fn symbol(&mut self, pos: Cursor, gid: GlyphId, style: FontStyle, scale_x: f64, scale_y: f64);

    /// Only called by [`Renderer`] when [`Renderer::debug`] is true (debug mode).
    /// Draws a rectangle whose top-left corner is at `_pos` with the dimensions specified by `_width` and `_height`
    /// The parameter `_role` specifies the type of objects that the rectangle encloses.
    /// One can use this parameter to style the rectangles differently, e.g. red for glyph bounding boxes, green for lines, etc.
    fn bbox(&mut self, _pos: Cursor, _width: f64, _height: f64, _role: Role) {}
}

/// The type of things enclosed by a debug rectangle (cf [`Renderer::debug`] for debug mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// glyph
    Glyph,
    /// run of glyphs
    Text,
    /// line
    Line,
    /// expression
    Expression,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Pixels per em used by [`Renderer::new`]
    pub const DEFAULT_FONT_SIZE : f64 = 16.;

    /// Creates new renderer.
    pub fn new() -> Self {
        Renderer {
            debug: false,
            font_size: Unit::new(Self::DEFAULT_FONT_SIZE),
        }
    }

    /// Same renderer, drawing `font_size` pixels per em
    pub fn with_font_size(self, font_size: f64) -> Self {
        Renderer {
            font_size: Unit::new(font_size),
            ..self
        }
    }

    fn px(&self, length: Unit<Em>) -> f64 {
        (length * self.font_size).unitless(Px)
    }

    fn cursor(&self, x: Unit<Em>, y: Unit<Em>) -> Cursor {
        Cursor {
            x:   self.px(x),
            y: - self.px(y),
        }
    }

    fn debug_box(&self, out: &mut impl Backend, bbox: &BBox<Em>, role: Role) {
        if self.debug && !bbox.is_empty() {
            out.bbox(self.cursor(bbox.x_min, bbox.y_max), self.px(bbox.width()), self.px(bbox.total_height()), role);
        }
    }

    /// Renders the given layout onto `out`, the provided backend.
    /// The origin of the layout, i.e. the baseline of its first line, is drawn at `(0, 0)`.
    pub fn render(&self, layout: &ExpressionLayout, out: &mut impl Backend) {
        self.render_expression(out, layout);
    }

    /// Same as [`Renderer::render`], with the origin of the layout drawn at `origin`.
    pub fn render_at(&self, layout: &ExpressionLayout, origin: Cursor, out: &mut impl Backend) {
        let mut out = Translated { inner: out, origin };
        self.render_expression(&mut out, layout);
    }

    fn render_expression(&self, out: &mut impl Backend, expression: &ExpressionLayout) {
        self.debug_box(out, &expression.bbox, Role::Expression);
        for line in expression.lines() {
            self.render_line(out, line);
        }
    }

    fn render_line(&self, out: &mut impl Backend, line: &LineLayout) {
        self.debug_box(out, &line.bbox, Role::Line);
        for node in line.children.iter() {
            match node {
                LayoutNode::Text(text) => self.render_text(out, text),
                LayoutNode::Expression(expression) => self.render_expression(out, expression),
            }
        }
    }

    fn render_text(&self, out: &mut impl Backend, text: &TextLayout) {
        self.debug_box(out, &text.bbox, Role::Text);
        let scale_x = self.px(Unit::new(text.scale_x));
        let scale_y = self.px(Unit::new(text.scale_y));
        for glyph in text.children.iter() {
            self.debug_box(out, &glyph.bbox, Role::Glyph);
            out.symbol(self.cursor(glyph.x, text.y), glyph.gid, glyph.style, scale_x, scale_y);
        }
    }
}

/// Offsets everything drawn on `inner` by `origin`
struct Translated<'a, B> {
    inner:  &'a mut B,
    origin: Cursor,
}

impl<'a, B : Backend> Backend for Translated<'a, B> {
    fn symbol(&mut self, pos: Cursor, gid: GlyphId, style: FontStyle, scale_x: f64, scale_y: f64) {
        self.inner.symbol(pos.translate(self.origin.x, self.origin.y), gid, style, scale_x, scale_y)
    }

    fn bbox(&mut self, pos: Cursor, width: f64, height: f64, role: Role) {
        self.inner.bbox(pos.translate(self.origin.x, self.origin.y), width, height, role)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{Expression, Script};
    use crate::font::{FaceMetrics, Metrics, ShapedGlyph, ShapedRun, Shaper};
    use crate::layout::LayoutSettings;
    use crate::layout::engine::layout;

    struct MonoShaper;

    impl Shaper for MonoShaper {
        fn shape(&self, text: &str, _: &FaceMetrics) -> Vec<GlyphId> {
            text.chars().map(|c| GlyphId::from(c as u16)).collect()
        }

        fn layout_glyphs(&self, glyphs: &[GlyphId], _: &FaceMetrics) -> ShapedRun {
            let mut run = ShapedRun::empty();
            for _ in glyphs {
                let x = run.advance;
                let bbox = BBox::new(x, Unit::ZERO, x + Unit::new(0.5), Unit::new(0.5));
                run.glyphs.push(ShapedGlyph { advance: Unit::new(0.5), x, bbox: Some(bbox) });
                run.bbox = Some(run.bbox.map_or(bbox, |b| b.union(bbox)));
                run.advance += Unit::new(0.5);
            }
            run
        }
    }

    #[derive(Default)]
    struct Recorder {
        symbols: Vec<(Cursor, u16, f64, f64)>,
        boxes:   Vec<Role>,
    }

    impl Backend for Recorder {
        fn symbol(&mut self, pos: Cursor, gid: GlyphId, _: FontStyle, scale_x: f64, scale_y: f64) {
            self.symbols.push((pos, gid.into(), scale_x, scale_y));
        }

        fn bbox(&mut self, _: Cursor, _: f64, _: f64, role: Role) {
            self.boxes.push(role);
        }
    }

    fn metrics() -> Metrics {
        Metrics::uniform(FaceMetrics {
            units_per_em:         1000.,
            ascender:              750.,
            descender:            -250.,
            subscript_x_size:      500.,
            subscript_y_size:      500.,
            subscript_x_offset:      0.,
            subscript_y_offset:    125.,
            superscript_x_size:    500.,
            superscript_y_size:    500.,
            superscript_x_offset:    0.,
            superscript_y_offset:  250.,
            underline_position:   -125.,
            line_gap:                0.,
            style:                FontStyle::Regular,
        })
    }

    #[test]
    fn draws_every_glyph_with_y_flipped() {
        let metrics = metrics();
        let expression : Expression = Script::new(Expression::text("x"))
            .top_right(Expression::text("2"))
            .scaled(true)
            .into();
        let layout = layout(&expression, LayoutSettings::new(&metrics, &MonoShaper));

        let mut out = Recorder::default();
        Renderer::new().with_font_size(10.).render(&layout, &mut out);

        assert_eq!(out.symbols.len(), 2);
        let (base, superscript) = (out.symbols[0], out.symbols[1]);
        assert_eq!(base.1, 'x' as u16);
        assert_eq!((base.2, base.3), (10., 10.));
        assert_eq!(superscript.1, '2' as u16);
        assert_eq!((superscript.2, superscript.3), (5., 5.));
        assert!(superscript.0.y < base.0.y);
        assert!(out.boxes.is_empty());
    }

    #[test]
    fn debug_mode_draws_boxes() {
        let metrics = metrics();
        let expression = Expression::text("ab");
        let layout = layout(&expression, LayoutSettings::new(&metrics, &MonoShaper));

        let mut out = Recorder::default();
        let renderer = Renderer { debug: true, ..Renderer::new() };
        renderer.render_at(&layout, Cursor { x: 5., y: 5. }, &mut out);

        assert_eq!(out.boxes, vec![Role::Expression, Role::Line, Role::Text, Role::Glyph, Role::Glyph]);
        assert_eq!(out.symbols[1].0, Cursor { x: 5. + 8., y: 5. });
    }
}
