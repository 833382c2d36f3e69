//! Converting [`Expression`]s to a tree of positioned boxes, ready to be rendered or queried.
//!
//! The tree has four levels which nest recursively:
//!
//!  - a [`Glyph`] is a leaf: one shaped glyph with its ink box and caret advance.
//!  - a [`TextLayout`] is a run of glyphs shaped in one face. It keeps the face's nominal ascender and descender
//!    rather than deriving them from the glyphs' ink.
//!  - a [`LineLayout`] is one visual row, whose children are texts and nested expressions.
//!  - an [`ExpressionLayout`] is made of one or more lines and points back to the expression it was laid out from.
//!
//! All coordinates are in em, absolute within the root of the tree, with y growing upwards and the
//! baseline of the first line of the root at y = 0.
//! [`Geometry::shift`] and [`Geometry::scale`] are affine and propagate to every descendant,
//! so that a sub-tree can be built at the origin and moved into place afterwards.
//!
//! Boxes of composites are derived from their children and must be recomputed
//! (cf [`Composite::update_min_max`]) after any structural change.

mod convert;
mod delimiters;
pub mod constants;
pub mod engine;
pub mod query;

use std::ops::Deref;

use crate::dimensions::Unit;
use crate::dimensions::units::Em;
use crate::expression::Expression;
use crate::font::{FaceMetrics, FontStyle, GlyphId, Metrics, Shaper};
use crate::geometry::BBox;


/// The shift and scale contract shared by every node of a layout tree.
pub trait Geometry {
    /// Whether the node carries an ascender and descender of its own,
    /// which composites containing it should aggregate.
    const HAS_VERTICAL_METRICS : bool;

    /// Translates the node and all its descendants.
    fn shift(&mut self, dx : Unit<Em>, dy : Unit<Em>);
    /// Scales the node and all its descendants about the origin, x-quantities by `kx` and y-quantities by `ky`.
    fn scale(&mut self, kx : f64, ky : f64);

    /// x-coordinate of the node's origin
    fn x(&self) -> Unit<Em>;
    /// Ink box
    fn bbox(&self) -> &BBox<Em>;
    /// Caret advance
    fn advance(&self) -> Unit<Em>;
    /// Top of the node, for the purpose of stacking
    fn ascender(&self) -> Unit<Em> {
        self.bbox().y_max
    }
    /// Bottom of the node, for the purpose of stacking
    fn descender(&self) -> Unit<Em> {
        self.bbox().y_min
    }
}


/// A single glyph, positioned within the run it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// glyph id, as returned by the shaper
    pub gid:     GlyphId,
    /// the face the glyph was shaped in
    pub style:   FontStyle,
    /// x-coordinate of the glyph's origin ; its y-coordinate is the baseline of the enclosing text
    pub x:       Unit<Em>,
    /// ink box ; a zero-height span of the advance for glyphs without ink
    pub bbox:    BBox<Em>,
    /// caret advance
    pub advance: Unit<Em>,
}

impl Geometry for Glyph {
    const HAS_VERTICAL_METRICS : bool = false;

    fn shift(&mut self, dx : Unit<Em>, dy : Unit<Em>) {
        self.x   += dx;
        self.bbox = self.bbox.translate(dx, dy);
    }

    fn scale(&mut self, kx : f64, ky : f64) {
        self.x       = self.x.scale(kx);
        self.bbox    = self.bbox.scale_xy(kx, ky);
        self.advance = self.advance.scale(kx);
    }

    fn x(&self)       -> Unit<Em>  { self.x }
    fn bbox(&self)    -> &BBox<Em> { &self.bbox }
    fn advance(&self) -> Unit<Em>  { self.advance }
}


/// A node aggregating children and deriving its ink box from theirs.
#[derive(Debug, Clone)]
pub struct Composite<'e, T> {
    /// x-coordinate of the origin
    pub x:          Unit<Em>,
    /// baseline
    pub y:          Unit<Em>,
    /// union of the children's ink boxes
    pub bbox:       BBox<Em>,
    /// caret advance ; maintained by whoever builds the composite, never derived from the children
    pub advance:    Unit<Em>,
    /// accumulated horizontal scale factor
    pub scale_x:    f64,
    /// accumulated vertical scale factor
    pub scale_y:    f64,
    /// highest ascender among the children, or the face's ascender for a text
    pub ascender:   Unit<Em>,
    /// lowest descender among the children, or the face's descender for a text
    pub descender:  Unit<Em>,
    /// the expression this node was laid out from, if any
    pub expression: Option<&'e Expression>,
    /// children, in drawing order
    pub children:   Vec<T>,
}

/// A run of glyphs shaped in a single face
pub type TextLayout<'e> = Composite<'e, Glyph>;
/// One visual row of an expression
pub type LineLayout<'e> = Composite<'e, LayoutNode<'e>>;

impl<'e, T> Composite<'e, T> {
    /// An empty composite collapsed on the point `(x, y)`
    pub fn new(x : Unit<Em>, y : Unit<Em>) -> Self {
        Self {
            x,
            y,
            bbox:       BBox::single_point(x, y),
            advance:    Unit::ZERO,
            scale_x:    1.,
            scale_y:    1.,
            ascender:   y,
            descender:  y,
            expression: None,
            children:   Vec::new(),
        }
    }

    /// Total height of the nominal box, i.e. `ascender - descender`
    pub fn nominal_height(&self) -> Unit<Em> {
        self.ascender - self.descender
    }
}

impl<'e, T : Geometry> Composite<'e, T> {
    /// Recomputes the ink box from the children ; the ascender and descender are aggregated too
    /// if the children carry them. A composite without children collapses on its origin.
    pub fn update_min_max(&mut self) {
        if self.children.is_empty() {
            self.bbox = BBox::single_point(self.x, self.y);
            if T::HAS_VERTICAL_METRICS {
                self.ascender  = self.y;
                self.descender = self.y;
            }
            return;
        }

        self.bbox = self.children
            .iter()
            .fold(BBox::empty(), |bbox, child| bbox.union(*child.bbox()));

        if T::HAS_VERTICAL_METRICS {
            self.ascender  = self.children.iter().map(T::ascender).fold(Unit::NEG_INFINITY, Unit::max);
            self.descender = self.children.iter().map(T::descender).fold(Unit::INFINITY, Unit::min);
        }
    }
}

impl<'e, T : Geometry> Geometry for Composite<'e, T> {
    const HAS_VERTICAL_METRICS : bool = true;

    fn shift(&mut self, dx : Unit<Em>, dy : Unit<Em>) {
        self.x         += dx;
        self.y         += dy;
        self.bbox       = self.bbox.translate(dx, dy);
        self.ascender  += dy;
        self.descender += dy;
        for child in self.children.iter_mut() {
            child.shift(dx, dy);
        }
    }

    fn scale(&mut self, kx : f64, ky : f64) {
        self.x         = self.x.scale(kx);
        self.y         = self.y.scale(ky);
        self.bbox      = self.bbox.scale_xy(kx, ky);
        self.advance   = self.advance.scale(kx);
        self.ascender  = self.ascender.scale(ky);
        self.descender = self.descender.scale(ky);
        self.scale_x  *= kx;
        self.scale_y  *= ky;
        for child in self.children.iter_mut() {
            child.scale(kx, ky);
        }
    }

    fn x(&self)         -> Unit<Em>  { self.x }
    fn bbox(&self)      -> &BBox<Em> { &self.bbox }
    fn advance(&self)   -> Unit<Em>  { self.advance }
    fn ascender(&self)  -> Unit<Em>  { self.ascender }
    fn descender(&self) -> Unit<Em>  { self.descender }
}

impl<'e> Composite<'e, LayoutNode<'e>> {
    /// Appends a node at the end of the line ; the caller is responsible for the advance and the boxes.
    pub fn push(&mut self, node : impl Into<LayoutNode<'e>>) {
        self.children.push(node.into());
    }
}


/// A child of a line
#[derive(Debug, Clone)]
pub enum LayoutNode<'e> {
    /// A run of glyphs
    Text(TextLayout<'e>),
    /// A nested expression
    Expression(ExpressionLayout<'e>),
}

impl<'e> LayoutNode<'e> {
    /// The node as a text, if it is one
    pub fn as_text(&self) -> Option<&TextLayout<'e>> {
        match self {
            LayoutNode::Text(text) => Some(text),
            LayoutNode::Expression(_) => None,
        }
    }

    /// The node as an expression, if it is one
    pub fn as_expression(&self) -> Option<&ExpressionLayout<'e>> {
        match self {
            LayoutNode::Text(_) => None,
            LayoutNode::Expression(expression) => Some(expression),
        }
    }

    /// The expression the node was laid out from, if any
    pub fn expression(&self) -> Option<&'e Expression> {
        match self {
            LayoutNode::Text(text) => text.expression,
            LayoutNode::Expression(expression) => expression.expression,
        }
    }

    /// Baseline of the node
    pub fn y(&self) -> Unit<Em> {
        match self {
            LayoutNode::Text(text) => text.y,
            LayoutNode::Expression(expression) => expression.y,
        }
    }
}

impl<'e> From<TextLayout<'e>> for LayoutNode<'e> {
    fn from(text : TextLayout<'e>) -> Self {
        LayoutNode::Text(text)
    }
}

impl<'e> From<ExpressionLayout<'e>> for LayoutNode<'e> {
    fn from(expression : ExpressionLayout<'e>) -> Self {
        LayoutNode::Expression(expression)
    }
}

impl<'e> Geometry for LayoutNode<'e> {
    const HAS_VERTICAL_METRICS : bool = true;

    fn shift(&mut self, dx : Unit<Em>, dy : Unit<Em>) {
        match self {
            LayoutNode::Text(text) => text.shift(dx, dy),
            LayoutNode::Expression(expression) => expression.shift(dx, dy),
        }
    }

    fn scale(&mut self, kx : f64, ky : f64) {
        match self {
            LayoutNode::Text(text) => text.scale(kx, ky),
            LayoutNode::Expression(expression) => expression.scale(kx, ky),
        }
    }

    fn x(&self) -> Unit<Em> {
        match self {
            LayoutNode::Text(text) => text.x,
            LayoutNode::Expression(expression) => expression.x,
        }
    }

    fn bbox(&self) -> &BBox<Em> {
        match self {
            LayoutNode::Text(text) => &text.bbox,
            LayoutNode::Expression(expression) => &expression.bbox,
        }
    }

    fn advance(&self) -> Unit<Em> {
        match self {
            LayoutNode::Text(text) => text.advance,
            LayoutNode::Expression(expression) => expression.advance,
        }
    }

    fn ascender(&self) -> Unit<Em> {
        match self {
            LayoutNode::Text(text) => text.ascender,
            LayoutNode::Expression(expression) => expression.ascender,
        }
    }

    fn descender(&self) -> Unit<Em> {
        match self {
            LayoutNode::Text(text) => text.descender,
            LayoutNode::Expression(expression) => expression.descender,
        }
    }
}


/// How an [`ExpressionLayout`] relates to its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// The lines are the expression's own: its box is their union.
    Owned,
    /// The expression stands for its single line, one of the lines of a multi-line layout
    /// placed into a line of its parent. All its fields mirror that line's.
    Aliased,
}

/// Position of a node within an [`ExpressionLayout`]: the index of a line and of a child within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRef {
    /// index of the line
    pub line:  usize,
    /// index of the child within the line
    pub child: usize,
}

/// What kind of expression a layout stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Any expression but a placeholder
    Expression,
    /// An editable slot ; remembers where its delimiters were spliced in
    Placeholder {
        /// the left delimiter, if one was requested
        left:  Option<ChildRef>,
        /// the right delimiter, if one was requested
        right: Option<ChildRef>,
    },
}


/// The layout of an [`Expression`]: one or more lines.
///
/// Fields of the underlying [`Composite`] are readable through `Deref`.
#[derive(Debug, Clone)]
pub struct ExpressionLayout<'e> {
    composite:     Composite<'e, LineLayout<'e>>,
    y_advance:     Unit<Em>,
    x_advance_max: Unit<Em>,
    mode:          LineMode,
    kind:          LayoutKind,
}

impl<'e> Deref for ExpressionLayout<'e> {
    type Target = Composite<'e, LineLayout<'e>>;
    fn deref(&self) -> &Self::Target {
        &self.composite
    }
}

impl<'e> ExpressionLayout<'e> {
    /// An expression owning `lines`, with its origin at (0, 0) and the given advances.
    /// Boxes are computed from the lines.
    pub(crate) fn new(expression : &'e Expression, lines : Vec<LineLayout<'e>>, advance : Unit<Em>, y_advance : Unit<Em>) -> Self {
        let mut composite = Composite::new(Unit::ZERO, Unit::ZERO);
        composite.expression = Some(expression);
        composite.children   = lines;
        composite.advance    = advance;

        let mut result = Self {
            composite,
            y_advance,
            x_advance_max: Unit::ZERO,
            mode:          LineMode::Owned,
            kind:          LayoutKind::Expression,
        };
        result.update_min_max();
        result
    }

    /// An expression standing for `line` alone
    fn aliased(
        expression : Option<&'e Expression>,
        kind       : LayoutKind,
        scale      : (f64, f64),
        line       : LineLayout<'e>,
    ) -> Self {
        let mut composite = Composite::new(line.x, line.y);
        composite.expression = expression;
        composite.scale_x    = scale.0;
        composite.scale_y    = scale.1;
        composite.children   = vec![line];

        let mut result = Self {
            composite,
            y_advance:     Unit::ZERO,
            x_advance_max: Unit::ZERO,
            mode:          LineMode::Aliased,
            kind,
        };
        result.mirror_line();
        result
    }

    /// The lines of the expression, top to bottom
    pub fn lines(&self) -> &[LineLayout<'e>] {
        &self.composite.children
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<LineLayout<'e>> {
        &mut self.composite.children
    }

    pub(crate) fn add_advance(&mut self, dx : Unit<Em>, dy : Unit<Em>) {
        self.composite.advance += dx;
        self.y_advance         += dy;
    }

    /// Moves the origin without moving any line.
    pub(crate) fn set_x(&mut self, x : Unit<Em>) {
        self.composite.x = x;
    }

    pub(crate) fn set_expression(&mut self, expression : &'e Expression) {
        self.composite.expression = Some(expression);
    }

    pub(crate) fn set_kind(&mut self, kind : LayoutKind) {
        self.kind = kind;
    }

    /// Vertical distance from the baseline of the first line to where the next sibling continues
    pub fn y_advance(&self) -> Unit<Em> {
        self.y_advance
    }

    /// Widest advance among the lines
    pub fn x_advance_max(&self) -> Unit<Em> {
        self.x_advance_max
    }

    /// Whether the expression owns its lines or stands for one line of a multi-line layout
    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Whether the expression stands for one line of a multi-line layout
    pub fn is_aliased(&self) -> bool {
        self.mode == LineMode::Aliased
    }

    /// Plain expression or placeholder
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// Whether the layout stands for a placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, LayoutKind::Placeholder { .. })
    }

    fn child_at(&self, child_ref : ChildRef) -> Option<&TextLayout<'e>> {
        self.lines()
            .get(child_ref.line)?
            .children
            .get(child_ref.child)?
            .as_text()
    }

    /// The left delimiter spliced into a placeholder
    pub fn delimiter_left(&self) -> Option<&TextLayout<'e>> {
        match self.kind {
            LayoutKind::Placeholder { left : Some(child_ref), .. } => self.child_at(child_ref),
            _ => None,
        }
    }

    /// The right delimiter spliced into a placeholder
    pub fn delimiter_right(&self) -> Option<&TextLayout<'e>> {
        match self.kind {
            LayoutKind::Placeholder { right : Some(child_ref), .. } => self.child_at(child_ref),
            _ => None,
        }
    }

    /// Recomputes boxes from the lines ; an aliased expression copies its line's fields instead.
    pub fn update_min_max(&mut self) {
        match self.mode {
            LineMode::Owned => {
                self.composite.update_min_max();
                self.x_advance_max = self.lines()
                    .iter()
                    .map(|line| line.advance)
                    .fold(Unit::NEG_INFINITY, Unit::max);
            },
            LineMode::Aliased => self.mirror_line(),
        }
    }

    fn mirror_line(&mut self) {
        let composite = &mut self.composite;
        if let Some(line) = composite.children.first() {
            composite.x         = line.x;
            composite.y         = line.y;
            composite.bbox      = line.bbox;
            composite.advance   = line.advance;
            composite.ascender  = line.ascender;
            composite.descender = line.descender;
        }
        self.y_advance     = Unit::ZERO;
        self.x_advance_max = composite.advance;
    }

    /// Makes the expression stand for its line `index` alone ; the other lines are dropped.
    /// Returns `None` if there is no such line.
    pub fn alias_line(self, index : usize) -> Option<Self> {
        self.split_lines().into_iter().nth(index)
    }

    /// Splits a layout into one aliased layout per line, so that the lines can be placed
    /// into different lines of a parent.
    /// The delimiters of a placeholder follow the line they were spliced into.
    pub fn split_lines(self) -> Vec<Self> {
        let Self { composite, kind, .. } = self;
        let Composite { expression, scale_x, scale_y, children : lines, .. } = composite;

        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let kind = match kind {
                    LayoutKind::Expression => LayoutKind::Expression,
                    LayoutKind::Placeholder { left, right } => {
                        let follow = |child_ref : Option<ChildRef>| {
                            child_ref
                                .filter(|child_ref| child_ref.line == index)
                                .map(|child_ref| ChildRef { line : 0, ..child_ref })
                        };
                        LayoutKind::Placeholder { left : follow(left), right : follow(right) }
                    },
                };
                Self::aliased(expression, kind, (scale_x, scale_y), line)
            })
            .collect()
    }
}

impl<'e> Geometry for ExpressionLayout<'e> {
    const HAS_VERTICAL_METRICS : bool = true;

    fn shift(&mut self, dx : Unit<Em>, dy : Unit<Em>) {
        match self.mode {
            LineMode::Owned => self.composite.shift(dx, dy),
            LineMode::Aliased => {
                for line in self.composite.children.iter_mut() {
                    line.shift(dx, dy);
                    line.update_min_max();
                }
                self.mirror_line();
            },
        }
    }

    fn scale(&mut self, kx : f64, ky : f64) {
        match self.mode {
            LineMode::Owned => {
                self.composite.scale(kx, ky);
                self.y_advance     = self.y_advance.scale(ky);
                self.x_advance_max = self.x_advance_max.scale(kx);
            },
            LineMode::Aliased => {
                for line in self.composite.children.iter_mut() {
                    line.scale(kx, ky);
                    line.update_min_max();
                }
                self.composite.scale_x *= kx;
                self.composite.scale_y *= ky;
                self.mirror_line();
            },
        }
    }

    fn x(&self)         -> Unit<Em>  { self.composite.x }
    fn bbox(&self)      -> &BBox<Em> { &self.composite.bbox }
    fn advance(&self)   -> Unit<Em>  { self.composite.advance }
    fn ascender(&self)  -> Unit<Em>  { self.composite.ascender }
    fn descender(&self) -> Unit<Em>  { self.composite.descender }
}


/// Everything the layout algorithms need from the outside world: the metrics of the four faces and a shaper.
pub struct LayoutSettings<'a, S : ?Sized> {
    /// Metrics of the regular, bold, italic and bold italic faces
    pub metrics : &'a Metrics,
    /// Converts strings into measured glyphs
    pub shaper :  &'a S,
}

impl<'a, S : ?Sized> Clone for LayoutSettings<'a, S> {
    fn clone(&self) -> Self {
        Self {
            metrics : self.metrics,
            shaper :  self.shaper,
        }
    }
}
impl<'a, S : ?Sized> Copy for LayoutSettings<'a, S> {}

impl<'a, S : ?Sized + Shaper> LayoutSettings<'a, S> {
    /// Creates new settings
    pub fn new(metrics : &'a Metrics, shaper : &'a S) -> Self {
        Self { metrics, shaper }
    }

    /// The face used for delimiters, rules, radicals and spacing
    pub fn regular(&self) -> &'a FaceMetrics {
        &self.metrics.regular
    }

    /// The face of the given style
    pub fn face(&self, style : FontStyle) -> &'a FaceMetrics {
        self.metrics.face(style)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn em(v : f64) -> Unit<Em> { Unit::new(v) }

    fn glyph(x : f64, advance : f64) -> Glyph {
        Glyph {
            gid:     GlyphId::from(1),
            style:   FontStyle::Regular,
            x:       em(x),
            bbox:    BBox::new(em(x + 0.125), em(-0.125), em(x + advance - 0.125), em(0.5)),
            advance: em(advance),
        }
    }

    fn text(x : f64) -> TextLayout<'static> {
        let mut text : TextLayout = Composite::new(Unit::ZERO, Unit::ZERO);
        text.children  = vec![glyph(0., 0.5), glyph(0.5, 0.5)];
        text.advance   = em(1.);
        text.ascender  = em(0.75);
        text.descender = em(-0.25);
        text.update_min_max();
        text.shift(em(x), Unit::ZERO);
        text
    }

    fn line(texts : &[f64]) -> LineLayout<'static> {
        let mut line : LineLayout = Composite::new(Unit::ZERO, Unit::ZERO);
        for &x in texts {
            line.push(text(x));
            line.advance += em(1.);
        }
        line.update_min_max();
        line
    }

    fn two_lines() -> ExpressionLayout<'static> {
        let expression = Box::leak(Box::new(Expression::text("x")));
        let mut second = line(&[0., 1.]);
        second.shift(Unit::ZERO, em(-1.5));
        second.update_min_max();
        ExpressionLayout::new(expression, vec![line(&[0.]), second], em(2.), em(-1.5))
    }

    #[test]
    fn text_keeps_nominal_metrics() {
        let text = text(0.);
        assert_eq!(text.ascender, em(0.75));
        assert_eq!(text.descender, em(-0.25));
        assert_eq!(text.bbox, BBox::new(em(0.125), em(-0.125), em(0.875), em(0.5)));
    }

    #[test]
    fn line_aggregates_vertical_metrics() {
        let line = line(&[0., 1.]);
        assert_eq!(line.ascender, em(0.75));
        assert_eq!(line.descender, em(-0.25));
        assert_eq!(line.bbox.x_max, em(1.875));
    }

    #[test]
    fn empty_composite_collapses_on_origin() {
        let mut line : LineLayout = Composite::new(em(1.), em(2.));
        line.update_min_max();
        assert_eq!(line.bbox, BBox::single_point(em(1.), em(2.)));
        assert_eq!(line.ascender, em(2.));
    }

    #[test]
    fn shift_propagates_to_glyphs() {
        let mut line = line(&[0.]);
        line.shift(em(1.), em(2.));
        let text = line.children[0].as_text().unwrap();
        assert_eq!(text.children[0].x, em(1.));
        assert_eq!(text.children[0].bbox.y_max, em(2.5));
        assert_eq!(text.y, em(2.));
    }

    #[test]
    fn scale_is_about_origin() {
        let mut text = text(1.);
        text.scale(2., 0.5);
        assert_eq!(text.x, em(2.));
        assert_eq!(text.advance, em(2.));
        assert_eq!(text.ascender, em(0.375));
        assert_eq!((text.scale_x, text.scale_y), (2., 0.5));
        assert_eq!(text.children[1].x, em(3.));
    }

    #[test]
    fn owned_expression_tracks_widest_line() {
        let expression = two_lines();
        assert_eq!(expression.lines().len(), 2);
        assert_eq!(expression.x_advance_max(), em(2.));
        assert_eq!(expression.descender, em(-1.75));
        assert_eq!(expression.mode(), LineMode::Owned);
    }

    #[test]
    fn split_views_mirror_their_line() {
        let views = two_lines().split_lines();
        assert_eq!(views.len(), 2);
        let mut second = views.into_iter().nth(1).unwrap();
        assert!(second.is_aliased());
        assert_eq!(second.y, em(-1.5));
        assert_eq!(second.y_advance(), Unit::ZERO);

        second.shift(em(3.), em(1.));
        second.scale(2., 2.);
        let line = &second.lines()[0];
        assert_eq!(second.x, line.x);
        assert_eq!(second.y, line.y);
        assert_eq!(second.bbox, line.bbox);
        assert_eq!(second.advance, line.advance);
        assert_eq!(second.ascender, line.ascender);
        assert_eq!(second.x_advance_max(), line.advance);
        assert_eq!(second.scale_x, 2.);
    }

    #[test]
    fn alias_line_out_of_range() {
        assert!(two_lines().alias_line(2).is_none());
        assert!(two_lines().alias_line(1).is_some());
    }
}
