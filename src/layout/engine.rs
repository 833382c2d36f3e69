//! This module defines the layout functions that place expressions in space, given the metrics of the faces and a shaper.
//! The most important function here is [`layout`](crate::layout::engine::layout).
//! Given an [`Expression`] and some [`LayoutSettings`],
//! this function returns an [`ExpressionLayout`] which can then be sent to the renderer (cf [`render`](crate::render))
//! or queried (cf [`query`](crate::layout::query)).
//!
//! Every kind of expression lays out its children at the origin, then shifts and scales them into place,
//! and finally attaches its delimiters.

use crate::dimensions::Unit;
use crate::dimensions::units::Em;
use crate::expression::{Expression, Grid, Multiline, Placeholder, Root, Script, Sequence, Space, Stack, Text};
use crate::font::{FaceMetrics, FontStyle, ScriptPosition, Shaper};

use super::constants::{BIG_SCALE, HORIZONTAL_RULE, MAX_SCRIPT_RATIO, RADICAL, SPACE, VERTICAL_RULE};
use super::{ChildRef, Composite, ExpressionLayout, Geometry, LayoutKind, LayoutNode, LayoutSettings, LineLayout, TextLayout};


/// Entry point to our recursive algorithm
pub fn layout<'e, S : Shaper + ?Sized>(expression : &'e Expression, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let result = match expression {
        Expression::Sequence(sequence)       => layout_sequence(expression, sequence, settings),
        Expression::Text(text)               => layout_text(expression, text, settings),
        Expression::Space(space)             => layout_space(expression, space, settings),
        Expression::Script(script)           => layout_script(expression, script, settings),
        Expression::Stack(stack)             => layout_stack(expression, stack, settings),
        Expression::Root(root)               => layout_root(expression, root, settings),
        Expression::Grid(grid)               => layout_grid(expression, grid, settings),
        Expression::Multiline(multiline)     => layout_multiline(expression, multiline, settings),
        Expression::Placeholder(placeholder) => layout_placeholder(expression, placeholder, settings),
    };

    trace!(
        "{}: {} line(s), advance {}, ascender {}, descender {}",
        expression.kind(), result.lines().len(), result.advance, result.ascender, result.descender,
    );
    result
}

/// A line at the origin holding `children`
fn line_of<'e>(children : Vec<LayoutNode<'e>>, advance : Unit<Em>) -> LineLayout<'e> {
    let mut line : LineLayout<'e> = Composite::new(Unit::ZERO, Unit::ZERO);
    line.children = children;
    line.advance  = advance;
    line.update_min_max();
    line
}

/// Size of a script relative to its base, per axis.
fn script_ratio(face : &FaceMetrics, position : ScriptPosition) -> (f64, f64) {
    let shrink = |ratio : f64| if ratio > 0. { ratio.min(MAX_SCRIPT_RATIO) } else { MAX_SCRIPT_RATIO };
    let (x, y) = face.script_size_ratio(position);
    (shrink(x), shrink(y))
}

/// How far `value` extends relative to the face's nominal `extent`
fn proportion(value : Unit<Em>, extent : Unit<Em>) -> f64 {
    if extent.is_zero() { 1. } else { value.ratio(extent) }
}


fn layout_sequence<'e, S : Shaper + ?Sized>(expression : &'e Expression, sequence : &'e Sequence, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let mut lines     = Vec::new();
    let mut line : LineLayout<'e> = Composite::new(Unit::ZERO, Unit::ZERO);
    let mut advance   = Unit::ZERO;
    let mut y_advance = Unit::ZERO;

    for child in sequence.children.iter() {
        let mut child = layout(child, settings);
        child.shift(advance, y_advance);
        advance   += child.advance;
        y_advance += child.y_advance();

        if child.lines().len() > 1 {
            // the first line of the child continues the current line, the others open new lines
            let mut views = child.split_lines().into_iter();
            if let Some(view) = views.next() {
                line.advance += view.advance;
                line.push(view);
            }
            for view in views {
                line.update_min_max();
                let mut next : LineLayout<'e> = Composite::new(view.x, view.y);
                next.advance = view.advance;
                next.push(view);
                lines.push(std::mem::replace(&mut line, next));
            }
        }
        else {
            line.advance += child.advance;
            line.push(child);
        }
    }
    line.update_min_max();
    lines.push(line);

    let mut result = ExpressionLayout::new(expression, lines, advance, y_advance);
    result.add_delimiters(&sequence.delimiters, settings);
    result
}


fn layout_text<'e, S : Shaper + ?Sized>(expression : &'e Expression, text : &'e Text, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let face = settings.face(FontStyle::from_flags(text.bold, text.italic));
    let mut run = TextLayout::from_string(&text.value, face, settings.shaper);
    if text.big {
        run.scale(BIG_SCALE, BIG_SCALE);
    }
    run.expression = Some(expression);

    let advance = run.advance;
    let mut result = ExpressionLayout::new(expression, vec![line_of(vec![run.into()], advance)], advance, Unit::ZERO);
    result.add_delimiters(&text.delimiters, settings);
    result
}


fn layout_space<'e, S : Shaper + ?Sized>(expression : &'e Expression, space : &'e Space, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let mut run = TextLayout::from_string(SPACE, settings.regular(), settings.shaper);
    run.expression = Some(expression);

    let advance = run.advance;
    let mut result = ExpressionLayout::new(expression, vec![line_of(vec![run.into()], advance)], advance, Unit::ZERO);
    result.add_delimiters(&space.delimiters, settings);
    if space.size != 1. {
        result.scale(space.size, 1.);
    }
    result
}


/// Raises `top` and lowers `bottom` by half their overlap, if they overlap.
fn separate_scripts(
    top       : Option<&ExpressionLayout>,
    bottom    : Option<&ExpressionLayout>,
    dy_top    : Unit<Em>,
    dy_bottom : Unit<Em>,
) -> (Unit<Em>, Unit<Em>) {
    if let (Some(top), Some(bottom)) = (top, bottom) {
        let overlap = dy_bottom + bottom.ascender - dy_top - top.descender;
        if overlap > Unit::ZERO {
            let half = overlap.scale(0.5);
            return (dy_top + half, dy_bottom - half);
        }
    }
    (dy_top, dy_bottom)
}

fn layout_script<'e, S : Shaper + ?Sized>(expression : &'e Expression, script : &'e Script, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let face = settings.regular();
    let corner = |slot : &'e Option<Box<Expression>>, position : ScriptPosition| {
        slot.as_deref().map(|e| {
            let mut corner = layout(e, settings);
            if script.scaled {
                let (k_x, k_y) = script_ratio(face, position);
                corner.scale(k_x, k_y);
            }
            corner
        })
    };

    let mut top_left     = corner(&script.top_left, ScriptPosition::Superscript);
    let mut bottom_left  = corner(&script.bottom_left, ScriptPosition::Subscript);
    let mut main         = layout(&script.main, settings);
    let mut bottom_right = corner(&script.bottom_right, ScriptPosition::Subscript);
    let mut top_right    = corner(&script.top_right, ScriptPosition::Superscript);

    // offsets grow with how far the base actually reaches
    let k_bottom = proportion(main.descender, face.descender());
    let k_top    = proportion(main.ascender,  face.ascender());
    let dx_bottom =   face.script_x_offset(ScriptPosition::Subscript).scale(k_bottom);
    let dx_top    =   face.script_x_offset(ScriptPosition::Superscript).scale(k_top);
    let dy_bottom = - face.script_y_offset(ScriptPosition::Subscript).scale(k_bottom);
    let dy_top    =   face.script_y_offset(ScriptPosition::Superscript).scale(k_top);

    let (dy_top_left, dy_bottom_left)   = separate_scripts(top_left.as_ref(), bottom_left.as_ref(), dy_top, dy_bottom);
    let (dy_top_right, dy_bottom_right) = separate_scripts(top_right.as_ref(), bottom_right.as_ref(), dy_top, dy_bottom);

    if top_left.is_some() || bottom_left.is_some() {
        // the trailing edges of the left scripts are aligned
        let dx = match (&top_left, &bottom_left) {
            (Some(top), Some(bottom)) => bottom.advance - top.advance - dx_bottom + dx_top,
            _ => Unit::ZERO,
        };

        let mut edge = Unit::ZERO;
        if let Some(top) = top_left.as_mut() {
            top.shift(dx.max(Unit::ZERO), dy_top_left);
            edge = top.x + top.advance - dx_top;
        }
        if let Some(bottom) = bottom_left.as_mut() {
            bottom.shift((-dx).max(Unit::ZERO), dy_bottom_left);
            edge = bottom.x + bottom.advance - dx_bottom;
        }
        let dx_main = edge - main.bbox.x_min;
        main.shift(dx_main, Unit::ZERO);
    }

    let right_edge = main.bbox.x_max;
    if let Some(bottom) = bottom_right.as_mut() {
        bottom.shift(right_edge + dx_bottom, dy_bottom_right);
    }
    if let Some(top) = top_right.as_mut() {
        top.shift(right_edge + dx_top, dy_top_right);
    }

    let advance = [Some(&main), bottom_right.as_ref(), top_right.as_ref()]
        .iter()
        .flatten()
        .map(|piece| piece.x + piece.advance)
        .fold(Unit::NEG_INFINITY, Unit::max);

    let children = vec![top_left, bottom_left, Some(main), bottom_right, top_right]
        .into_iter()
        .flatten()
        .map(LayoutNode::from)
        .collect();

    let mut result = ExpressionLayout::new(expression, vec![line_of(children, advance)], advance, Unit::ZERO);
    result.add_delimiters(&script.delimiters, settings);
    result
}


/// One of the (up to three) layouts of a stack, with its original horizontal measurements
struct StackPiece<'e> {
    layout:    ExpressionLayout<'e>,
    width:     Unit<Em>,
    /// left side bearing
    left:      Unit<Em>,
    /// right side bearing
    right:     Unit<Em>,
    stretched: bool,
}

impl<'e> StackPiece<'e> {
    fn new(layout : ExpressionLayout<'e>, stretched : bool) -> Self {
        Self {
            width: layout.bbox.width(),
            left:  layout.bbox.x_min,
            right: layout.advance - layout.bbox.x_max,
            layout,
            stretched,
        }
    }
}

fn layout_stack<'e, S : Shaper + ?Sized>(expression : &'e Expression, stack : &'e Stack, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let face = settings.regular();
    let gap  = - face.underline_position();
    let script = |piece : &'e Expression, position : ScriptPosition| {
        let mut piece = layout(piece, settings);
        if stack.scaled {
            let (k_x, k_y) = script_ratio(face, position);
            piece.scale(k_x, k_y);
        }
        piece
    };

    let main = layout(&stack.main, settings);
    let (main_top, main_bottom) = (main.bbox.y_max, main.bbox.y_min);

    let over = stack.over.as_deref().map(|over| {
        let over = script(over, ScriptPosition::Superscript);
        let bottom = if stack.shifted_by_y_min_max { over.bbox.y_min } else { over.descender };
        (over, main_top - bottom + gap)
    });
    let under = stack.under.as_deref().map(|under| {
        let under = script(under, ScriptPosition::Subscript);
        let top = if stack.shifted_by_y_min_max { under.bbox.y_max } else { under.ascender };
        (under, main_bottom - top - gap)
    });

    // bearings are measured before the vertical shift, which leaves them unchanged
    let mut pieces = Vec::with_capacity(3);
    if let Some((over, dy)) = over {
        let mut piece = StackPiece::new(over, stack.over_stretched);
        piece.layout.shift(Unit::ZERO, dy);
        pieces.push(piece);
    }
    pieces.push(StackPiece::new(main, stack.main_stretched));
    if let Some((under, dy)) = under {
        let mut piece = StackPiece::new(under, stack.under_stretched);
        piece.layout.shift(Unit::ZERO, dy);
        pieces.push(piece);
    }

    let width = pieces.iter().map(|piece| piece.width).fold(Unit::ZERO, Unit::max);
    for piece in pieces.iter_mut() {
        piece.layout.shift(-piece.left, Unit::ZERO);
        if piece.stretched && piece.width > Unit::ZERO {
            piece.layout.scale(width.ratio(piece.width), 1.);
            piece.width = width;
        }
        if piece.width < width {
            piece.layout.shift((width - piece.width).scale(0.5), Unit::ZERO);
        }
    }

    // no piece ends up further left than its own bearing allows
    let dx = pieces
        .iter()
        .map(|piece| piece.left - piece.layout.bbox.x_min)
        .fold(Unit::NEG_INFINITY, Unit::max);
    for piece in pieces.iter_mut() {
        piece.layout.shift(dx, Unit::ZERO);
    }

    let advance = pieces
        .iter()
        .map(|piece| piece.right + piece.layout.bbox.x_max)
        .fold(Unit::NEG_INFINITY, Unit::max);

    let children = pieces
        .into_iter()
        .map(|piece| piece.layout.into())
        .collect();

    let mut result = ExpressionLayout::new(expression, vec![line_of(children, advance)], advance, Unit::ZERO);
    result.add_delimiters(&stack.delimiters, settings);
    result
}


fn layout_root<'e, S : Shaper + ?Sized>(expression : &'e Expression, root : &'e Root, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let face = settings.regular();
    let gap  = - face.underline_position();

    let mut radicand = layout(&root.radicand, settings);
    let mut stroke   = TextLayout::from_string(RADICAL, face, settings.shaper);
    let mut bar      = TextLayout::from_string(HORIZONTAL_RULE, face, settings.shaper);

    // the stroke reaches from the bottom of the radicand to above it, leaving room for the bar and a gap
    let target = radicand.nominal_height() + bar.bbox.total_height() + gap;
    let natural = stroke.nominal_height();
    let k_y = if natural > Unit::ZERO { target.ratio(natural) } else { 1. };
    stroke.scale(1., k_y);
    let dy = radicand.descender - stroke.descender;
    stroke.shift(Unit::ZERO, dy);
    radicand.shift(stroke.advance, Unit::ZERO);

    // the bar spans from the end of the stroke to the end of the radicand's ink, flush with the top of the stroke
    bar.shift(-bar.bbox.x_min, Unit::ZERO);
    let span = radicand.bbox.x_max - stroke.advance;
    if bar.bbox.x_max > Unit::ZERO {
        let k_x = span.ratio(bar.bbox.x_max);
        bar.scale(k_x, 1.);
    }
    let dy = stroke.bbox.y_max - bar.bbox.y_max;
    bar.shift(stroke.advance, dy);
    let bar = bar.into_rule();

    let index = root.index.as_deref().map(|index| {
        let mut index = layout(index, settings);
        if root.scaled {
            let (k_x, k_y) = script_ratio(face, ScriptPosition::Superscript);
            index.scale(k_x, k_y);
        }
        // centered over the stroke's box, its end on the stroke's vertical axis
        let dx = stroke.bbox.x_min + stroke.bbox.width().scale(0.5) - index.advance;
        let dy = stroke.bbox.y_min + stroke.bbox.total_height().scale(0.5) - index.descender + gap;
        index.shift(dx, dy);
        index
    });

    let mut children : Vec<LayoutNode<'e>> = Vec::with_capacity(4);
    let mut overflow = Unit::ZERO;
    if let Some(index) = index {
        overflow = (-index.x).max(Unit::ZERO);
        children.push(index.into());
    }
    children.push(stroke.into());
    children.push(bar.into());
    children.push(radicand.into());

    if overflow > Unit::ZERO {
        debug!("radical index overflows by {}", overflow);
        for child in children.iter_mut() {
            child.shift(overflow, Unit::ZERO);
        }
    }

    let advance = children
        .last()
        .map(|radicand| radicand.x() + radicand.advance())
        .unwrap_or(Unit::ZERO);

    let mut result = ExpressionLayout::new(expression, vec![line_of(children, advance)], advance, Unit::ZERO);
    result.add_delimiters(&root.delimiters, settings);
    result
}


fn layout_grid<'e, S : Shaper + ?Sized>(expression : &'e Expression, grid : &'e Grid, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let face = settings.regular();
    let row_gap    = - face.underline_position();
    let column_gap = TextLayout::from_string(SPACE, face, settings.shaper).advance;
    let vertical_rule   = TextLayout::from_string(VERTICAL_RULE, face, settings.shaper).into_rule();
    let horizontal_rule = TextLayout::from_string(HORIZONTAL_RULE, face, settings.shaper).into_rule();
    let rule_width  = vertical_rule.bbox.width();
    let rule_height = horizontal_rule.bbox.total_height();

    let mut cells : Vec<Vec<ExpressionLayout<'e>>> = grid
        .cells()
        .iter()
        .map(|row| row.iter().map(|cell| layout(cell, settings)).collect())
        .collect();

    // rows, top to bottom
    let mut horizontal_rules = Vec::new();
    let mut dy = Unit::ZERO;
    for (i, row) in cells.iter_mut().enumerate() {
        let ascender  = row.iter().map(|cell| cell.ascender).fold(Unit::ZERO, Unit::max);
        let descender = row.iter().map(|cell| cell.descender).fold(Unit::ZERO, Unit::min);
        dy -= ascender;
        for cell in row.iter_mut() {
            cell.shift(Unit::ZERO, dy);
        }
        dy -= row_gap - descender;

        if grid.has_horizontal_line(i) {
            let mut rule = horizontal_rule.clone();
            let dy_rule = dy - rule.bbox.y_min;
            rule.shift(Unit::ZERO, dy_rule);
            horizontal_rules.push(rule);
            dy -= rule_height;
        }
    }

    // columns, left to right
    let mut vertical_rules = Vec::new();
    let mut advance = Unit::ZERO;
    let mut dx = Unit::ZERO;
    for j in 0 .. grid.columns() {
        let width = cells.iter().map(|row| row[j].advance).fold(Unit::ZERO, Unit::max);
        for row in cells.iter_mut() {
            let cell = &mut row[j];
            let offset = if grid.center_aligned { dx + (width - cell.advance).scale(0.5) } else { dx };
            cell.shift(offset, Unit::ZERO);
        }
        advance = advance.max(dx + width);
        dx += width + column_gap;

        if grid.has_vertical_line(j) {
            let mut rule = vertical_rule.clone();
            let dx_rule = dx - rule.bbox.x_min;
            rule.shift(dx_rule, Unit::ZERO);
            vertical_rules.push(rule);
            dx += rule_width;
        }
        dx += column_gap;
    }

    let baseline = cells
        .iter()
        .map(|row| row[0].y)
        .sum::<Unit<Em>>()
        .scale(1. / cells.len() as f64);

    let mut line = line_of(
        cells.into_iter().flatten().map(LayoutNode::from).collect(),
        advance,
    );

    // rules span the packed cells
    for rule in horizontal_rules.iter_mut() {
        let top = rule.bbox.y_max;
        if rule.bbox.width() > Unit::ZERO {
            let k_x = line.bbox.width().ratio(rule.bbox.width());
            rule.scale(k_x, 1.);
        }
        let dx = line.bbox.x_min - rule.bbox.x_min;
        let dy = top - rule.bbox.y_max;
        rule.shift(dx, dy);
    }
    for rule in vertical_rules.iter_mut() {
        let left = rule.bbox.x_min;
        if rule.bbox.total_height() > Unit::ZERO {
            let k_y = line.bbox.total_height().ratio(rule.bbox.total_height());
            rule.scale(1., k_y);
        }
        let dx = left - rule.bbox.x_min;
        let dy = line.bbox.y_max - rule.bbox.y_max;
        rule.shift(dx, dy);
    }
    line.children.extend(horizontal_rules.into_iter().map(LayoutNode::from));
    line.children.extend(vertical_rules.into_iter().map(LayoutNode::from));
    line.update_min_max();

    let mut result = ExpressionLayout::new(expression, vec![line], advance, Unit::ZERO);
    result.shift(Unit::ZERO, -baseline);
    result.add_delimiters(&grid.delimiters, settings);
    result
}


fn layout_multiline<'e, S : Shaper + ?Sized>(expression : &'e Expression, multiline : &'e Multiline, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let line_gap = settings.regular().line_gap();

    let mut lines : Vec<LineLayout<'e>> = Vec::new();
    for child in multiline.children.iter() {
        for view in layout(child, settings).split_lines() {
            let mut line : LineLayout<'e> = Composite::new(view.x, view.y);
            line.advance = view.advance;
            line.push(view);
            line.update_min_max();

            // the baseline goes one line gap below the previous line's descender, plus this line's ascender
            if let Some(previous) = lines.last() {
                let target = previous.descender - line_gap - (line.ascender - line.y);
                let dy = target - line.y;
                line.shift(Unit::ZERO, dy);
            }
            lines.push(line);
        }
    }

    if lines.is_empty() {
        lines.push(Composite::new(Unit::ZERO, Unit::ZERO));
    }
    let (advance, y_advance) = match lines.last() {
        Some(last) if lines.len() > 1 => (last.advance, last.y),
        Some(last) => (last.advance, Unit::ZERO),
        None => (Unit::ZERO, Unit::ZERO),
    };

    let mut result = ExpressionLayout::new(expression, lines, advance, y_advance);
    result.add_delimiters(&multiline.delimiters, settings);
    result
}


fn layout_placeholder<'e, S : Shaper + ?Sized>(expression : &'e Expression, placeholder : &'e Placeholder, settings : LayoutSettings<S>) -> ExpressionLayout<'e> {
    let mut result = layout(&placeholder.definition, settings);
    result.set_expression(expression);
    result.add_delimiters(&placeholder.delimiters, settings);

    let left = placeholder.delimiters.left
        .as_ref()
        .map(|_| ChildRef { line : 0, child : 0 });
    let right = placeholder.delimiters.right
        .as_ref()
        .and_then(|_| {
            let line = result.lines().len().checked_sub(1)?;
            let child = result.lines()[line].children.len().checked_sub(1)?;
            Some(ChildRef { line, child })
        });
    result.set_kind(LayoutKind::Placeholder { left, right });
    result
}
