#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use mathshape::dimensions::Unit;
use mathshape::dimensions::units::Em;
use mathshape::expression::Expression;
use mathshape::font::{FaceMetrics, GlyphId, Metrics, ShapedGlyph, ShapedRun, Shaper};
use mathshape::geometry::BBox;
use mathshape::layout::{ExpressionLayout, Geometry, LayoutNode, LineLayout};

pub const METRICS_YAML: &str = "tests/data/metrics.yaml";
pub const EXPRESSIONS_YAML: &str = "tests/data/expressions.yaml";

pub const EPSILON: f64 = 1e-9;

/// Characters the mock shaper has no glyph for
pub const MISSING: char = '\u{2603}';


/// A shaper with a fixed 0.5em advance, whose glyph ids are the characters' code points.
/// Ink boxes depend on the class of the character:
///
///  - letters and most punctuation: [0.0625, 0.4375] x [0, 0.5]
///  - digits: [0.0625, 0.4375] x [0, 0.75]
///  - brackets and parentheses: [0.125, 0.375] x [-0.25, 0.75]
///  - `√`: [0, 0.5] x [-0.125, 0.875]
///  - `−`: [0.0625, 0.4375] x [0.25, 0.3125]
///  - `|`: [0.1875, 0.3125] x [-0.25, 0.75]
///  - spaces have no ink
pub struct MockShaper;

fn ink(c: char) -> Option<(f64, f64, f64, f64)> {
    match c {
        ' ' => None,
        '0' ..= '9' => Some((0.0625, 0., 0.4375, 0.75)),
        '(' | ')' | '[' | ']' | '{' | '}' => Some((0.125, -0.25, 0.375, 0.75)),
        '√' => Some((0., -0.125, 0.5, 0.875)),
        '−' => Some((0.0625, 0.25, 0.4375, 0.3125)),
        '|' => Some((0.1875, -0.25, 0.3125, 0.75)),
        _ => Some((0.0625, 0., 0.4375, 0.5)),
    }
}

impl Shaper for MockShaper {
    fn shape(&self, text: &str, _: &FaceMetrics) -> Vec<GlyphId> {
        text.chars()
            .filter(|&c| c != MISSING)
            .map(|c| GlyphId::from(c as u16))
            .collect()
    }

    fn layout_glyphs(&self, glyphs: &[GlyphId], _: &FaceMetrics) -> ShapedRun {
        let mut run = ShapedRun::empty();
        for &gid in glyphs {
            let x = run.advance;
            let bbox = char::from_u32(u16::from(gid) as u32)
                .and_then(ink)
                .map(|(x_min, y_min, x_max, y_max)| BBox::new(x + em(x_min), em(y_min), x + em(x_max), em(y_max)));

            run.glyphs.push(ShapedGlyph { advance: em(0.5), x, bbox });
            run.bbox = match (run.bbox, bbox) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (a, b) => a.or(b),
            };
            run.advance += em(0.5);
        }
        run
    }
}


pub fn em(value: f64) -> Unit<Em> {
    Unit::new(value)
}

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_metrics<P: AsRef<Path>>(path: P) -> Metrics {
    let file = File::open(path.as_ref()).expect("failed to open metrics");
    let reader = BufReader::new(file);
    let metrics: Metrics = serde_yaml::from_reader(reader).expect("failed to parse metrics");

    // tags every face with the style of its slot
    Metrics::new(metrics.regular, metrics.bold, metrics.italic, metrics.bold_italic)
}

pub fn metrics() -> Metrics {
    load_metrics(METRICS_YAML)
}

pub fn layout(expression: &Expression) -> ExpressionLayout {
    init_logs();
    mathshape::layout(expression, &metrics(), &MockShaper)
}


pub fn assert_close(actual: Unit<Em>, expected: Unit<Em>) {
    assert!(
        (actual - expected).abs().to_unitless() <= EPSILON,
        "expected {}, got {}", expected, actual,
    );
}

pub fn assert_bbox_close(actual: &BBox<Em>, expected: &BBox<Em>) {
    assert!(actual.close_to(expected, EPSILON), "expected {:?}, got {:?}", expected, actual);
}

fn union<'a, T: Geometry + 'a>(children: impl Iterator<Item = &'a T>) -> BBox<Em> {
    children.fold(BBox::empty(), |bbox, child| bbox.union(*child.bbox()))
}

/// Checks that the boxes and vertical metrics of every line and expression of the tree
/// are derived from their children, and that aliased expressions mirror their line.
pub fn assert_consistent(expression: &ExpressionLayout) {
    assert!(!expression.lines().is_empty(), "an expression has at least one line");

    if expression.is_aliased() {
        let line = &expression.lines()[0];
        assert_eq!(expression.lines().len(), 1);
        assert_eq!(expression.x, line.x);
        assert_eq!(expression.y, line.y);
        assert_eq!(expression.bbox, line.bbox);
        assert_eq!(expression.advance, line.advance);
        assert_eq!(expression.ascender, line.ascender);
        assert_eq!(expression.descender, line.descender);
    }
    else {
        assert_bbox_close(&expression.bbox, &union(expression.lines().iter()));
    }

    for line in expression.lines() {
        assert_line_consistent(line);
    }
}

fn assert_line_consistent(line: &LineLayout) {
    if line.children.is_empty() {
        assert_bbox_close(&line.bbox, &BBox::single_point(line.x, line.y));
        return;
    }

    assert_bbox_close(&line.bbox, &union(line.children.iter()));
    let ascender = line.children.iter().map(LayoutNode::ascender).fold(Unit::NEG_INFINITY, Unit::max);
    let descender = line.children.iter().map(LayoutNode::descender).fold(Unit::INFINITY, Unit::min);
    assert_close(line.ascender, ascender);
    assert_close(line.descender, descender);

    for child in line.children.iter() {
        if let LayoutNode::Expression(expression) = child {
            assert_consistent(expression);
        }
    }
}

/// Every expression of the tree, depth first
pub fn expressions<'a, 'e>(layout: &'a ExpressionLayout<'e>) -> Vec<&'a ExpressionLayout<'e>> {
    let mut out = vec![layout];
    for line in layout.lines() {
        for child in line.children.iter() {
            if let LayoutNode::Expression(expression) = child {
                out.extend(expressions(expression));
            }
        }
    }
    out
}
