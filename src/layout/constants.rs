//! Glyphs and ratios used by the layout algorithms

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

/// Stroke of a radical, stretched vertically to the height of the radicand
pub const RADICAL         : &str = "√";
/// Overbar of a radical and horizontal rule of a grid (U+2212 MINUS SIGN)
pub const HORIZONTAL_RULE : &str = "−";
/// Vertical rule of a grid
pub const VERTICAL_RULE   : &str = "|";
/// A [`Space`](crate::expression::Space) is a multiple of this glyph's advance, and so is the gap between grid columns.
pub const SPACE           : &str = " ";

/// Isotropic scale of [`big`](crate::expression::Text::big) text
pub const BIG_SCALE        : f64 = SQRT_2;
/// Scripts, over-, under-stacks and radical indices never shrink by less than this, whatever the face says.
pub const MAX_SCRIPT_RATIO : f64 = FRAC_1_SQRT_2;
