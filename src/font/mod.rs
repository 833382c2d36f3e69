/// Different implementations of the [`Shaper`] trait for various font parsing crates, like 'ttf-parser'.
#[deny(missing_docs)]
pub mod backend;
/// Contains small types shared by fonts and layouts: glyph ids and face styles.
#[deny(missing_docs)]
pub mod common;

pub use crate::font::common::{GlyphId, FontStyle};

use crate::dimensions::Unit;
use crate::dimensions::units::{Em, FUnit, Ratio};
use crate::geometry::BBox;


/// Converts a string into glyphs and measures them.
///
/// Shaping is delegated entirely (kerning, ligatures and bidi included): the layout engine only ever sees
/// the glyph ids and their em-normalized measurements. Implementations are expected to be deterministic ;
/// a character the font cannot resolve should be dropped (or mapped to `.notdef`), never reported as an error.
pub trait Shaper {
    /// The glyphs representing `text` in the face described by `face`.
    fn shape(&self, text: &str, face: &FaceMetrics) -> Vec<GlyphId>;
    /// Positions `glyphs` along the baseline, starting at x = 0.
    fn layout_glyphs(&self, glyphs: &[GlyphId], face: &FaceMetrics) -> ShapedRun;
}

/// The measurements of one shaped string, in em.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRun {
    /// How far the caret moves after the run
    pub advance: Unit<Em>,
    /// Union of the glyphs' ink boxes ; `None` if no glyph has ink
    pub bbox:    Option<BBox<Em>>,
    /// One entry per glyph, in the order of [`Shaper::shape`]'s output
    pub glyphs:  Vec<ShapedGlyph>,
}

impl ShapedRun {
    /// A run with nothing in it
    pub fn empty() -> Self {
        Self {
            advance: Unit::ZERO,
            bbox:    None,
            glyphs:  Vec::new(),
        }
    }
}

/// One positioned glyph of a [`ShapedRun`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// caret advance of this glyph
    pub advance: Unit<Em>,
    /// origin of the glyph along the run
    pub x:       Unit<Em>,
    /// ink box, relative to the run's origin ; `None` for ink-less glyphs such as spaces
    pub bbox:    Option<BBox<Em>>,
}


/// Font-wide measurements of one face, in design units (as found in the `head`, `hhea` and `OS/2` tables).
///
/// Use the accessor methods to get the values normalized to em.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaceMetrics {
    /// design units per em
    pub units_per_em:          f64,
    /// typographic ascender, positive
    pub ascender:              f64,
    /// typographic descender, negative
    pub descender:             f64,
    pub subscript_x_size:      f64,
    pub subscript_y_size:      f64,
    pub subscript_x_offset:    f64,
    /// downward shift of subscripts, positive
    pub subscript_y_offset:    f64,
    pub superscript_x_size:    f64,
    pub superscript_y_size:    f64,
    pub superscript_x_offset:  f64,
    /// upward shift of superscripts, positive
    pub superscript_y_offset:  f64,
    /// top of the underline relative to the baseline, usually negative
    pub underline_position:    f64,
    pub line_gap:              f64,
    /// which face of the bundle these metrics describe
    #[serde(default)]
    pub style:                 FontStyle,
}

/// Where a script sits relative to its base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPosition {
    /// above: superscripts, over-stacks, radical indices
    Superscript,
    /// below: subscripts, under-stacks
    Subscript,
}

impl FaceMetrics {
    /// Conversion factor from design units to em
    pub fn units_to_em(&self) -> Unit<Ratio<Em, FUnit>> {
        Unit::<Ratio<FUnit, Em>>::new(self.units_per_em).recip()
    }

    /// Normalizes a value given in design units
    pub fn to_em(&self, value: f64) -> Unit<Em> {
        Unit::<FUnit>::new(value) * self.units_to_em()
    }

    pub fn ascender(&self)   -> Unit<Em> { self.to_em(self.ascender) }
    pub fn descender(&self)  -> Unit<Em> { self.to_em(self.descender) }
    pub fn line_gap(&self)   -> Unit<Em> { self.to_em(self.line_gap) }
    pub fn underline_position(&self) -> Unit<Em> { self.to_em(self.underline_position) }

    /// Horizontal offset of a script
    pub fn script_x_offset(&self, position: ScriptPosition) -> Unit<Em> {
        match position {
            ScriptPosition::Superscript => self.to_em(self.superscript_x_offset),
            ScriptPosition::Subscript   => self.to_em(self.subscript_x_offset),
        }
    }

    /// Vertical offset of a script, as found in the font (positive in both directions)
    pub fn script_y_offset(&self, position: ScriptPosition) -> Unit<Em> {
        match position {
            ScriptPosition::Superscript => self.to_em(self.superscript_y_offset),
            ScriptPosition::Subscript   => self.to_em(self.subscript_y_offset),
        }
    }

    /// `(x, y)` size of a script relative to its base, as found in the font.
    pub fn script_size_ratio(&self, position: ScriptPosition) -> (f64, f64) {
        let (x, y) = match position {
            ScriptPosition::Superscript => (self.superscript_x_size, self.superscript_y_size),
            ScriptPosition::Subscript   => (self.subscript_x_size, self.subscript_y_size),
        };
        (x / self.units_per_em, y / self.units_per_em)
    }

    /// Returns the same metrics, describing the face of another style.
    pub fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }
}

/// The four faces a formula may be set in.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub regular:     FaceMetrics,
    pub bold:        FaceMetrics,
    pub italic:      FaceMetrics,
    pub bold_italic: FaceMetrics,
}

impl Metrics {
    /// Creates a bundle ; each face is tagged with the style of its slot.
    pub fn new(regular: FaceMetrics, bold: FaceMetrics, italic: FaceMetrics, bold_italic: FaceMetrics) -> Self {
        Self {
            regular:     regular.with_style(FontStyle::Regular),
            bold:        bold.with_style(FontStyle::Bold),
            italic:      italic.with_style(FontStyle::Italic),
            bold_italic: bold_italic.with_style(FontStyle::BoldItalic),
        }
    }

    /// A bundle using the same measurements for every style
    pub fn uniform(face: FaceMetrics) -> Self {
        Self::new(face.clone(), face.clone(), face.clone(), face)
    }

    /// The face for the given style
    pub fn face(&self, style: FontStyle) -> &FaceMetrics {
        match style {
            FontStyle::Regular    => &self.regular,
            FontStyle::Italic     => &self.italic,
            FontStyle::Bold       => &self.bold,
            FontStyle::BoldItalic => &self.bold_italic,
        }
    }
}
