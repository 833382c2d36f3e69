/// The id of a glyph (represented as u16)
#[derive(Serialize, Deserialize)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GlyphId(u16);

impl From<u16> for GlyphId {
    fn from(x: u16) -> Self { Self(x) }
}

impl From<GlyphId> for u16 {
    fn from(gid: GlyphId) -> u16 { gid.0 }
}


/// Which of the four faces of a [`Metrics`](crate::font::Metrics) bundle a run of text uses.
// NB: Changing the order of these variants requires
//     changing `Metrics::face`
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    /// upright, normal weight
    Regular,
    /// slanted
    Italic,
    /// heavier weight
    Bold,
    /// heavier and slanted
    BoldItalic,
}

impl FontStyle {
    /// The style matching the given flags
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        let style = FontStyle::Regular;
        let style = if bold { style.with_bold() } else { style };
        if italic { style.with_italics() } else { style }
    }

    /// Same slant, bold weight
    pub fn with_bold(self) -> Self {
        match self {
            FontStyle::Italic | FontStyle::BoldItalic => FontStyle::BoldItalic,
            _ => FontStyle::Bold,
        }
    }

    /// Same weight, italic slant
    pub fn with_italics(self) -> Self {
        match self {
            FontStyle::Bold | FontStyle::BoldItalic => FontStyle::BoldItalic,
            _ => FontStyle::Italic,
        }
    }

    /// Is the weight bold?
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    /// Is the slant italic?
    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

impl Default for FontStyle {
    fn default() -> FontStyle {
        FontStyle::Regular
    }
}


#[cfg(feature="ttfparser-shaper")]
impl From<ttf_parser::GlyphId> for GlyphId {

    #[inline]
    fn from(glyph_id: ttf_parser::GlyphId) -> Self {
        Self(glyph_id.0)
    }
}

#[cfg(feature="ttfparser-shaper")]
impl From<GlyphId> for ttf_parser::GlyphId {
    fn from(gid: GlyphId) -> ttf_parser::GlyphId {
        ttf_parser::GlyphId(gid.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_flags_combine() {
        assert_eq!(FontStyle::from_flags(false, false), FontStyle::Regular);
        assert_eq!(FontStyle::from_flags(true,  false), FontStyle::Bold);
        assert_eq!(FontStyle::from_flags(false, true),  FontStyle::Italic);
        assert_eq!(FontStyle::from_flags(true,  true),  FontStyle::BoldItalic);
        assert!(FontStyle::BoldItalic.is_bold() && FontStyle::BoldItalic.is_italic());
    }
}
