//! The expression tree handed over by an editor, the input of [`layout`](crate::layout::engine::layout).
//!
//! The tree is read-only for the layout engine. Every kind of expression may ask for a pair of delimiters
//! (e.g. `(` and `)`) which are grown to the height of what they enclose.
//!
//! Trees can be built with the constructors and builder methods below or deserialized (e.g. from JSON) ;
//! the variants are tagged by a `kind` field:
//!
//! ```
//! use mathshape::expression::{Expression, Script};
//!
//! let json = r#"{ "kind": "script", "main": { "kind": "text", "value": "x" },
//!                 "topRight": { "kind": "text", "value": "2" }, "scaled": true }"#;
//! let expression : Expression = serde_json::from_str(json).unwrap();
//! let built : Expression = Script::new(Expression::text("x")).top_right(Expression::text("2")).scaled(true).into();
//! assert_eq!(expression, built);
//! ```

mod grid;

pub use self::grid::Grid;


/// Optional pair of strings drawn around an expression, stretched to its height.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delimiters {
    /// e.g. `"("`
    #[serde(default, rename = "delimiterLeft", skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// e.g. `")"`
    #[serde(default, rename = "delimiterRight", skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl Delimiters {
    /// Neither left nor right delimiter
    pub fn none() -> Self {
        Self::default()
    }

    /// Both delimiters
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left:  Some(left.into()),
            right: Some(right.into()),
        }
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}


/// A node of the expression tree
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expression {
    /// children laid out one after the other
    Sequence(Sequence),
    /// a run of text in one face
    Text(Text),
    /// horizontal space
    Space(Space),
    /// base with up to four corner scripts
    Script(Script),
    /// base with something above and/or below
    Stack(Stack),
    /// radical, optionally with an index
    Root(Root),
    /// matrix of cells
    Grid(Grid),
    /// one output line per line of each child
    Multiline(Multiline),
    /// an editable slot wrapping some other expression
    Placeholder(Placeholder),
}

impl Expression {
    /// Regular text
    pub fn text(value: impl Into<String>) -> Self {
        Text::new(value).into()
    }

    /// A space `size` times as wide as the regular space glyph
    pub fn space(size: f64) -> Self {
        Space::new(size).into()
    }

    /// Children one after the other
    pub fn sequence(children: impl IntoIterator<Item = Expression>) -> Self {
        Sequence::new(children).into()
    }

    /// The delimiters requested for this node
    pub fn delimiters(&self) -> &Delimiters {
        match self {
            Expression::Sequence(ref e)    => &e.delimiters,
            Expression::Text(ref e)        => &e.delimiters,
            Expression::Space(ref e)       => &e.delimiters,
            Expression::Script(ref e)      => &e.delimiters,
            Expression::Stack(ref e)       => &e.delimiters,
            Expression::Root(ref e)        => &e.delimiters,
            Expression::Grid(ref e)        => &e.delimiters,
            Expression::Multiline(ref e)   => &e.delimiters,
            Expression::Placeholder(ref e) => &e.delimiters,
        }
    }

    fn delimiters_mut(&mut self) -> &mut Delimiters {
        match self {
            Expression::Sequence(ref mut e)    => &mut e.delimiters,
            Expression::Text(ref mut e)        => &mut e.delimiters,
            Expression::Space(ref mut e)       => &mut e.delimiters,
            Expression::Script(ref mut e)      => &mut e.delimiters,
            Expression::Stack(ref mut e)       => &mut e.delimiters,
            Expression::Root(ref mut e)        => &mut e.delimiters,
            Expression::Grid(ref mut e)        => &mut e.delimiters,
            Expression::Multiline(ref mut e)   => &mut e.delimiters,
            Expression::Placeholder(ref mut e) => &mut e.delimiters,
        }
    }

    /// Surround with `left` and `right`
    pub fn with_delimiters(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        *self.delimiters_mut() = Delimiters::new(left, right);
        self
    }

    /// Only a left delimiter
    pub fn with_left_delimiter(mut self, left: impl Into<String>) -> Self {
        self.delimiters_mut().left = Some(left.into());
        self
    }

    /// Only a right delimiter
    pub fn with_right_delimiter(mut self, right: impl Into<String>) -> Self {
        self.delimiters_mut().right = Some(right.into());
        self
    }

    /// Name of the variant, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Sequence(_)    => "sequence",
            Expression::Text(_)        => "text",
            Expression::Space(_)       => "space",
            Expression::Script(_)      => "script",
            Expression::Stack(_)       => "stack",
            Expression::Root(_)        => "root",
            Expression::Grid(_)        => "grid",
            Expression::Multiline(_)   => "multiline",
            Expression::Placeholder(_) => "placeholder",
        }
    }
}

macro_rules! into_expression {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Expression {
                fn from(e: $kind) -> Self {
                    Expression::$kind(e)
                }
            }
        )*
    };
}

into_expression!(Sequence, Text, Space, Script, Stack, Root, Grid, Multiline, Placeholder);


/// Children laid out one after the other on a shared baseline.
/// A child spanning several lines continues the sequence on its last line.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    #[serde(default)]
    pub children:   Vec<Expression>,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Sequence {
    pub fn new(children: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            children:   children.into_iter().collect(),
            delimiters: Delimiters::none(),
        }
    }
}


/// A string shaped in a single face.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub value:      String,
    #[serde(default)]
    pub bold:       bool,
    #[serde(default)]
    pub italic:     bool,
    /// enlarged by √2 in both directions (e.g. for big operators)
    #[serde(default)]
    pub big:        bool,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn italic(self) -> Self {
        Self { italic: true, ..self }
    }

    pub fn big(self) -> Self {
        Self { big: true, ..self }
    }
}


fn unit_size() -> f64 { 1.0 }

/// Horizontal space, as a multiple of the regular face's space glyph.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    #[serde(default = "unit_size")]
    pub size:       f64,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Space {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            delimiters: Delimiters::none(),
        }
    }
}


/// A base with up to four scripts in its corners.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub main:         Box<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left:     Option<Box<Expression>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right:    Option<Box<Expression>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left:  Option<Box<Expression>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<Box<Expression>>,
    /// shrink the scripts by the face's script size
    #[serde(default)]
    pub scaled:       bool,
    #[serde(flatten)]
    pub delimiters:   Delimiters,
}

impl Script {
    pub fn new(main: impl Into<Expression>) -> Self {
        Self {
            main:         Box::new(main.into()),
            top_left:     None,
            top_right:    None,
            bottom_left:  None,
            bottom_right: None,
            scaled:       false,
            delimiters:   Delimiters::none(),
        }
    }

    pub fn top_left(self, e: impl Into<Expression>) -> Self {
        Self { top_left: Some(Box::new(e.into())), ..self }
    }

    pub fn top_right(self, e: impl Into<Expression>) -> Self {
        Self { top_right: Some(Box::new(e.into())), ..self }
    }

    pub fn bottom_left(self, e: impl Into<Expression>) -> Self {
        Self { bottom_left: Some(Box::new(e.into())), ..self }
    }

    pub fn bottom_right(self, e: impl Into<Expression>) -> Self {
        Self { bottom_right: Some(Box::new(e.into())), ..self }
    }

    pub fn scaled(self, scaled: bool) -> Self {
        Self { scaled, ..self }
    }
}


/// A base with something above (`over`) and/or below (`under`) it, e.g. accents, limits, braces.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub main:                 Box<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over:                 Option<Box<Expression>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub under:                Option<Box<Expression>>,
    /// shrink `over` and `under` by the face's script size
    #[serde(default)]
    pub scaled:               bool,
    /// stretch horizontally to the widest piece
    #[serde(default)]
    pub main_stretched:       bool,
    #[serde(default)]
    pub over_stretched:       bool,
    #[serde(default)]
    pub under_stretched:      bool,
    /// attach `over` and `under` by their ink boxes rather than by their ascender and descender
    #[serde(default, rename = "shiftedByYMinMax")]
    pub shifted_by_y_min_max: bool,
    #[serde(flatten)]
    pub delimiters:           Delimiters,
}

impl Stack {
    pub fn new(main: impl Into<Expression>) -> Self {
        Self {
            main:                 Box::new(main.into()),
            over:                 None,
            under:                None,
            scaled:               false,
            main_stretched:       false,
            over_stretched:       false,
            under_stretched:      false,
            shifted_by_y_min_max: false,
            delimiters:           Delimiters::none(),
        }
    }

    pub fn over(self, e: impl Into<Expression>) -> Self {
        Self { over: Some(Box::new(e.into())), ..self }
    }

    pub fn under(self, e: impl Into<Expression>) -> Self {
        Self { under: Some(Box::new(e.into())), ..self }
    }

    pub fn scaled(self, scaled: bool) -> Self {
        Self { scaled, ..self }
    }

    pub fn main_stretched(self, main_stretched: bool) -> Self {
        Self { main_stretched, ..self }
    }

    pub fn over_stretched(self, over_stretched: bool) -> Self {
        Self { over_stretched, ..self }
    }

    pub fn under_stretched(self, under_stretched: bool) -> Self {
        Self { under_stretched, ..self }
    }

    pub fn shifted_by_y_min_max(self, shifted_by_y_min_max: bool) -> Self {
        Self { shifted_by_y_min_max, ..self }
    }
}


/// A radical sign over `radicand`, with an optional index.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub radicand:   Box<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index:      Option<Box<Expression>>,
    /// shrink the index by the face's superscript size
    #[serde(default)]
    pub scaled:     bool,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Root {
    pub fn new(radicand: impl Into<Expression>) -> Self {
        Self {
            radicand:   Box::new(radicand.into()),
            index:      None,
            scaled:     false,
            delimiters: Delimiters::none(),
        }
    }

    pub fn index(self, e: impl Into<Expression>) -> Self {
        Self { index: Some(Box::new(e.into())), ..self }
    }

    pub fn scaled(self, scaled: bool) -> Self {
        Self { scaled, ..self }
    }
}


/// Children stacked vertically, every line of every child becoming a line of its own.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multiline {
    #[serde(default)]
    pub children:   Vec<Expression>,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Multiline {
    pub fn new(children: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            children:   children.into_iter().collect(),
            delimiters: Delimiters::none(),
        }
    }
}


/// An editable slot: laid out as its `definition`, but remembered as a unit by the editor.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub definition: Box<Expression>,
    #[serde(flatten)]
    pub delimiters: Delimiters,
}

impl Placeholder {
    pub fn new(definition: impl Into<Expression>) -> Self {
        Self {
            definition: Box::new(definition.into()),
            delimiters: Delimiters::none(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_apply_to_any_kind() {
        let e = Expression::text("x").with_delimiters("(", ")");
        assert_eq!(e.delimiters(), &Delimiters::new("(", ")"));

        let e : Expression = Root::new(Expression::text("2")).into();
        let e = e.with_right_delimiter("|");
        assert_eq!(e.delimiters().left, None);
        assert_eq!(e.delimiters().right.as_deref(), Some("|"));
    }

    #[test]
    fn deserializes_tagged_tree() {
        let json = r#"{
            "kind": "sequence",
            "delimiterLeft": "[",
            "children": [
                { "kind": "text", "value": "a", "italic": true },
                { "kind": "space" },
                { "kind": "stack", "main": { "kind": "text", "value": "b" },
                  "over": { "kind": "text", "value": "~" }, "overStretched": true, "shiftedByYMinMax": true }
            ]
        }"#;
        let e : Expression = serde_json::from_str(json).unwrap();
        let expected = Expression::sequence([
            Text::new("a").italic().into(),
            Expression::space(1.0),
            Stack::new(Expression::text("b"))
                .over(Expression::text("~"))
                .over_stretched(true)
                .shifted_by_y_min_max(true)
                .into(),
        ]).with_left_delimiter("[");
        assert_eq!(e, expected);
    }

    #[test]
    fn serializes_back_to_the_same_tree() {
        let e : Expression = Script::new(Expression::text("x"))
            .bottom_right(Expression::text("i"))
            .scaled(true)
            .into();
        let json = serde_json::to_string(&e).unwrap();
        let back : Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
