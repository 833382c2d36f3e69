/// This executable lays out a very large number of expressions.
/// Its performance is monitored with `perf` to find out the main
/// cost centers of the `layout` module
///
/// Takes the path to a .json file holding a list of expression trees (as below)
/// and lays each of them out, with every character shaped as a 0.5em wide box;
/// prints the number of expressions and glyphs laid out
///
/// ```json
/// [
///   { "kind": "text", "value": "x" },
///   { "kind": "script", "scaled": true, "main": { "kind": "text", "value": "e" },
///     "topRight": { "kind": "text", "value": "iπ" } },
///   { "kind": "root", "radicand": { "kind": "text", "value": "2" }, "delimiterLeft": "(", "delimiterRight": ")" },
///   ...
///  ]
///  ```
///
///
/// Run with:
///
/// ```bash
/// CARGO_PROFILE_RELEASE_DEBUG=true cargo flamegraph --root --example stress-test -- PATH_TO_FILE
/// ```

use mathshape::dimensions::Unit;
use mathshape::expression::Expression;
use mathshape::font::{FaceMetrics, FontStyle, GlyphId, Metrics, ShapedGlyph, ShapedRun, Shaper};
use mathshape::geometry::BBox;


struct BoxShaper;

impl Shaper for BoxShaper {
	fn shape(&self, text: &str, _: &FaceMetrics) -> Vec<GlyphId> {
		text.chars().map(|c| GlyphId::from(c as u16)).collect()
	}

	fn layout_glyphs(&self, glyphs: &[GlyphId], _: &FaceMetrics) -> ShapedRun {
		let mut run = ShapedRun::empty();
		for _ in glyphs {
			let x = run.advance;
			let bbox = BBox::new(x, Unit::ZERO, x + Unit::new(0.5), Unit::new(0.7));
			run.glyphs.push(ShapedGlyph { advance: Unit::new(0.5), x, bbox: Some(bbox) });
			run.bbox = Some(run.bbox.map_or(bbox, |b| b.union(bbox)));
			run.advance += Unit::new(0.5);
		}
		run
	}
}


fn main() {
	let mut n_expressions = 0;
	let mut n_glyphs      = 0;

	let expressions_file_path = std::env::args().nth(1).expect("Usage: stress-test PATH");
	eprintln!("Expressions from: {}", expressions_file_path);

	let expressions_file = std::fs::File::open(&expressions_file_path).unwrap();
	let expressions_buffer = std::io::BufReader::new(expressions_file);
	let expressions : Vec<Expression> = serde_json::from_reader(expressions_buffer).unwrap();

	let metrics = Metrics::uniform(FaceMetrics {
		units_per_em:          1000.,
		ascender:               800.,
		descender:             -200.,
		subscript_x_size:       650.,
		subscript_y_size:       600.,
		subscript_x_offset:       0.,
		subscript_y_offset:      75.,
		superscript_x_size:     650.,
		superscript_y_size:     600.,
		superscript_x_offset:     0.,
		superscript_y_offset:   350.,
		underline_position:    -100.,
		line_gap:                90.,
		style:                 FontStyle::Regular,
	});

	for expression in expressions.iter() {
		let layout = mathshape::layout(expression, &metrics, &BoxShaper);
		n_glyphs += layout.glyphs().len();
		n_expressions += 1;
	}
	eprintln!("{} expressions, {} glyphs", n_expressions, n_glyphs);
}
