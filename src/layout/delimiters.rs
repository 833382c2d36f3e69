//! Grow-to-fit delimiters, attached as the last step of every layout algorithm.

use crate::dimensions::Unit;
use crate::dimensions::units::Em;
use crate::expression::Delimiters;
use crate::font::Shaper;

use super::{ExpressionLayout, Geometry, LayoutSettings, TextLayout};


/// Vertical scale and ascender of a delimiter stretched to `height`
fn fit(delimiter : &TextLayout, height : Unit<Em>) -> (f64, Unit<Em>) {
    let natural = delimiter.nominal_height();
    let k_y = if natural > Unit::ZERO { height.ratio(natural) } else { 1. };
    (k_y, delimiter.ascender.scale(k_y))
}

impl<'e> ExpressionLayout<'e> {
    /// Shapes the requested delimiters in the regular face, stretches them to the tallest line
    /// and splices them at the start of the first line and the end of the last line.
    pub(crate) fn add_delimiters<S : Shaper + ?Sized>(&mut self, delimiters : &Delimiters, settings : LayoutSettings<S>) {
        if delimiters.is_empty() {
            return;
        }

        let face = settings.regular();
        let shape = |value : &Option<String>| {
            value.as_deref().map(|value| TextLayout::from_string(value, face, settings.shaper))
        };
        let left  = shape(&delimiters.left);
        let right = shape(&delimiters.right);

        let height = self.lines()
            .iter()
            .map(|line| line.nominal_height())
            .fold(Unit::NEG_INFINITY, Unit::max);

        // all offsets are computed before anything is spliced in
        let (first, last) = match (self.lines().first(), self.lines().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return,
        };
        let left = left.map(|delimiter| {
            let (k_y, ascender) = fit(&delimiter, height);
            let dy = first.ascender - ascender + (first.nominal_height() - height).scale(0.5);
            (delimiter, k_y, dy)
        });
        let right = right.map(|delimiter| {
            let (k_y, ascender) = fit(&delimiter, height);
            let dy = last.ascender - ascender;
            (delimiter, k_y, dy)
        });
        let center = (last.nominal_height() - height).scale(0.5);

        if let Some((mut delimiter, k_y, dy)) = left {
            debug!("left delimiter stretched by {}", k_y);
            let x = self.x;
            delimiter.scale(1., k_y);
            delimiter.shift(x, dy);
            let advance = delimiter.advance;

            self.shift(advance, Unit::ZERO);
            self.set_x(x);
            self.add_advance(advance, Unit::ZERO);

            let line = &mut self.lines_mut()[0];
            line.children.insert(0, delimiter.into());
            line.x        = x;
            line.advance += advance;
            line.update_min_max();
        }

        if let Some((mut delimiter, k_y, dy)) = right {
            debug!("right delimiter stretched by {}", k_y);
            delimiter.scale(1., k_y);
            let advance = delimiter.advance;

            if let Some(line) = self.lines_mut().last_mut() {
                delimiter.shift(line.x + line.advance, dy);
                line.shift(Unit::ZERO, center);
                line.push(delimiter);
                line.advance += advance;
                line.update_min_max();
            }
            self.add_advance(advance, center);
        }

        self.update_min_max();
    }
}
