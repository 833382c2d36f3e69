//! Defines geometric primitives
//! Currently only defines bbox, the ink box of every node of a layout tree

use crate::dimensions::Unit;

/// A generic bounding box for a 2D coordinate system, parameterized by unit type.
/// When used to store typographical measurements, i.e. a glyph's ink box, the baseline on which glyphs sit is at y=0 and y grows upwards.
pub struct BBox<U> {
    /// minimal x-value
    pub x_min : Unit<U>,
    /// maximal x-value
    pub x_max : Unit<U>,
    /// minimal y-value
    pub y_min : Unit<U>,
    /// maximal y-value
    pub y_max : Unit<U>,
}

impl<U> Clone for BBox<U> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<U> Copy for BBox<U> {}

impl<U> PartialEq for BBox<U> {
    fn eq(&self, other: &Self) -> bool {
        self.x_min == other.x_min
            && self.x_max == other.x_max
            && self.y_min == other.y_min
            && self.y_max == other.y_max
    }
}

impl<U> std::fmt::Debug for BBox<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BBox([{}, {}] x [{}, {}])", self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

impl<U> BBox<U> {
    /// Creates new bbox from coordinates of extremal points
    /// Does not check the invariant that `x_min <= x_max` and `y_min <= y_max`
    pub fn new(x_min: Unit<U>, y_min: Unit<U>, x_max: Unit<U>, y_max: Unit<U>) -> Self {
        debug_assert!(x_min <= x_max);
        debug_assert!(y_min <= y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    /// The neutral element of [`BBox::union`]: its extremes are infinite and inverted.
    pub fn empty() -> Self {
        Self {
            x_min : Unit::INFINITY,
            x_max : Unit::NEG_INFINITY,
            y_min : Unit::INFINITY,
            y_max : Unit::NEG_INFINITY,
        }
    }

    /// True for [`BBox::empty`] and anything with inverted extremes.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// The box an ink-less glyph occupies: its advance along the baseline, zero height.
    pub fn baseline_span(x : Unit<U>, advance : Unit<U>) -> Self {
        Self {
            x_min : x, x_max : x + advance,
            y_min : Unit::ZERO, y_max : Unit::ZERO,
        }
    }

    /// Creates a bbox corresponding to a zero-width zero-height point
    pub fn single_point(x : Unit<U>, y : Unit<U>) -> Self {
        Self {
            x_min : x, x_max : x,
            y_min : y, y_max : y,
        }
    }

    /// Moves the box by `t_x` horizontally and `t_y` vertically
    pub fn translate(&self, t_x : Unit<U>, t_y : Unit<U>) -> Self {
        Self {
            x_min: self.x_min + t_x,
            x_max: self.x_max + t_x,
            y_min: self.y_min + t_y,
            y_max: self.y_max + t_y,
        }
    }

    /// Scales about the origin, x-extremes by `k_x` and y-extremes by `k_y`.
    pub fn scale_xy(&self, k_x : f64, k_y : f64) -> Self {
        Self {
            x_min: self.x_min.scale(k_x),
            x_max: self.x_max.scale(k_x),
            y_min: self.y_min.scale(k_y),
            y_max: self.y_max.scale(k_y),
        }
    }

    /// Creates the smallest bbox containing `self` and `other`
    pub fn union(&self, other: Self) -> Self {
        Self {
            x_min : Unit::min(self.x_min, other.x_min),
            x_max : Unit::max(self.x_max, other.x_max),
            y_min : Unit::min(self.y_min, other.y_min),
            y_max : Unit::max(self.y_max, other.y_max),
        }
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, x : Unit<U>, y : Unit<U>) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    /// Width of the bounding box
    pub fn width(&self) -> Unit<U> {
        self.x_max - self.x_min
    }

    /// The geometric height: the unsigned distance between the top of the box and the bottom of the box
    pub fn total_height(&self) -> Unit<U> {
        self.y_max - self.y_min
    }

    /// Checks if 2 bboxes are approximately the same, i.e. the four coordinates differ by at most `epsilon`.
    pub fn close_to(&self, other: &Self, epsilon: f64) -> bool {
        (self.x_min - other.x_min).abs().to_unitless() <= epsilon &&
        (self.x_max - other.x_max).abs().to_unitless() <= epsilon &&
        (self.y_min - other.y_min).abs().to_unitless() <= epsilon &&
        (self.y_max - other.y_max).abs().to_unitless() <= epsilon
    }
}
