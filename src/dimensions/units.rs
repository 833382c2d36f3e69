//! Defines the units relevant to math layout: font units, em and pixels
//!
//! The conversions between these are not fixed:
//!    - the factor between [`FUnit`] and [`Em`] is specified in the font file (units per em) and travels with [`FaceMetrics`](crate::font::FaceMetrics).
//!    - the factor between [`Em`] and [`Px`] is the font size chosen when painting a layout.

// ------------------------- BASIC UNITS --------------------------------

/// Smallest virtual units that the font file can address (so every dimension in the font file is given as an integer number in FUnit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FUnit;

/// A virtual unit, bigger than [`FUnit`], conventionally corresponding to:
///
///  - width of an em-dash and an em-space character
///  - line separation
///  - (historically but no longer true), width of an upper case M
///
/// Every length in a layout tree is expressed in em, i.e. divided by the face's units per em.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Em;


/// Final texture pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Px;


/// Font size is expressed in px / em
pub type FontSize = Ratio<Px, Em>;

// ------------------- UNIT COMBINATORS -------------------------

/// If U is a unit and V is a unit, Ratio<U, V> is the unit U . V⁻¹
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio<U, V> {
	_numerator    : std::marker::PhantomData<U>,
	_denominator  : std::marker::PhantomData<V>,
}

