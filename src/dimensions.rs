//! Lengths tagged with their unit (design units, em, pixels).
//!
//! Face records come in design units, layout trees are in em and painters work in pixels:
//! keeping the unit in the type catches a missing normalization at compile time.
//! Conversions go through [`Ratio`](units::Ratio) factors, e.g. `Unit<FUnit> * Unit<Ratio<Em, FUnit>> = Unit<Em>`.


use std::ops::{Add, Sub, Mul, AddAssign, SubAssign, Div, Neg};
use std::cmp::{PartialEq, PartialOrd};
use std::fmt::{Display, Debug};
use std::iter::Sum;

use self::units::Ratio;
pub mod units;

/// A f64 value with its unit represented in the type
pub struct Unit<U> {
    value : f64,
    _phantom : std::marker::PhantomData<U>,
}


impl<U> PartialEq for Unit<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value)
    }
}

impl<U> PartialOrd for Unit<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U> Clone for Unit<U> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<U> Copy for Unit<U> {}

impl<U> Debug for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<U>();
        let unit = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "{}{}", self.value, unit)
    }
}

impl<U> Display for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}


impl<U> Unit<U> {
    /// The zero value
    pub const ZERO : Self = Self::new(0.);
    /// Below every finite value, the seed of a maximum over lengths
    pub const NEG_INFINITY : Self = Self::new(f64::NEG_INFINITY);
    /// Above every finite value, the seed of a minimum over lengths
    pub const INFINITY : Self = Self::new(f64::INFINITY);

    /// Creates a value with unit from a unit-less value.
    /// To be used with care: you need to manually check that the value you pass is indeed in the right dimension.
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData
        }
    }

    /// Is quantity equal to zero?
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Converts a value to a unit-less value ("unsafe" since it removes information about dimensions)
    #[inline]
    pub const fn to_unitless(self) -> f64
    { self.value }

    /// Like [`Unit::to_unitless`] but explicitly asks for the dimension to avoid errors
    #[inline]
    pub fn unitless(self, _unit : U) -> f64
    { self.to_unitless() }

    /// Multiply value by a unitless value
    pub fn scale(self, scale : f64) -> Self {
        Self::new(self.value * scale)
    }

    /// Equivalent to [`f64::min`] for values with units
    pub fn min(self, other : Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Equivalent to [`f64::max`] for values with units
    pub fn max(self, other : Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// Equivalent to [`f64::abs`] for values with units
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Unitless quotient `self / other`, for two lengths expressed in the same unit.
    pub fn ratio(self, other : Self) -> f64 {
        (self / other).as_unitless()
    }
}

impl<U> Unit<Ratio<U, U>> {
    /// Converts a unitless value to a float
    pub const fn as_unitless(self) -> f64 {
        self.to_unitless()
    }
}

impl<U, V> Unit<Ratio<U, V>> {
    /// Inverts a ratio going from `x` (unit: U/V) to `1/x` (unit: V/U)
    #[inline]
    pub fn recip(self) -> Unit<Ratio<V, U>> {
        Unit::<Ratio<V, U>>::new(self.value.recip())
    }
}

impl<U> Add for Unit<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<U> Sub for Unit<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<U> Neg for Unit<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(- self.value)
    }
}

impl<U> AddAssign for Unit<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U> SubAssign for Unit<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}


impl<U, V> Mul<Unit<Ratio<U, V>>> for Unit<V> {
    type Output = Unit<U>;

    fn mul(self, rhs: Unit<Ratio<U, V>>) -> Self::Output {
        Unit::<U>::new(self.value * rhs.value)
    }
}


impl<U, V> Div<Unit<V>> for Unit<U> {
    type Output = Unit<Ratio<U, V>>;

    fn div(self, rhs: Unit<V>) -> Self::Output {
        Unit::<Ratio<U, V>>::new(self.value / rhs.value)
    }
}


impl<U> Sum for Unit<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(
            Unit::ZERO,
            |a, b| a + b
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::units::{Em, FUnit};

    #[test]
    fn design_units_convert_to_em() {
        let units_per_em = Unit::<Ratio<FUnit, Em>>::new(1000.);
        let ascender = Unit::<FUnit>::new(800.);
        let em : Unit<Em> = ascender * units_per_em.recip();
        assert!((em.to_unitless() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn ratio_of_same_unit_is_unitless() {
        let a = Unit::<Em>::new(3.);
        let b = Unit::<Em>::new(4.);
        assert_eq!(a.ratio(b), 0.75);
        assert_eq!(Unit::max(a, b), b);
        assert_eq!(Unit::min(a, b), a);
        assert_eq!(vec![a, b].into_iter().sum::<Unit<Em>>(), Unit::new(7.));
    }

    #[test]
    fn infinities_seed_folds() {
        let lengths = [Unit::<Em>::new(-1.), Unit::new(2.)];
        assert_eq!(lengths.iter().copied().fold(Unit::NEG_INFINITY, Unit::max), Unit::new(2.));
        assert_eq!(lengths.iter().copied().fold(Unit::INFINITY, Unit::min), Unit::new(-1.));
        assert_eq!(format!("{:?}", lengths[1]), "2Em");
    }
}
