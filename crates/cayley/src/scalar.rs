//! Traits that govern the scalar data type carried by blades
//!
//! Building a Cayley table only ever multiplies, negates and compares blade factors,
//! so the factor datatype needs to be a [Ring] for nearly everything.
//! [Inversion](crate::algebraic_ops::Inverse) additionally needs [Recip].

use core::ops::{Add, Mul, Neg, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication,
/// and which can be ordered against zero.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, and `i8` through `i128`
///
/// The ordering is only used to read off the sign of a factor,
/// e.g. to decide whether a blade squares to a negative number.
pub trait Ring:
    Clone
    + Copy
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + PartialOrd
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;

    /// Truncate to an integer, like a C cast
    fn to_integer(self) -> isize;

    /// -1, 0 or 1 depending on the sign of the scalar
    fn sign(self) -> i32 {
        if self > Self::zero() {
            1
        } else if self < Self::zero() {
            -1
        } else {
            0
        }
    }
}

/// A scalar datatype whose reciprocal can be taken.
///
/// Blade inversion divides the product of the basis vector squares by the blade's factor.
///
/// `Recip` comes implemented for `f32` → `f32` and `f64` → `f64`,
/// and for the signed integers, where it truncates (so it is only exact for ±1).
///
/// ## `recip()` of `0`
///
/// Blade inversion checks for a zero factor and returns
/// [NotInvertible](crate::Error::NotInvertible) before calling `recip()`,
/// so implementations never see a zero from within the library.
pub trait Recip {
    type Output;
    fn recip(self) -> Self::Output;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
            fn to_integer(self) -> isize {
                self as isize
            }
        }

        impl Recip for $type {
            type Output = $type;

            fn recip(self) -> $type {
                self.recip()
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i.try_into().expect("Integer out of range")
            }
            fn to_integer(self) -> isize {
                self as isize
            }
        }

        impl Recip for $type {
            type Output = $type;

            fn recip(self) -> $type {
                1 / self
            }
        }
    };
}

impl_for_int!(i8);
impl_for_int!(i16);
impl_for_int!(i32);
impl_for_int!(i64);
impl_for_int!(i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign() {
        assert_eq!((-2.5f64).sign(), -1);
        assert_eq!(0.0f32.sign(), 0);
        assert_eq!(7i64.sign(), 1);
    }

    #[test]
    fn integer_recip_is_exact_for_units() {
        assert_eq!(Recip::recip(1i32), 1);
        assert_eq!(Recip::recip(-1i32), -1);
    }

    #[test]
    fn to_integer_truncates() {
        assert_eq!((-1.0f64).to_integer(), -1);
        assert_eq!(0.75f32.to_integer(), 0);
        assert_eq!(<i16 as Ring>::from_integer(-3).to_integer(), -3);
    }
}
