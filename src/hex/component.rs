use num::{NumCast, Signed};
use std::fmt;

/// A numeric type which can serve as one axis of a [`HexCoord`][super::HexCoord].
///
/// Integers identify cells; floats are useful for intermediate math such as
/// scaling or interpolation, after which [`HexCoord::round`][super::HexCoord::round]
/// snaps back to a cell.
pub trait Component: Signed + NumCast + Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Round to the nearest integral value. Exact halves round to the even neighbor.
    fn round_half_even(self) -> Self;

    /// `0` when this value is even, `1` when it is odd.
    ///
    /// Never negative: `-3` is odd, so its parity is `1`.
    fn parity(self) -> Self;

    /// Divide by two.
    ///
    /// Integers floor toward negative infinity.
    fn halve(self) -> Self;

    /// `2` in this type.
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_integer_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn round_half_even(self) -> Self {
                    self
                }

                #[inline]
                fn parity(self) -> Self {
                    self.rem_euclid(2)
                }

                #[inline]
                fn halve(self) -> Self {
                    self.div_euclid(2)
                }
            }
        )*
    };
}

macro_rules! impl_float_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn round_half_even(self) -> Self {
                    self.round_ties_even()
                }

                #[inline]
                fn parity(self) -> Self {
                    self.rem_euclid(2.0)
                }

                #[inline]
                fn halve(self) -> Self {
                    self / 2.0
                }
            }
        )*
    };
}

impl_integer_component!(i8, i16, i32, i64, i128, isize);
impl_float_component!(f32, f64);
