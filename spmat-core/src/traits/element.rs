//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

/// Trait for types that can be stored as matrix elements
///
/// Arithmetic is checked: integer types report overflow as `None`, floating
/// point types follow IEEE-754 and always succeed. Sums are checked term by
/// term, so an intermediate that leaves the type's range is an overflow even
/// if later terms would bring the total back in range.
pub trait MatrixElement: Copy + PartialEq + core::fmt::Debug + Sized {
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Whether this value must be dropped from sparse storage
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_integer_element!(i32, i64, u32, u64);
impl_float_element!(f32, f64);
