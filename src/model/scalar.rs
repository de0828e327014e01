//! Numeric element contract shared by the generic value types.

use std::fmt;
use std::str::FromStr;

use num_traits::Num;

/// A numeric element usable inside `Vector4` and friends.
///
/// Covers every primitive integer and float. Conversions through `f64`
/// follow `as` semantics: float → integer truncates toward zero and
/// saturates at the target bounds, NaN becomes 0.
pub trait Scalar:
    Num + Copy + PartialOrd + Default + fmt::Debug + fmt::Display + FromStr + 'static
{
    fn to_f64(self) -> f64;

    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn to_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn from_f64(v: f64) -> Self { v as $t }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
