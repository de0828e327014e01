//! BoundedValue: a `(current, maximum)` progress pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text::{TextConfig, TokenStream};
use crate::{Error, Result};
use super::Scalar;

/// A current value paired with its limit.
///
/// Nothing ties the two together: `current` may exceed `maximum`, and the
/// owner mutates both freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedValue<T> {
    pub current: T,
    pub maximum: T,
}

impl<T> BoundedValue<T> {
    pub const fn new(current: T, maximum: T) -> Self {
        Self { current, maximum }
    }
}

impl<T: Scalar> BoundedValue<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// At capacity: `current == maximum == value`.
    pub fn full(value: T) -> Self {
        Self::new(value, value)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// `current / maximum` in `f64`. Non-finite when `maximum` is zero.
    pub fn fraction(&self) -> f64 {
        self.current.to_f64() / self.maximum.to_f64()
    }

    /// Consume two tokens: current, then maximum.
    pub fn read_from(tokens: &mut TokenStream<'_>) -> Result<Self> {
        let current = tokens.read()?;
        let maximum = tokens.read()?;
        Ok(Self::new(current, maximum))
    }
}

impl<T: fmt::Display> fmt::Display for BoundedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.current, self.maximum)
    }
}

impl<T: Scalar> FromStr for BoundedValue<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = TokenStream::with_config(s, TextConfig::strict());
        let value = Self::read_from(&mut tokens)?;
        tokens.expect_end()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(BoundedValue::<u32>::zero(), BoundedValue::new(0, 0));
        assert_eq!(BoundedValue::<u32>::default(), BoundedValue::zero());
        assert_eq!(BoundedValue::full(5), BoundedValue::new(5, 5));
    }

    #[test]
    fn test_no_bounds_enforcement() {
        let mut v = BoundedValue::new(3, 10);
        v.current = 15;
        assert_eq!(v, BoundedValue::new(15, 10));
        assert!(v.is_full());
        assert!(!BoundedValue::new(3, 10).is_full());
    }

    #[test]
    fn test_fraction() {
        assert_eq!(BoundedValue::new(3u8, 12).fraction(), 0.25);
        assert!(BoundedValue::new(1, 0).fraction().is_infinite());
    }

    #[test]
    fn test_text_form() {
        let v = BoundedValue::new(3, 10);
        assert_eq!(v.to_string(), "3 10");
        assert_eq!("3 10".parse::<BoundedValue<i32>>().unwrap(), v);
        assert_eq!("  2.5\n5".parse::<BoundedValue<f32>>().unwrap(), BoundedValue::new(2.5, 5.0));
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!(matches!("3".parse::<BoundedValue<i32>>(), Err(Error::MissingToken { position: 1, .. })));
        assert!(matches!("3 ten".parse::<BoundedValue<i32>>(), Err(Error::Parse { .. })));
        assert!(matches!("3 10 11".parse::<BoundedValue<i32>>(), Err(Error::TrailingInput(_))));
    }

    #[test]
    fn test_read_from_lenient() {
        let mut tokens = TokenStream::new("ten 10");
        assert_eq!(BoundedValue::<i32>::read_from(&mut tokens).unwrap(), BoundedValue::new(0, 10));
    }
}
