//! # Vector4: Generic Four-Component Vector
//!
//! A `(x, y, z, w)` tuple over any [`Scalar`] with full vector algebra.
//! HyperNEAT substrates use it for 4-D node coordinates; integer
//! instantiations serve as grid indices.
//!
//! # Cross-type rules
//!
//! | Operation | Rule |
//! |-----------|------|
//! | `+`, `-`, `dot`, `distance*`, `project_on` | both fields promoted to `f64`, combined, result cast to `T` |
//! | `*`, `/`, unary `-` | same, with a `T` operand |
//! | `manhattan_distance` | rhs field cast to `T` first, absolute differences summed in `f64` |
//! | `eq_promoted`, `lt_promoted` | both sides promoted to `f64` |
//!
//! Casting back to `T` follows `as` semantics: integers truncate toward
//! zero and saturate at their bounds, so arithmetic on narrow integer
//! types never overflows. `i64`/`u64` values beyond 2^53 lose precision.

//! # Ordering
//!
//! `w` is the most significant field, `x` the least:
//!
//! ```text
//! a < b  ⇔  (a.w, a.z, a.y, a.x) < (b.w, b.z, b.y, b.x)   (lexicographic)
//! ```
//!
//! This makes `Vector4<i32>` usable as a `BTreeSet` / `BTreeMap` key.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::text::{TextConfig, TokenStream};
use crate::{Error, Result};
use super::Scalar;

/// Magnitudes at or below this are treated as zero by `normalize`.
pub const NORMALIZE_EPSILON: f64 = 1e-6;

/// A four-component vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Vector4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

// ============================================================================
// Construction and conversion
// ============================================================================

impl<T: Scalar> Vector4<T> {
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// All four fields set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converting construction: each field is cast with `as` semantics.
    ///
    /// ```
    /// use evo_primitives::Vector4;
    /// let v = Vector4::<i32>::cast_from(&Vector4::new(1.9, -1.9, 0.5, 7.0));
    /// assert_eq!(v, Vector4::new(1, -1, 0, 7));
    /// ```
    pub fn cast_from<U: AsPrimitive<T>>(other: &Vector4<U>) -> Self {
        Self::new(other.x.as_(), other.y.as_(), other.z.as_(), other.w.as_())
    }

    pub fn cast<U: Scalar>(&self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        Vector4::cast_from(self)
    }

    /// Converting assignment. The converted value is built first and then
    /// replaces `self` wholesale.
    pub fn assign_from<U: AsPrimitive<T>>(&mut self, other: &Vector4<U>) {
        let converted = Self::cast_from(other);
        *self = converted;
    }

    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn from_array([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }

    fn promoted(&self) -> Vector4<f64> {
        Vector4::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64(), self.w.to_f64())
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    fn from(v: [T; 4]) -> Self { Self::from_array(v) }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self { v.to_array() }
}

// ============================================================================
// Comparison
// ============================================================================

impl<T: Scalar> Vector4<T> {
    /// Exact field-wise equality across element types, compared in `f64`.
    pub fn eq_promoted<U: Scalar>(&self, other: &Vector4<U>) -> bool {
        self.promoted() == other.promoted()
    }

    pub fn ne_promoted<U: Scalar>(&self, other: &Vector4<U>) -> bool {
        !self.eq_promoted(other)
    }

    /// The w-major ordering across element types, compared in `f64`.
    pub fn lt_promoted<U: Scalar>(&self, other: &Vector4<U>) -> bool {
        self.promoted() < other.promoted()
    }
}

impl<T: PartialOrd + Copy> PartialOrd for Vector4<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.w, self.z, self.y, self.x).partial_cmp(&(other.w, other.z, other.y, other.x))
    }
}

impl<T: Ord + Copy> Ord for Vector4<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.w, self.z, self.y, self.x).cmp(&(other.w, other.z, other.y, other.x))
    }
}

// ============================================================================
// Geometry
// ============================================================================

impl<T: Scalar> Vector4<T> {
    /// Combine field pairs in `f64`, casting each result back to `T`.
    fn zip_f64<U: Scalar>(&self, other: &Vector4<U>, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            T::from_f64(f(self.x.to_f64(), other.x.to_f64())),
            T::from_f64(f(self.y.to_f64(), other.y.to_f64())),
            T::from_f64(f(self.z.to_f64(), other.z.to_f64())),
            T::from_f64(f(self.w.to_f64(), other.w.to_f64())),
        )
    }

    /// Sum of `f` over field pairs, accumulated in `f64`.
    fn sum_f64<U: Scalar>(&self, other: &Vector4<U>, f: impl Fn(f64, f64) -> f64) -> f64 {
        f(self.x.to_f64(), other.x.to_f64())
            + f(self.y.to_f64(), other.y.to_f64())
            + f(self.z.to_f64(), other.z.to_f64())
            + f(self.w.to_f64(), other.w.to_f64())
    }

    pub fn dot<U: Scalar>(&self, other: &Vector4<U>) -> T {
        T::from_f64(self.sum_f64(other, |a, b| a * b))
    }

    /// Saturates at `T`'s bounds; use [`magnitude`](Self::magnitude) when
    /// only the length matters.
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    pub fn magnitude(&self) -> T {
        T::from_f64(self.sum_f64(self, |a, b| a * b).sqrt())
    }

    /// Scale to unit length in place. Vectors with magnitude at or below
    /// [`NORMALIZE_EPSILON`] are left untouched.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag.to_f64() > NORMALIZE_EPSILON {
            *self /= mag;
        } else {
            trace!(magnitude = mag.to_f64(), "normalize skipped: magnitude below epsilon");
        }
    }

    pub fn normalize_copy(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// `other * (self · other / |other|)`, where the dot product is taken
    /// as a `T` and the rest in `f64`.
    ///
    /// A zero-length `other` has no direction: float results are
    /// non-finite, integer results collapse to 0.
    pub fn project_on<U: Scalar>(&self, other: &Vector4<U>) -> Self {
        let dp = self.dot(other).to_f64();
        let mag = other.sum_f64(other, |a, b| a * b).sqrt();
        let scale = dp / mag;
        Self::zero().zip_f64(other, |_, o| o * scale)
    }

    pub fn distance_squared<U: Scalar>(&self, other: &Vector4<U>) -> T {
        T::from_f64(self.distance_squared_f64(other))
    }

    pub fn distance<U: Scalar>(&self, other: &Vector4<U>) -> T {
        T::from_f64(self.distance_squared_f64(other).sqrt())
    }

    fn distance_squared_f64<U: Scalar>(&self, other: &Vector4<U>) -> f64 {
        self.sum_f64(other, |a, b| (a - b) * (a - b))
    }

    /// Distance to an explicit point. All four coordinates are required.
    pub fn distance_to_coords<U: Scalar>(&self, x: U, y: U, z: U, w: U) -> T {
        self.distance(&Vector4::new(x, y, z, w))
    }

    pub fn distance_squared_to_coords<U: Scalar>(&self, x: U, y: U, z: U, w: U) -> T {
        self.distance_squared(&Vector4::new(x, y, z, w))
    }

    /// Sum of absolute field differences. Unlike the other distances the
    /// rhs is cast to `T` before differencing.
    pub fn manhattan_distance<U: AsPrimitive<T>>(&self, other: &Vector4<U>) -> T {
        let o = Self::cast_from(other);
        T::from_f64(self.sum_f64(&o, |a, b| (a - b).abs()))
    }
}

// ============================================================================
// Arithmetic operators
// ============================================================================

impl<T: Scalar + Neg<Output = T>> Neg for Vector4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.zip_f64(&self, |a, _| -a)
    }
}

impl<T: Scalar, U: Scalar> Add<Vector4<U>> for Vector4<T> {
    type Output = Self;
    fn add(self, rhs: Vector4<U>) -> Self {
        self.zip_f64(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar, U: Scalar> Sub<Vector4<U>> for Vector4<T> {
    type Output = Self;
    fn sub(self, rhs: Vector4<U>) -> Self {
        self.zip_f64(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar, U: Scalar> AddAssign<Vector4<U>> for Vector4<T> {
    fn add_assign(&mut self, rhs: Vector4<U>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, U: Scalar> SubAssign<Vector4<U>> for Vector4<T> {
    fn sub_assign(&mut self, rhs: Vector4<U>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;
    fn mul(self, coeff: T) -> Self {
        self.zip_f64(&Self::splat(coeff), |a, c| a * c)
    }
}

/// Integer division by zero saturates (`x / 0` is `T::MAX` or `T::MIN`
/// by sign, `0 / 0` is 0) instead of panicking.
impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;
    fn div(self, divisor: T) -> Self {
        self.zip_f64(&Self::splat(divisor), |a, d| a / d)
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    fn mul_assign(&mut self, coeff: T) {
        *self = *self * coeff;
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    fn div_assign(&mut self, divisor: T) {
        *self = *self / divisor;
    }
}

// ============================================================================
// Free conversion
// ============================================================================

/// Anything that exposes four components in x, y, z, w order.
pub trait HasXyzw {
    type Component: Copy + 'static;

    fn xyzw(&self) -> [Self::Component; 4];
}

impl<S: Copy + 'static> HasXyzw for Vector4<S> {
    type Component = S;
    fn xyzw(&self) -> [S; 4] { [self.x, self.y, self.z, self.w] }
}

impl<S: Copy + 'static> HasXyzw for [S; 4] {
    type Component = S;
    fn xyzw(&self) -> [S; 4] { *self }
}

impl<S: Copy + 'static> HasXyzw for (S, S, S, S) {
    type Component = S;
    fn xyzw(&self) -> [S; 4] { [self.0, self.1, self.2, self.3] }
}

/// Build a `Vector4<T>` from any four-component value, casting each field.
pub fn convert_vector4<T, V>(value: &V) -> Vector4<T>
where
    T: Scalar,
    V: HasXyzw + ?Sized,
    V::Component: AsPrimitive<T>,
{
    let [x, y, z, w] = value.xyzw();
    Vector4::new(x.as_(), y.as_(), z.as_(), w.as_())
}

// ============================================================================
// Text I/O: "x y z w"
// ============================================================================

impl<T: Scalar> Vector4<T> {
    /// Consume four tokens in x, y, z, w order.
    pub fn read_from(tokens: &mut TokenStream<'_>) -> Result<Self> {
        let x = tokens.read()?;
        let y = tokens.read()?;
        let z = tokens.read()?;
        let w = tokens.read()?;
        Ok(Self::new(x, y, z, w))
    }
}

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.z, self.w)
    }
}

/// Strict: exactly four well-formed tokens.
impl<T: Scalar> FromStr for Vector4<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = TokenStream::with_config(s, TextConfig::strict());
        let v = Self::read_from(&mut tokens)?;
        tokens.expect_end()?;
        Ok(v)
    }
}
