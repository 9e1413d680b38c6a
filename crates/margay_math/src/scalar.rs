//! Scalar helpers: comparisons, interpolation and simple statistics over slices.

use crate::*;

const LOG_CAT: &str = "margay::scalar";

/// Get the absolute value of a number
#[inline]
#[must_use]
pub fn abs<T: Numeric>(val: T) -> T {
    val.abs()
}

/// Get the smallest of 2 numbers
#[inline]
#[must_use]
pub fn min<T: Numeric>(a: T, b: T) -> T {
    a.min(b)
}

/// Get the largest of 2 numbers
#[inline]
#[must_use]
pub fn max<T: Numeric>(a: T, b: T) -> T {
    a.max(b)
}

/// Get the sign of a number: 0 for 0, +1 for positive, and -1 for negative
#[inline]
#[must_use]
pub fn sign<T: Numeric>(val: T) -> T {
    val.sign()
}

/// Clamp a value to the inclusive range `[min, max]`
#[inline]
#[must_use]
pub fn clamp<T: Numeric>(val: T, min: T, max: T) -> T {
    val.clamp(min, max)
}

/// Swap 2 values
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b)
}

/// Check if 2 numbers are within the default tolerance of each other
#[inline]
#[must_use]
pub fn approx_eq<T: Numeric>(a: T, b: T) -> bool {
    a.is_approx_eq(b)
}

/// Check if 2 numbers are within `tolerance` of each other
#[inline]
#[must_use]
pub fn approx_eq_with<T: Numeric>(a: T, b: T, tolerance: T) -> bool {
    a.is_close_to(b, tolerance)
}

/// Convert degrees to radians
#[inline]
#[must_use]
pub fn deg_to_rad<T: Real>(deg: T) -> T {
    deg * T::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
#[must_use]
pub fn rad_to_deg<T: Real>(rad: T) -> T {
    rad * T::RAD_TO_DEG
}

//------------------------------------------------------------------------------------------------------------------------------

/// Linearly interpolate between `a` and `b`
#[inline]
#[must_use]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between `a` and `b`, easing in and out along half a cosine period
#[inline]
#[must_use]
pub fn cosine_interpolate<T: Real>(a: T, b: T, t: T) -> T {
    let two = T::one() + T::one();
    let mu = (T::one() - (t * T::PI).cos()) / two;
    lerp(a, b, mu)
}

/// Interpolate between `a` and `b` using a cubic hermite curve with zero tangents at both ends
#[inline]
#[must_use]
pub fn cubic_interpolate<T: Real>(a: T, b: T, t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let mu = t * t * (three - two * t);
    lerp(a, b, mu)
}

//------------------------------------------------------------------------------------------------------------------------------

fn reduce<T: Numeric>(values: &[T], what: &'static str, pick: impl Fn(T, T) -> T) -> Result<T> {
    let (first, rest) = values.split_first().ok_or(Error::InvalidArgument(what))?;
    Ok(rest.iter().fold(*first, |acc, val| pick(acc, *val)))
}

/// Get the smallest value in a slice
pub fn min_of<T: Numeric>(values: &[T]) -> Result<T> {
    reduce(values, "minimum of an empty slice", |a, b| a.min(b))
}

/// Get the largest value in a slice
pub fn max_of<T: Numeric>(values: &[T]) -> Result<T> {
    reduce(values, "maximum of an empty slice", |a, b| a.max(b))
}

/// Get the smallest absolute value in a slice
pub fn min_abs_of<T: Numeric>(values: &[T]) -> Result<T> {
    reduce(values, "minimum absolute value of an empty slice", |a, b| a.abs().min(b.abs()))
        .map(|val| val.abs())
}

/// Get the largest absolute value in a slice
pub fn max_abs_of<T: Numeric>(values: &[T]) -> Result<T> {
    reduce(values, "maximum absolute value of an empty slice", |a, b| a.abs().max(b.abs()))
        .map(|val| val.abs())
}

/// Sum all values in a slice, an empty slice sums to 0
#[must_use]
pub fn sum<T: Numeric>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, val| acc + *val)
}

/// Calculate the arithmetic mean of a slice
pub fn mean<T: Numeric>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::InvalidArgument("mean of an empty slice"));
    }
    let total = values.iter().fold(0f64, |acc, val| acc + val.to_f64());
    Ok(total / values.len() as f64)
}

/// Calculate the population variance of a slice
pub fn variance<T: Numeric>(values: &[T]) -> Result<f64> {
    let mean = mean(values)?;
    let total = values.iter().fold(0f64, |acc, val| {
        let diff = val.to_f64() - mean;
        acc + diff * diff
    });
    Ok(total / values.len() as f64)
}

/// Calculate the population standard deviation of a slice
pub fn std_dev<T: Numeric>(values: &[T]) -> Result<f64> {
    variance(values).map(f64::sqrt)
}

/// Take the square root of each value in a slice
pub fn sqrt_each<T: Real>(values: &[T]) -> Result<Vec<T>> {
    if values.is_empty() {
        return Err(Error::InvalidArgument("square root of an empty slice"));
    }
    if values.iter().any(|val| *val < T::zero()) {
        log::trace!(target: LOG_CAT, "square root of a negative value produces NaN");
    }
    Ok(values.iter().map(|val| val.sqrt()).collect())
}
