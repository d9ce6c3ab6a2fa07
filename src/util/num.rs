/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use forma::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Rounds a boundary element to the nearest whole number, ties upward.
///
/// This is the rounding the order relation applies before it embeds a
/// boundary element: `2.5` becomes `3` and `-2.5` becomes `-2`. `NaN` maps
/// to `0` and values outside the `i64` range saturate.
///
/// ## Example
/// ```
/// use forma::util::num::round_half_up;
///
/// assert_eq!(round_half_up(0.4), 0);
/// assert_eq!(round_half_up(0.5), 1);
/// assert_eq!(round_half_up(-0.5), 0);
/// assert_eq!(round_half_up(-1.5), -1);
/// assert_eq!(round_half_up(f64::NAN), 0);
/// assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // `value - floor` is exact, unlike `(value + 0.5).floor()` which rounds
    // 0.49999999999999994 up to 1.
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Returns `true` if the boundary element carries a fractional part that
/// rounding will discard.
#[must_use]
pub fn is_fractional(value: f64) -> bool {
    value.is_finite() && value.fract() != 0.0
}
