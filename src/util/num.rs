/// Encodes a boolean as `1.0` (true) or `0.0` (false).
///
/// ## Example
/// ```
/// use rpnexpr::util::num::bool_to_f64;
///
/// assert_eq!(bool_to_f64(true), 1.0);
/// assert_eq!(bool_to_f64(false), 0.0);
/// ```
#[must_use]
pub const fn bool_to_f64(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

/// Decodes a numeric value as a boolean: anything non-zero is true.
///
/// `NaN` is non-zero and therefore decodes as `true`.
///
/// ## Example
/// ```
/// use rpnexpr::util::num::f64_to_bool;
///
/// assert!(f64_to_bool(1.0));
/// assert!(f64_to_bool(-0.5));
/// assert!(!f64_to_bool(0.0));
/// assert!(!f64_to_bool(-0.0));
/// ```
#[must_use]
pub fn f64_to_bool(value: f64) -> bool {
    value != 0.0
}
