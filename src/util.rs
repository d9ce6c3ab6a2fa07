/// Numeric conversion helpers.
///
/// This module holds the conversions between `i64` and `f64` that the value
/// model and the reader depend on: lossless widening of integer literals,
/// and the "round half up" mapping that turns a real boundary element into
/// the whole number the order relation recurses on.
pub mod num;
