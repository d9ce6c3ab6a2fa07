/// The `Form` and `Numeric` types.
///
/// Defines the composite value built from a left and right set of real
/// boundary elements, the two-variant `Numeric` sum over integers and forms,
/// construction helpers and the `{l|r}` display notation.
pub mod core;
/// Canonical embedding of integers into forms.
///
/// Every integer `n` has a fixed form with at most one boundary element.
/// This is the only bridge from `Numeric::Integer` to `Form`.
pub mod embed;
/// The recursive order relation.
///
/// Implements `≤` over forms and integers, together with the equality and
/// three-way comparison derived from it.
pub mod relation;
