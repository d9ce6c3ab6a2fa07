use std::{cmp::Ordering, slice};

use tracing::{debug, trace};

use crate::{
    form::{
        core::{Form, Numeric},
        embed::{left_option, right_option},
    },
    util::num::{is_fractional, round_half_up},
};

/// One side of a comparison.
///
/// Integers stay unexpanded: their left and right sets are produced on
/// demand from the canonical embedding.
#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    Whole(i64),
    Form(&'a Form),
}

impl<'a> From<&'a Numeric> for Operand<'a> {
    fn from(value: &'a Numeric) -> Self {
        match value {
            Numeric::Integer(n) => Self::Whole(i64::from(*n)),
            Numeric::Form(form) => Self::Form(form),
        }
    }
}

impl<'a> Operand<'a> {
    fn left_options(self) -> Options<'a> {
        match self {
            Self::Whole(n) => Options::Embedded(left_option(n)),
            Self::Form(form) => Options::Listed(form.left().iter()),
        }
    }

    fn right_options(self) -> Options<'a> {
        match self {
            Self::Whole(n) => Options::Embedded(right_option(n)),
            Self::Form(form) => Options::Listed(form.right().iter()),
        }
    }
}

/// Boundary elements of an operand, rounded to whole numbers.
enum Options<'a> {
    Embedded(Option<i64>),
    Listed(slice::Iter<'a, f64>),
}

impl Iterator for Options<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self {
            Self::Embedded(option) => option.take(),
            Self::Listed(elements) => {
                let element = *elements.next()?;
                let rounded = round_half_up(element);
                if is_fractional(element) {
                    debug!(element, rounded, "rounding fractional boundary element");
                }
                Some(rounded)
            },
        }
    }
}

/// `x ≤ y` over operands.
///
/// Two whole numbers compare natively. Expanding both embeddings gives the
/// same answer (by induction on `|a| + |b|`), and short-circuiting keeps the
/// recursion at most four frames deep whatever the magnitudes involved.
fn operand_le(x: Operand<'_>, y: Operand<'_>) -> bool {
    if let (Operand::Whole(a), Operand::Whole(b)) = (x, y) {
        return a <= b;
    }

    for xl in x.left_options() {
        if operand_le(y, Operand::Whole(xl)) {
            trace!(?x, ?y, xl, "left option of x is not below y");
            return false;
        }
    }
    for yr in y.right_options() {
        if operand_le(Operand::Whole(yr), x) {
            trace!(?x, ?y, yr, "right option of y is not above x");
            return false;
        }
    }
    true
}

/// Returns `true` if `x ≤ y`.
///
/// For `x = {XL|XR}` and `y = {YL|YR}`, `x ≤ y` holds when no `xl` in `XL`
/// has `y ≤ xl`, and no `yr` in `YR` has `yr ≤ x`. Boundary elements are
/// rounded half up to whole numbers and embedded before recursing, so only
/// integer-valued boundaries are resolved exactly: `{0.4|}` is treated as
/// `{0|}`. Integers are embedded before the rule is applied.
///
/// # Example
/// ```
/// use forma::{Form, Numeric, less_or_equal};
///
/// let half = Numeric::Form(Form::from_sets([0], [1]));
/// assert!(less_or_equal(&Numeric::Integer(0), &half));
/// assert!(!less_or_equal(&half, &Numeric::Integer(0)));
/// ```
#[must_use]
pub fn less_or_equal(x: &Numeric, y: &Numeric) -> bool {
    let result = operand_le(x.into(), y.into());
    debug!(%x, %y, result, "less_or_equal");
    result
}

/// Returns `true` if `x ≤ y` and `y ≤ x`.
///
/// # Example
/// ```
/// use forma::{Form, Numeric, equal};
///
/// assert!(equal(&Numeric::Form(Form::new()), &Numeric::Integer(0)));
/// ```
#[must_use]
pub fn equal(x: &Numeric, y: &Numeric) -> bool {
    less_or_equal(x, y) && less_or_equal(y, x)
}

/// Three-way comparison derived from [`less_or_equal`].
///
/// `Equal` if [`equal`], otherwise `Less` if `x ≤ y`, otherwise `Greater`.
/// Sorting with it is consistent for well-formed values (see
/// [`Form::is_well_formed`]). An ill-formed form that is incomparable with
/// `y` comes out `Greater` both ways round.
#[must_use]
pub fn compare(x: &Numeric, y: &Numeric) -> Ordering {
    if equal(x, y) {
        Ordering::Equal
    } else if less_or_equal(x, y) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// [`compare`] as `-1`, `0` or `1`.
///
/// # Example
/// ```
/// use forma::{Form, Numeric, compare_sign};
///
/// let x = Numeric::Form(Form::from_sets([0], [1]));
/// assert_eq!(compare_sign(&x, &Numeric::Integer(0)), 1);
/// assert_eq!(compare_sign(&Numeric::Integer(0), &x), -1);
/// ```
#[must_use]
pub fn compare_sign(x: &Numeric, y: &Numeric) -> i8 {
    compare(x, y) as i8
}

impl Form {
    /// Returns `true` if every left element is strictly below every right
    /// element under the order relation.
    ///
    /// Elements are rounded the same way the relation rounds them, so
    /// `{0.2|0.3}` is ill-formed: both sides round to `0`.
    ///
    /// # Example
    /// ```
    /// use forma::Form;
    ///
    /// assert!(Form::from_sets([-1, 0], [1]).is_well_formed());
    /// assert!(!Form::from_sets([0], [0]).is_well_formed());
    /// ```
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let operand = Operand::Form(self);
        operand.left_options()
               .all(|l| operand.right_options().all(|r| !operand_le(Operand::Whole(r), Operand::Whole(l))))
    }
}
