use std::fmt::{self, Display};

use ordered_float::OrderedFloat;

use crate::form::relation::{equal, less_or_equal};

/// A value defined by a left set bounding it from below and a right set
/// bounding it from above.
///
/// Both sets keep their insertion order, which only matters for display.
/// Duplicates and unsorted elements are allowed. `Form::new()` is the
/// canonical zero, written `{|}`.
///
/// Forms are compared through [`Numeric`], never structurally.
#[derive(Debug, Clone, Default)]
pub struct Form {
    left:  Vec<f64>,
    right: Vec<f64>,
}

impl Form {
    /// Creates the empty form `{|}`.
    #[must_use]
    pub const fn new() -> Self {
        Self { left:  Vec::new(),
               right: Vec::new(), }
    }

    /// Builds a form from both boundary sets at once.
    ///
    /// # Example
    /// ```
    /// use forma::Form;
    ///
    /// let half = Form::from_sets([0], [1]);
    /// assert_eq!(half.to_string(), "{0.0|1.0}");
    /// ```
    #[must_use]
    pub fn from_sets<L, R>(left: L, right: R) -> Self
        where L: IntoIterator,
              L::Item: Into<f64>,
              R: IntoIterator,
              R::Item: Into<f64>
    {
        let mut form = Self::new();
        form.append_left(left).append_right(right);
        form
    }

    /// Appends every given number to the left set, in the order given.
    ///
    /// Integers are widened to `f64`.
    ///
    /// # Example
    /// ```
    /// use forma::Form;
    ///
    /// let mut y = Form::new();
    /// y.append_left([-1, 0]).append_right([1]);
    /// assert_eq!(y.left(), &[-1.0, 0.0]);
    /// assert_eq!(y.to_string(), "{-1.0,0.0|1.0}");
    /// ```
    pub fn append_left<I>(&mut self, values: I) -> &mut Self
        where I: IntoIterator,
              I::Item: Into<f64>
    {
        self.left.extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends every given number to the right set, in the order given.
    pub fn append_right<I>(&mut self, values: I) -> &mut Self
        where I: IntoIterator,
              I::Item: Into<f64>
    {
        self.right.extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends a single element to the left set.
    pub fn push_left(&mut self, value: impl Into<f64>) -> &mut Self {
        self.left.push(value.into());
        self
    }

    /// Appends a single element to the right set.
    pub fn push_right(&mut self, value: impl Into<f64>) -> &mut Self {
        self.right.push(value.into());
        self
    }

    /// The left set, in insertion order.
    #[must_use]
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// The right set, in insertion order.
    #[must_use]
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Returns `true` for `{|}`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Approximates the form as a real number, for diagnostics only.
    ///
    /// The order relation never consults this value. It looks one level
    /// deep:
    /// - `{|}` is `0`,
    /// - `{|R}` is `min(R) - 1`,
    /// - `{L|}` is `max(L) + 1`,
    /// - `{L|R}` is the midpoint of `max(L)` and `min(R)`.
    ///
    /// # Example
    /// ```
    /// use forma::Form;
    ///
    /// assert_eq!(Form::new().approximate(), 0.0);
    /// assert_eq!(Form::from_sets([0], [1]).approximate(), 0.5);
    /// assert_eq!(Form::from_sets([2, 5], Vec::<f64>::new()).approximate(), 6.0);
    /// assert_eq!(Form::from_sets(Vec::<f64>::new(), [-3, 4]).approximate(), -4.0);
    /// ```
    #[must_use]
    pub fn approximate(&self) -> f64 {
        let greatest_left = self.left.iter().copied().map(OrderedFloat).max();
        let least_right = self.right.iter().copied().map(OrderedFloat).min();

        match (greatest_left, least_right) {
            (None, None) => 0.0,
            (None, Some(r)) => r.into_inner() - 1.0,
            (Some(l), None) => l.into_inner() + 1.0,
            (Some(l), Some(r)) => (l.into_inner() + r.into_inner()) / 2.0,
        }
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_set(f: &mut fmt::Formatter<'_>, set: &[f64]) -> fmt::Result {
            for (index, value) in set.iter().enumerate() {
                if index > 0 {
                    write!(f, ",")?;
                }
                // Debug keeps the trailing `.0` on whole values.
                write!(f, "{value:?}")?;
            }
            Ok(())
        }

        write!(f, "{{")?;
        write_set(f, &self.left)?;
        write!(f, "|")?;
        write_set(f, &self.right)?;
        write!(f, "}}")
    }
}

/// A value the order relation accepts: a bare integer or a form.
///
/// Integers are terse notation for their canonical embedding (see
/// [`crate::form::embed`]), so `Numeric::Integer(0)` and the empty form
/// compare equal. `PartialEq` and `PartialOrd` follow the order relation
/// rather than structure. There is no `Eq` or `Ord`: an ill-formed form such
/// as `{0|0}` is neither `<=` nor `>=` the integer `0`, and `partial_cmp`
/// reports that as `None`.
#[derive(Debug, Clone)]
pub enum Numeric {
    /// A whole number such as `-2`.
    ///
    /// 32 bits, so every integer and its embedding widen to `f64` exactly.
    Integer(i32),
    /// A form such as `{0|1}`.
    Form(Form),
}

impl From<i32> for Numeric {
    fn from(n: i32) -> Self {
        Self::Integer(n)
    }
}

impl From<Form> for Numeric {
    fn from(form: Form) -> Self {
        Self::Form(form)
    }
}

impl Numeric {
    /// Approximates the value as a real number, for diagnostics only.
    ///
    /// Integers map to themselves.
    #[must_use]
    pub fn approximate(&self) -> f64 {
        match self {
            Self::Integer(n) => f64::from(*n),
            Self::Form(form) => form.approximate(),
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering::{Equal, Greater, Less};

        match (less_or_equal(self, other), less_or_equal(other, self)) {
            (true, true) => Some(Equal),
            (true, false) => Some(Less),
            (false, true) => Some(Greater),
            (false, false) => None,
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Form(form) => write!(f, "{form}"),
        }
    }
}
