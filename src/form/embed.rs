use crate::form::core::{Form, Numeric};

/// Converts an integer into its canonical form.
///
/// - `n < 0` becomes `{|n+1}`
/// - `n > 0` becomes `{n-1|}`
/// - `0` becomes `{|}`
///
/// The result never holds more than one boundary element, and it widens to
/// `f64` exactly. Neither `n + 1` nor `n - 1` can overflow because each is
/// only taken on the side of zero that leaves room.
///
/// # Example
/// ```
/// use forma::form::embed::embed;
///
/// assert_eq!(embed(-3).to_string(), "{|-2.0}");
/// assert_eq!(embed(0).to_string(), "{|}");
/// assert_eq!(embed(4).to_string(), "{3.0|}");
/// ```
#[must_use]
pub fn embed(n: i32) -> Form {
    let mut form = Form::new();
    if n > 0 {
        form.push_left(n - 1);
    } else if n < 0 {
        form.push_right(n + 1);
    }
    form
}

/// The single left element of the canonical form of `n`, if any.
///
/// Takes `i64` because rounded boundary elements are embedded too.
#[must_use]
pub const fn left_option(n: i64) -> Option<i64> {
    if n > 0 { Some(n - 1) } else { None }
}

/// The single right element of the canonical form of `n`, if any.
#[must_use]
pub const fn right_option(n: i64) -> Option<i64> {
    if n < 0 { Some(n + 1) } else { None }
}

impl From<i32> for Form {
    fn from(n: i32) -> Self {
        embed(n)
    }
}

impl Numeric {
    /// Returns the value as a form, embedding integers.
    ///
    /// # Example
    /// ```
    /// use forma::Numeric;
    ///
    /// let two = Numeric::Integer(2);
    /// assert_eq!(two.to_form().to_string(), "{1.0|}");
    /// ```
    #[must_use]
    pub fn to_form(&self) -> Form {
        match self {
            Self::Integer(n) => embed(*n),
            Self::Form(form) => form.clone(),
        }
    }
}
