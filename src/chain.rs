use std::cmp::Ordering;

use tracing::{debug, info};

use crate::{
    error::FormError,
    form::{
        core::{Form, Numeric},
        relation::{compare, equal},
    },
};

/// Settings for ordering a list of values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainOptions {
    /// Reject forms that fail [`Form::is_well_formed`] instead of ordering
    /// them anyway.
    pub strict: bool,
}

/// The fixed list of values ordered when no input is given.
///
/// `[{|}, {0|1}, {-1,0|1}, -2, -1, 0, 1, 2]`
#[must_use]
pub fn demonstration() -> Vec<Numeric> {
    let zero = Form::new();
    let x = Form::from_sets([0], [1]);
    let y = Form::from_sets([-1, 0], [1]);

    let mut values: Vec<Numeric> = vec![zero.into(), x.into(), y.into()];
    values.extend((-2..=2).map(Numeric::Integer));
    values
}

/// Rejects the first ill-formed form among `values`.
///
/// `lines` pairs each value with its source line; pass an empty slice when
/// there is no source.
///
/// # Errors
/// `FormError::IllFormed` naming the first offending form.
pub fn check_well_formed(values: &[Numeric], lines: &[usize]) -> Result<(), FormError> {
    for (index, value) in values.iter().enumerate() {
        if let Numeric::Form(form) = value
           && !form.is_well_formed()
        {
            return Err(FormError::IllFormed { form: form.to_string(),
                                              line: lines.get(index).copied().unwrap_or(0), });
        }
    }
    Ok(())
}

/// Sorts `values` in place with [`compare`].
///
/// The sort is a stable merge sort, so equal values keep their input order.
/// Ill-formed forms make [`compare`] inconsistent. The sort still finishes
/// and keeps every value, but the resulting order is unspecified; check
/// them first with [`check_well_formed`] when that matters.
pub fn sort_numerics(values: &mut [Numeric]) {
    debug!(count = values.len(), "sorting values");
    let indices: Vec<usize> = (0..values.len()).collect();
    let order = merge_sort(&indices, values);

    let sorted: Vec<Numeric> = order.iter().map(|&index| values[index].clone()).collect();
    values.clone_from_slice(&sorted);
}

/// Sorts positions into `values`.
///
/// Each comparison is consulted once per merge step, so an inconsistent
/// comparison can only misplace values, never lose or duplicate them.
fn merge_sort(indices: &[usize], values: &[Numeric]) -> Vec<usize> {
    if indices.len() <= 1 {
        return indices.to_vec();
    }

    let (front, back) = indices.split_at(indices.len() / 2);
    let front = merge_sort(front, values);
    let back = merge_sort(back, values);

    let mut merged = Vec::with_capacity(indices.len());
    let (mut i, mut j) = (0, 0);
    while i < front.len() && j < back.len() {
        // Ties take from the front half to stay stable.
        if compare(&values[back[j]], &values[front[i]]) == Ordering::Less {
            merged.push(back[j]);
            j += 1;
        } else {
            merged.push(front[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&front[i..]);
    merged.extend_from_slice(&back[j..]);
    merged
}

/// Renders sorted values as a chain such as `-1 < {|} = 0 < 1`.
///
/// Adjacent values are joined with `" = "` when [`equal`] and `" < "`
/// otherwise. An empty slice renders as an empty string.
///
/// # Example
/// ```
/// use forma::{Form, Numeric, chain::format_chain};
///
/// let values = [Numeric::Integer(-1), Form::new().into(), Numeric::Integer(0)];
/// assert_eq!(format_chain(&values), "-1 < {|} = 0");
/// ```
#[must_use]
pub fn format_chain(values: &[Numeric]) -> String {
    let mut chain = String::new();

    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            let separator = if equal(&values[index - 1], value) { " = " } else { " < " };
            chain.push_str(separator);
        }
        chain.push_str(&value.to_string());
    }

    chain
}

/// Renders a single comparison as `a < b`, `a = b` or `a > b`.
#[must_use]
pub fn describe_pair(a: &Numeric, b: &Numeric) -> String {
    let sign = match compare(a, b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    format!("{a} {sign} {b}")
}

/// Checks, sorts and renders `values`.
///
/// # Errors
/// `FormError::IllFormed` in strict mode when a form is ill-formed.
pub fn order(mut values: Vec<Numeric>,
             lines: &[usize],
             options: &ChainOptions)
             -> Result<String, FormError> {
    if options.strict {
        check_well_formed(&values, lines)?;
    }

    sort_numerics(&mut values);
    let chain = format_chain(&values);
    info!(count = values.len(), "ordered values");
    Ok(chain)
}
