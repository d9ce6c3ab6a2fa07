//! # forma
//!
//! forma builds Conway-style numeric forms and orders them.
//! A form is written `{L|R}`: a left set of numbers bounding it from below
//! and a right set bounding it from above. Integers embed into forms
//! canonically, so `{|}` equals `0` and `{0|1}` sits strictly between `0`
//! and `1`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Sorting and rendering of value lists.
///
/// This module is the consumer of the order relation: it builds the
/// demonstration list, sorts heterogeneous lists of integers and forms, and
/// renders them as a chain of `<` and `=`.
pub mod chain;
/// Provides error types for reading and checking values.
///
/// # Responsibilities
/// - Defines reader errors with line numbers.
/// - Defines value errors for invalid variants and ill-formed forms.
pub mod error;
/// The value model and its order.
///
/// This module declares `Form` and `Numeric`, the canonical embedding of
/// integers, the diagnostic real approximation and the recursive order
/// relation with the equality and comparison derived from it.
///
/// # Responsibilities
/// - Construction and read-only access of boundary sets.
/// - Embedding integers and approximating forms.
/// - Deciding `≤`, `=` and three-way comparison between any two values.
pub mod form;
/// Reads the textual notation for values.
///
/// Lexes and parses lists such as `{|} {0|1} -2 1` into literals.
pub mod reader;
/// Numeric conversion helpers shared by the value model and the reader.
pub mod util;

use tracing::debug;

pub use crate::{
    chain::ChainOptions,
    form::{
        core::{Form, Numeric},
        embed::embed,
        relation::{compare, compare_sign, equal, less_or_equal},
    },
};

/// Reads values from `source`, orders them and renders the chain.
///
/// # Errors
/// Returns an error if the source cannot be read, if a bare real appears
/// where an integer or form is required, or in strict mode if a form is
/// ill-formed.
///
/// # Examples
/// ```
/// use forma::{ChainOptions, order_source};
///
/// let chain = order_source("{0|1} 1 {|} 0", &ChainOptions::default()).unwrap();
/// assert_eq!(chain, "{|} = 0 < {0.0|1.0} < 1");
///
/// assert!(order_source("0.5", &ChainOptions::default()).is_err());
/// ```
pub fn order_source(source: &str,
                    options: &ChainOptions)
                    -> Result<String, Box<dyn std::error::Error>> {
    let literals = reader::read(source)?;
    debug!(count = literals.len(), "read literals");

    let mut values = Vec::with_capacity(literals.len());
    let mut lines = Vec::with_capacity(literals.len());
    for (literal, line) in literals {
        values.push(literal.into_numeric(line)?);
        lines.push(line);
    }

    Ok(chain::order(values, &lines, options)?)
}

/// Orders the built-in demonstration list and renders the chain.
///
/// # Example
/// ```
/// use forma::order_demonstration;
///
/// assert_eq!(order_demonstration(),
///            "-2 < -1 < {|} = 0 < {0.0|1.0} = {-1.0,0.0|1.0} < 1 < 2");
/// ```
#[must_use]
pub fn order_demonstration() -> String {
    let mut values = chain::demonstration();
    chain::sort_numerics(&mut values);
    chain::format_chain(&values)
}
