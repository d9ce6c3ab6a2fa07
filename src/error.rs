/// Reader errors.
///
/// Defines all error types that can occur while lexing and parsing the
/// textual notation for forms and integers, such as unexpected tokens,
/// truncated input or literals too large to store exactly.
pub mod parse_error;
/// Value errors.
///
/// Contains the errors raised when a parsed literal cannot become a
/// [`Numeric`](crate::form::core::Numeric), or when a form is rejected by the
/// well-formedness check.
pub mod form_error;

pub use form_error::FormError;
pub use parse_error::ParseError;
