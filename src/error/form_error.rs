use thiserror::Error;

/// Represents all errors raised while turning literals into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A value handed to the order relation is neither an integer literal
    /// nor a form.
    #[error("Error on line {line}: {found} is neither an integer nor a form.")]
    InvalidVariant {
        /// Rendering of the offending literal.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A form has a left element that is not strictly below one of its right
    /// elements.
    #[error("Error on line {line}: Form {form} is not well formed.")]
    IllFormed {
        /// Rendering of the offending form.
        form: String,
        /// The source line where the error occurred.
        line: usize,
    },
}
