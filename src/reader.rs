use logos::Logos;

use crate::{
    error::ParseError,
    reader::{
        lexer::{LexerExtras, Token},
        parser::{Literal, parse_literals},
    },
};

/// The lexer module tokenizes the textual notation.
///
/// Produces a stream of tokens for braces, pipes, commas and signed numeric
/// literals, tracking the current line for error reporting.
pub mod lexer;
/// The parser module turns tokens into literals.
///
/// Recognizes bare numbers and forms such as `{-1,0|1}`, widening integer
/// boundary elements to `f64`.
pub mod parser;

/// Tokenizes `source`, pairing every token with its line.
///
/// # Errors
/// - `LiteralTooLarge` for an integer literal that does not fit in `i64`.
///   [`read`] narrows bare integers further, to `i32`.
/// - `UnexpectedToken` for any other unrecognized input.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                let digits = slice.trim_start_matches(['+', '-']);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { line });
                }
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}

/// Reads every literal in `source`, each with the line it starts on.
///
/// # Errors
/// Returns a `ParseError` if the source cannot be tokenized or a form is
/// malformed.
///
/// # Example
/// ```
/// use forma::reader::{parser::Literal, read};
///
/// let literals = read("{0|1} -2, 3.5").unwrap();
/// assert_eq!(literals.len(), 3);
/// assert!(matches!(literals[1], (Literal::Integer(-2), 1)));
/// assert!(matches!(literals[2], (Literal::Real(_), 1)));
/// ```
pub fn read(source: &str) -> Result<Vec<(Literal, usize)>, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_literals(&mut iter)
}
