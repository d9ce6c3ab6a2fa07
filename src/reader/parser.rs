use std::{fmt, iter::Peekable};

use crate::{
    error::{FormError, ParseError},
    form::core::{Form, Numeric},
    reader::lexer::Token,
    util::num::i64_to_f64_checked,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A literal as written in the source, before it is checked as a value.
#[derive(Debug, Clone)]
pub enum Literal {
    /// A bare integer such as `-2`.
    Integer(i32),
    /// A bare real such as `0.5`. Only valid inside a form.
    Real(f64),
    /// A form such as `{0|1}`.
    Form(Form),
}

impl Literal {
    /// Converts the literal into a value the order relation accepts.
    ///
    /// # Errors
    /// `FormError::InvalidVariant` for a bare real, which is neither an
    /// integer nor a form.
    pub fn into_numeric(self, line: usize) -> Result<Numeric, FormError> {
        match self {
            Self::Integer(n) => Ok(Numeric::Integer(n)),
            Self::Form(form) => Ok(Numeric::Form(form)),
            Self::Real(r) => Err(FormError::InvalidVariant { found: format!("real {r:?}"),
                                                             line }),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Form(form) => write!(f, "{form}"),
        }
    }
}

/// Parses every literal in the token stream.
///
/// Literals may be separated by whitespace, commas or newlines. Bare
/// integers must fit in 32 bits.
///
/// Grammar: `list := (literal | "," | newline)*`
///
/// # Errors
/// Propagates errors from [`parse_form`] and rejects stray `|` or `}`.
pub fn parse_literals<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<(Literal, usize)>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut literals = Vec::new();

    while let Some((token, line)) = tokens.peek() {
        let line = *line;
        match token {
            Token::Comma | Token::NewLine => {
                tokens.next();
            },
            Token::Integer(n) => {
                let n = i32::try_from(*n).map_err(|_| ParseError::LiteralTooLarge { line })?;
                literals.push((Literal::Integer(n), line));
                tokens.next();
            },
            Token::Real(r) => {
                literals.push((Literal::Real(*r), line));
                tokens.next();
            },
            Token::LBrace => literals.push((Literal::Form(parse_form(tokens)?), line)),
            tok => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected a number or '{{', found {tok:?}"),
                                                         line });
            },
        }
    }

    Ok(literals)
}

/// Parses a form literal of the form `{ l1, l2 | r1 }`.
///
/// Either set may be empty, so `{|}` is accepted.
///
/// Grammar: `form := "{" elements? "|" elements? "}"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - `{` is missing,
/// - an element is not a number or is too large to widen exactly,
/// - `|` or the closing `}` is missing.
pub fn parse_form<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Form>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = match tokens.next() {
        Some((Token::LBrace, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '{{', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let left = parse_elements(tokens, &Token::Pipe, line)?;
    let right = parse_elements(tokens, &Token::RBrace, line)?;

    Ok(Form::from_sets(left, right))
}

/// Parses a comma-separated list of boundary elements up to `closing`.
///
/// The closing token is consumed. An immediately encountered closing token
/// produces an empty list.
fn parse_elements<'a, I>(tokens: &mut Peekable<I>,
                         closing: &Token,
                         open_line: usize)
                         -> ParseResult<Vec<f64>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_element(tokens, closing, open_line)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((Token::RBrace, line)) if *closing == Token::Pipe => {
                return Err(ParseError::ExpectedPipe { line: *line });
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: open_line }),
        }
    }
    Ok(items)
}

fn parse_element<'a, I>(tokens: &mut Peekable<I>,
                        closing: &Token,
                        open_line: usize)
                        -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Real(r), _)) => Ok(*r),
        Some((Token::Integer(n), line)) => {
            i64_to_f64_checked(*n, ParseError::LiteralTooLarge { line: *line })
        },
        Some((Token::RBrace, line)) if *closing == Token::Pipe => {
            Err(ParseError::ExpectedPipe { line: *line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a number, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: open_line }),
    }
}
