use crate::outcome::{Failure, ParseResult, Reason, Success};
use crate::parser::Parser;
use crate::scanner::Scanner;
use std::fmt;
use std::marker::PhantomData;

/// Consume one token if `check` accepts it
///
/// Shared by the single-token primitives. End of input is reported as
/// [`Reason::EndOfInput`] before `check` ever sees a token, and a rejected
/// token leaves the scanner where it was.
pub(crate) fn single<'code, T, R>(
    scanner: &mut Scanner<'code, T>,
    check: impl FnOnce(&'code T) -> Result<R, Reason>,
) -> ParseResult<R> {
    let start = scanner.position();
    let token = scanner.peek().ok_or_else(|| Failure::end_of_input(start))?;
    let value = check(token).map_err(|reason| Failure::new(reason, start))?;
    scanner
        .advance()
        .map_err(|_| Failure::end_of_input(start))?;
    Ok((value, Success::since(start, scanner)))
}

/// Parser that consumes and returns a single token
#[derive(Debug, Clone)]
pub struct Any<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Any<T> {
    pub fn new() -> Self {
        Any {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Parser<T> for Any<T> {
    type Output = T;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<T> {
        single(scanner, |token| Ok(token.clone()))
    }
}

/// Parser that matches one specific token
#[derive(Debug, Clone)]
pub struct Token<T> {
    expected: T,
}

impl<T> Token<T> {
    pub fn new(expected: T) -> Self {
        Token { expected }
    }
}

impl<T> Parser<T> for Token<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Output = T;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<T> {
        single(scanner, |token| {
            if *token == self.expected {
                Ok(token.clone())
            } else {
                Err(Reason::Expected {
                    expected: format!("{:?}", self.expected),
                    found: format!("{token:?}"),
                })
            }
        })
    }
}

/// Convenience function to create an Any parser
pub fn any<T>() -> Any<T> {
    Any::new()
}

/// Convenience function to create a Token parser
pub fn token<T>(expected: T) -> Token<T> {
    Token::new(expected)
}
