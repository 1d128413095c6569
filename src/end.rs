use crate::outcome::{Failure, ParseResult, Reason, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::fmt;
use std::marker::PhantomData;

/// Parser that succeeds, consuming nothing, only at end of input
#[derive(Debug, Clone)]
pub struct End<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> End<T> {
    pub fn new() -> Self {
        End {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for End<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> Parser<T> for End<T> {
    type Output = ();

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<()> {
        let position = scanner.position();
        match scanner.peek() {
            None => Ok(((), Success::empty(position))),
            Some(token) => Err(Failure::new(
                Reason::Expected {
                    expected: "end of input".to_string(),
                    found: format!("{token:?}"),
                },
                position,
            )),
        }
    }
}

/// Convenience function to create an End parser
pub fn end<T>() -> End<T> {
    End::new()
}

/// Parser combinator that requires the wrapped parser to consume all remaining input
#[derive(Debug, Clone)]
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<T, P> Parser<T> for Complete<P>
where
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let checkpoint = scanner.checkpoint();
        let (value, success) = self.parser.parse(scanner)?;
        if scanner.at_end() {
            return Ok((value, success));
        }

        let failure = Failure::new(
            Reason::TrailingInput {
                remaining: scanner.remaining().len(),
            },
            scanner.position(),
        );
        scanner.restore(checkpoint);
        Err(failure)
    }
}

/// Extension trait to add .complete() method support for parsers
pub trait CompleteExt<T>: Parser<T> + Sized {
    fn complete(self) -> Complete<Self> {
        Complete::new(self)
    }
}

/// Implement CompleteExt for all parsers
impl<T, P> CompleteExt<T> for P where P: Parser<T> {}
