use crate::outcome::{Failure, ParseResult, Reason};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::borrow::Cow;
use std::fmt;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a failure at the position the inner parser started,
/// and the tokens it consumed are given back.
#[derive(Clone)]
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F> fmt::Debug for FilterParser<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterParser")
            .field("parser", &self.parser)
            .field("predicate", &"<function>")
            .field("error_message", &self.error_message)
            .finish()
    }
}

impl<T, P, F> Parser<T> for FilterParser<P, F>
where
    P: Parser<T>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let checkpoint = scanner.checkpoint();
        let (value, success) = self.parser.parse(scanner)?;

        if (self.predicate)(&value) {
            Ok((value, success))
        } else {
            scanner.restore(checkpoint);
            Err(Failure::new(
                Reason::Rejected(self.error_message.clone()),
                checkpoint.position(),
            ))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<T>: Parser<T> + Sized {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<T, P: Parser<T>> FilterExt<T> for P {}

/// Convenience function to create a filtered parser
pub fn filter<T, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<T>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
