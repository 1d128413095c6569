use crate::and::And;
use crate::outcome::{ParseResult, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;

/// Parser combinator that makes a parser optional
///
/// Never fails: a failure of the inner parser becomes `None` with nothing consumed.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<T, P> Parser<T> for Optional<P>
where
    P: Parser<T>,
{
    type Output = Option<P::Output>;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        match self.parser.parse(scanner) {
            Ok((value, success)) => Ok((Some(value), success)),
            Err(_) => Ok((None, Success::empty(scanner.position()))),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<T, P>(parser: P) -> Optional<P>
where
    P: Parser<T>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() and .then_optionally() method support for parsers
pub trait OptionalExt<T>: Parser<T> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Sequence `self` with an optional `other`
    ///
    /// Returns the first result and `Some` second result if `other` matched.
    fn then_optionally<P>(self, other: P) -> And<Self, Optional<P>>
    where
        P: Parser<T>,
    {
        And::new(self, Optional::new(other))
    }
}

/// Implement OptionalExt for all parsers
impl<T, P> OptionalExt<T> for P where P: Parser<T> {}
