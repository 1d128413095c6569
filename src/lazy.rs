use crate::outcome::ParseResult;
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::fmt;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("factory", &"<function>")
            .finish()
    }
}

impl<T, F, P> Parser<T> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse(scanner)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<T, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<T>,
{
    Lazy::new(factory)
}
