use crate::outcome::{ParseResult, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;

/// Half-open range of token positions covered by a successful parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Get the tokens this span covers, or `None` if it lies outside `source`
    pub fn slice<'code, T>(&self, source: &'code [T]) -> Option<&'code [T]> {
        source.get(self.start..self.end)
    }
}

impl From<Success> for Span {
    fn from(success: Success) -> Self {
        Span::new(success.start, success.end())
    }
}

/// A parser combinator that pairs a parser's output with the span it matched
#[derive(Debug, Clone)]
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<T, P> Parser<T> for WithSpan<P>
where
    P: Parser<T>,
{
    type Output = (P::Output, Span);

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let (output, success) = self.parser.parse(scanner)?;
        Ok(((output, Span::from(success)), success))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpanExt<T>: Parser<T> + Sized {
    /// Wrap this parser to capture the span it matched
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<T, P> SpanExt<T> for P where P: Parser<T> {}

/// Convenience function to create a WithSpan combinator
pub fn with_span<T, P>(parser: P) -> WithSpan<P>
where
    P: Parser<T>,
{
    WithSpan::new(parser)
}
