use crate::outcome::{Failure, ParseResult, Reason};
use crate::scanner::Scanner;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// Core parser trait for parser combinators
///
/// Implementors supply [`Parser::parse_main`]. Callers go through
/// [`Parse::parse`], which wraps every invocation with the backtracking and
/// tracing behavior shared by all parsers.
///
/// A parser holds no per-parse state: everything that changes during a parse
/// lives in the [`Scanner`]. The same parser can therefore be reused across
/// unrelated parses, including concurrently on distinct scanners.
pub trait Parser<T> {
    type Output;

    /// Attempt to consume a prefix of the scanner
    ///
    /// On success the scanner has moved by exactly `consumed` tokens. On
    /// failure it must not have moved.
    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output>;

    /// Name used in trace output
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

/// Entry point for running any [`Parser`]
///
/// Blanket-implemented for every parser, so the wrapper cannot be replaced by
/// individual parser types.
pub trait Parse<T>: Parser<T> {
    fn parse(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output>;
}

impl<T, P> Parse<T> for P
where
    P: Parser<T> + ?Sized,
{
    fn parse(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let checkpoint = scanner.checkpoint();
        let result = self.parse_main(scanner);

        match &result {
            Ok((_, success)) => {
                debug_assert_eq!(success.start, checkpoint.position());
                debug_assert_eq!(success.end(), scanner.position());
                trace!(
                    parser = %self.name(),
                    start = success.start,
                    consumed = success.consumed,
                    "matched"
                );
            }
            Err(failure) => {
                debug_assert_eq!(scanner.position(), checkpoint.position());
                scanner.restore(checkpoint);
                trace!(
                    parser = %self.name(),
                    start = checkpoint.position(),
                    position = failure.position,
                    reason = %failure.reason,
                    "failed"
                );
            }
        }

        result
    }
}

impl<T, P> Parser<T> for &P
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        (**self).parse_main(scanner)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

impl<T, P> Parser<T> for Box<P>
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        (**self).parse_main(scanner)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

impl<T, P> Parser<T> for Arc<P>
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        (**self).parse_main(scanner)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

/// Type-erased parser, used where differently typed parsers share a container
pub type BoxedParser<'p, T, R> = Box<dyn Parser<T, Output = R> + Send + Sync + 'p>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<T>: Parser<T> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, T, Self::Output>
    where
        Self: Send + Sync + 'p,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<T, P> BoxedExt<T> for P where P: Parser<T> {}

/// Run `parser` from the start of `tokens`
///
/// Trailing tokens are left to the caller; compare `consumed` with
/// `tokens.len()` or use [`parse_complete`].
pub fn parse_tokens<T, P>(parser: &P, tokens: &[T]) -> ParseResult<P::Output>
where
    P: Parser<T> + ?Sized,
{
    let mut scanner = Scanner::new(tokens);
    parser.parse(&mut scanner)
}

/// Run `parser` over all of `tokens`, failing if any input is left over
pub fn parse_complete<T, P>(parser: &P, tokens: &[T]) -> ParseResult<P::Output>
where
    P: Parser<T> + ?Sized,
{
    let mut scanner = Scanner::new(tokens);
    let (value, success) = parser.parse(&mut scanner)?;
    if !scanner.at_end() {
        return Err(Failure::new(
            Reason::TrailingInput {
                remaining: scanner.remaining().len(),
            },
            scanner.position(),
        ));
    }
    Ok((value, success))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Success;
    use crate::token::{any, token};

    /// Deliberately broken parser that advances and then reports failure
    struct Sloppy;

    impl Parser<char> for Sloppy {
        type Output = ();

        fn parse_main(&self, scanner: &mut Scanner<'_, char>) -> ParseResult<()> {
            let position = scanner.position();
            let _ = scanner.advance();
            Err(Failure::new(Reason::Rejected("sloppy".into()), position))
        }
    }

    #[test]
    fn test_parse_delegates_to_parse_main() {
        let data = ['a', 'b'];
        let mut scanner = Scanner::new(&data);

        let (value, success) = any().parse(&mut scanner).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(
            success,
            Success {
                start: 0,
                consumed: 1
            }
        );
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_parse_restores_after_sloppy_failure() {
        let data = ['a', 'b'];
        let mut scanner = Scanner::new(&data);

        assert!(Sloppy.parse(&mut scanner).is_err());
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_parse_flags_sloppy_failure_in_debug() {
        let data = ['a', 'b'];
        let mut scanner = Scanner::new(&data);
        let _ = Sloppy.parse(&mut scanner);
    }

    #[test]
    fn test_forwarding_impls() {
        let data = ['x'];
        let parser = token('x');

        let by_ref = &parser;
        assert!(parse_tokens(&by_ref, &data).is_ok());

        let boxed: BoxedParser<'_, char, char> = token('x').boxed();
        assert!(parse_tokens(&boxed, &data).is_ok());

        let shared = Arc::new(token('x'));
        assert!(parse_tokens(&shared, &data).is_ok());
    }

    #[test]
    fn test_parse_complete_rejects_trailing_input() {
        let data = ['x', 'y', 'z'];

        let failure = parse_complete(&token('x'), &data).unwrap_err();
        assert_eq!(failure.reason, Reason::TrailingInput { remaining: 2 });
        assert_eq!(failure.position, 1);

        let (value, success) = parse_tokens(&token('x'), &data).unwrap();
        assert_eq!(value, 'x');
        assert_eq!(success.consumed, 1);
    }

    #[test]
    fn test_name_defaults_to_type_name() {
        assert!(Sloppy.name().ends_with("Sloppy"));
    }
}
