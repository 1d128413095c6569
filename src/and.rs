use crate::map::Map;
use crate::outcome::{ParseResult, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// If the second parser fails the scanner is put back where the first parser
/// started, so a half-matched pair leaves no trace.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use
/// [`sequence`](crate::sequence::sequence) for a flat list of same-typed results.
///
/// Example:
/// ```
/// use scancomb::prelude::*;
/// use scancomb::token::token;
///
/// let data = ['(', 'x'];
/// let mut scanner = Scanner::new(&data);
/// let ((open, name), success) = token('(')
///     .and(token('x'))
///     .parse(&mut scanner)
///     .unwrap();
/// assert_eq!((open, name), ('(', 'x'));
/// assert_eq!(success.consumed, 2);
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<T, P1, P2> Parser<T> for And<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    type Output = (P1::Output, P2::Output);

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let checkpoint = scanner.checkpoint();
        let (result1, _) = self.parser1.parse(scanner)?;
        let (result2, _) = self.parser2.parse(scanner).inspect_err(|_| {
            scanner.restore(checkpoint);
        })?;
        Ok((
            (result1, result2),
            Success::since(checkpoint.position(), scanner),
        ))
    }
}

/// Convenience function to create an And parser
pub fn and<T, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    And::new(parser1, parser2)
}

fn keep_left<A, B>((left, _): (A, B)) -> A {
    left
}

fn keep_right<A, B>((_, right): (A, B)) -> B {
    right
}

/// Keeps the right half of an [`And`]
pub type Then<P1, P2, A, B> = Map<And<P1, P2>, fn((A, B)) -> B>;

/// Keeps the left half of an [`And`]
pub type Skip<P1, P2, A, B> = Map<And<P1, P2>, fn((A, B)) -> A>;

/// Extension trait to add .and(), .then() and .skip() method support for parsers
pub trait AndExt<T>: Parser<T> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<T>,
    {
        And::new(self, other)
    }

    /// Run `other` after `self`, keeping only the result of `other`
    fn then<P>(self, other: P) -> Then<Self, P, Self::Output, P::Output>
    where
        P: Parser<T>,
    {
        Map::new(
            And::new(self, other),
            keep_right::<Self::Output, P::Output> as fn(_) -> _,
        )
    }

    /// Run `other` after `self`, keeping only the result of `self`
    fn skip<P>(self, other: P) -> Skip<Self, P, Self::Output, P::Output>
    where
        P: Parser<T>,
    {
        Map::new(
            And::new(self, other),
            keep_left::<Self::Output, P::Output> as fn(_) -> _,
        )
    }
}

/// Implement AndExt for all parsers
impl<T, P> AndExt<T> for P where P: Parser<T> {}
