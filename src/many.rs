use crate::error::Error;
use crate::outcome::{Failure, ParseResult, Reason, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use tracing::trace;

/// Parser combinator that applies a parser repeatedly
///
/// Each attempt starts from a fresh checkpoint and the loop ends at the first
/// failure, after `max` matches, or after a match that consumed nothing (it
/// would match forever). Fewer than `min` matches is a failure and leaves the
/// scanner where the repetition started.
#[derive(Debug, Clone)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    /// Build a repetition of `min..=max` matches, or `min..` when `max` is `None`
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Result<Self, Error> {
        if let Some(max) = max {
            if max < min {
                return Err(Error::invalid_configuration(format!(
                    "repetition max {max} is below min {min}"
                )));
            }
        }
        Ok(Repeat { parser, min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl<T, P> Parser<T> for Repeat<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let start = scanner.checkpoint();
        let mut results = Vec::new();
        let mut stopped_by = None;

        while self.max.is_none_or(|max| results.len() < max) {
            let attempt = scanner.checkpoint();
            match self.parser.parse(scanner) {
                Ok((value, success)) => {
                    results.push(value);
                    if success.consumed == 0 {
                        trace!(
                            position = success.start,
                            count = results.len(),
                            "repetition stopped on empty match"
                        );
                        break;
                    }
                }
                Err(failure) => {
                    scanner.restore(attempt);
                    stopped_by = Some(failure);
                    break;
                }
            }
        }

        if results.len() < self.min {
            let position = scanner.position();
            scanner.restore(start);
            return Err(stopped_by.unwrap_or_else(|| {
                Failure::new(
                    Reason::TooFewRepetitions {
                        min: self.min,
                        found: results.len(),
                    },
                    position,
                )
            }));
        }

        Ok((results, Success::since(start.position(), scanner)))
    }
}

/// Convenience function to create a Repeat parser matching zero or more times
pub fn many<T, P>(parser: P) -> Repeat<P>
where
    P: Parser<T>,
{
    Repeat {
        parser,
        min: 0,
        max: None,
    }
}

/// Convenience function to create a Repeat parser matching one or more times
pub fn many1<T, P>(parser: P) -> Repeat<P>
where
    P: Parser<T>,
{
    Repeat {
        parser,
        min: 1,
        max: None,
    }
}

/// Convenience function to create a bounded Repeat parser
pub fn repeat<T, P>(parser: P, min: usize, max: Option<usize>) -> Result<Repeat<P>, Error>
where
    P: Parser<T>,
{
    Repeat::new(parser, min, max)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<T>: Parser<T> + Sized {
    fn many(self) -> Repeat<Self> {
        many(self)
    }

    fn many1(self) -> Repeat<Self> {
        many1(self)
    }
}

/// Implement ManyExt for all parsers
impl<T, P> ManyExt<T> for P where P: Parser<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::pure::pure;
    use crate::token::{any, token};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_many_zero_matches() {
        let data = ['x', 'y'];
        let mut scanner = Scanner::new(&data);

        let (results, success) = many(token('a')).parse(&mut scanner).unwrap();
        assert_eq!(results, Vec::<char>::new());
        assert_eq!(success.consumed, 0);
        assert_eq!(scanner.current().unwrap(), &'x');
    }

    #[test]
    fn test_many_multiple_matches() {
        let data = ['a', 'a', 'a', 'b'];
        let mut scanner = Scanner::new(&data);

        let (results, success) = token('a').many().parse(&mut scanner).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(success.consumed, 3);
        assert_eq!(scanner.current().unwrap(), &'b');
    }

    #[test]
    fn test_many_empty_input() {
        let data: [char; 0] = [];
        let mut scanner = Scanner::new(&data);

        let (results, _) = many(any()).parse(&mut scanner).unwrap();
        assert!(results.is_empty());
        assert!(scanner.at_end());
    }

    #[test]
    fn test_many_backtracks_partial_iteration() {
        let data = ['a', 'b', 'a', 'b', 'a', 'x'];
        let mut scanner = Scanner::new(&data);

        let (pairs, success) = many(token('a').and(token('b'))).parse(&mut scanner).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(success.consumed, 4);
        // The dangling 'a' of the third attempt is not consumed
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn test_many1_zero_matches_fails() {
        let data = ['x'];
        let mut scanner = Scanner::new(&data);

        let failure = many1(token('a')).parse(&mut scanner).unwrap_err();
        assert_eq!(failure.position, 0);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_repeat_bounds() {
        let data = ['a', 'a', 'a', 'a'];
        let mut scanner = Scanner::new(&data);
        let parser = repeat(token('a'), 1, Some(3)).unwrap();

        let (results, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(scanner.position(), 3);
        assert_eq!(parser.min(), 1);
        assert_eq!(parser.max(), Some(3));
    }

    #[test]
    fn test_repeat_too_few_restores() {
        let data = ['a', 'a', 'b'];
        let mut scanner = Scanner::new(&data);
        let parser = repeat(token('a'), 3, None).unwrap();

        let failure = parser.parse(&mut scanner).unwrap_err();
        assert_eq!(failure.position, 2);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_repeat_invalid_bounds() {
        let result = repeat(token('a'), 2, Some(1));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_repeat_empty_match_stops() {
        let data = ['a'];
        let mut scanner = Scanner::new(&data);
        let parser = repeat(pure::<char, _>(()), 3, None).unwrap();

        let failure = parser.parse(&mut scanner).unwrap_err();
        assert_eq!(
            failure.reason,
            Reason::TooFewRepetitions { min: 3, found: 1 }
        );

        let (results, success) = many(pure::<char, _>(0)).parse(&mut scanner).unwrap();
        assert_eq!(results, vec![0]);
        assert_eq!(success.consumed, 0);
    }
}
