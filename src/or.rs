use crate::outcome::ParseResult;
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// When both fail, the failure that got further into the input is reported.
/// On a tie the first parser's failure wins.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<T, P1, P2, O> Parser<T> for Or<P1, P2>
where
    P1: Parser<T, Output = O>,
    P2: Parser<T, Output = O>,
{
    type Output = O;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<O> {
        let checkpoint = scanner.checkpoint();
        let first = match self.parser1.parse(scanner) {
            Ok(result) => return Ok(result),
            Err(failure) => failure,
        };

        scanner.restore(checkpoint);
        self.parser2.parse(scanner).map_err(|second| {
            scanner.restore(checkpoint);
            first.furthest(second)
        })
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<T>: Parser<T> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<T, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<T, P> OrExt<T> for P where P: Parser<T> {}

/// Convenience function to create an Or parser
pub fn or<T, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<T, Output = O>,
    P2: Parser<T, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::outcome::Reason;
    use crate::token::token;

    #[test]
    fn test_or_first_succeeds() {
        let data = ['a', 'b'];
        let mut scanner = Scanner::new(&data);
        let parser = or(token('a'), token('b'));

        let (value, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(scanner.current().unwrap(), &'b');
    }

    #[test]
    fn test_or_second_succeeds() {
        let data = ['b', 'c'];
        let mut scanner = Scanner::new(&data);
        let parser = token('a').or(token('b'));

        let (value, success) = parser.parse(&mut scanner).unwrap();
        assert_eq!(value, 'b');
        assert_eq!(success.consumed, 1);
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_or_second_after_partial_first() {
        let data = ['a', 'c'];
        let mut scanner = Scanner::new(&data);
        let parser = token('a')
            .and(token('b'))
            .or(token('a').and(token('c')));

        let ((a, c), success) = parser.parse(&mut scanner).unwrap();
        assert_eq!((a, c), ('a', 'c'));
        assert_eq!(success.start, 0);
        assert_eq!(scanner.position(), 2);
    }

    #[test]
    fn test_or_both_fail_reports_furthest() {
        let data = ['a', 'x'];
        let mut scanner = Scanner::new(&data);
        let parser = token('b')
            .and(token('b'))
            .or(token('a').and(token('c')));

        let failure = parser.parse(&mut scanner).unwrap_err();
        assert_eq!(failure.position, 1);
        assert_eq!(
            failure.reason,
            Reason::Expected {
                expected: "'c'".to_string(),
                found: "'x'".to_string(),
            }
        );
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_or_method_chain() {
        let data = ['c'];
        let mut scanner = Scanner::new(&data);
        let parser = token('a').or(token('b')).or(token('c'));

        let (value, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(value, 'c');
        assert!(scanner.at_end());
    }
}
