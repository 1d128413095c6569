use crate::outcome::{Failure, ParseResult, Reason, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::borrow::Cow;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<T, P> Parser<T> for Not<P>
where
    P: Parser<T>,
{
    type Output = ();

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<()> {
        let checkpoint = scanner.checkpoint();
        match self.parser.parse(scanner) {
            Ok(_) => {
                scanner.restore(checkpoint);
                Err(Failure::new(
                    Reason::Rejected(Cow::Borrowed(
                        "negative lookahead failed: unexpected match",
                    )),
                    checkpoint.position(),
                ))
            }
            Err(_) => Ok(((), Success::empty(checkpoint.position()))),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<T, P>(parser: P) -> Not<P>
where
    P: Parser<T>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<T>: Parser<T> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<T, P> NotExt<T> for P where P: Parser<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::many::many;
    use crate::parser::BoxedExt;
    use crate::sequence::sequence;
    use crate::token::{any, token};

    #[test]
    fn test_not_fails_on_match() {
        let data = ['h', 'i'];
        let mut scanner = Scanner::new(&data);

        let failure = not(token('h')).parse(&mut scanner).unwrap_err();
        assert_eq!(failure.position, 0);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let data = ['w'];
        let mut scanner = Scanner::new(&data);

        let ((), success) = token('h').not().parse(&mut scanner).unwrap();
        assert_eq!(success.consumed, 0);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_not_for_parsing_until_delimiter() {
        let data: Vec<char> = "hello]]world".chars().collect();
        let mut scanner = Scanner::new(&data);
        let closing = || sequence(vec![token(']').boxed(), token(']').boxed()]);
        let parser = many(not(closing()).then(any()));

        let (chars, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(chars.into_iter().collect::<String>(), "hello");
        assert!(closing().parse(&mut scanner).is_ok());
        assert_eq!(scanner.position(), 7);
    }
}
