use crate::outcome::ParseResult;
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The match itself is passed through untouched: same start, same length,
/// same failure.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F> fmt::Debug for Map<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<T, P, F, A, B> Parser<T> for Map<P, F>
where
    P: Parser<T, Output = A>,
    F: Fn(A) -> B,
{
    type Output = B;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<B> {
        let (value, success) = self.parser.parse(scanner)?;
        Ok(((self.mapper)(value), success))
    }
}

/// Convenience function to create a Map parser
pub fn map<T, P, F, B>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> B,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<T>: Parser<T> + Sized {
    fn map<F, B>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<T, P> MapExt<T> for P where P: Parser<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::none_of::none_of;
    use crate::or::OrExt;
    use crate::parser::parse_tokens;
    use crate::token::token;

    #[derive(Debug, PartialEq)]
    enum Symbol {
        Open,
        Close,
        Other(char),
    }

    #[test]
    fn test_map_char_to_digit() {
        let data = ['7'];
        let mut scanner = Scanner::new(&data);
        let parser = token('7').map(|c| c.to_digit(10));

        let (digit, success) = parser.parse(&mut scanner).unwrap();
        assert_eq!(digit, Some(7));
        assert_eq!(success.consumed, 1);
    }

    #[test]
    fn test_map_to_enum_with_or() {
        let data = [')'];
        let mut scanner = Scanner::new(&data);
        let parser = token('(')
            .map(|_| Symbol::Open)
            .or(token(')').map(|_| Symbol::Close))
            .or(none_of(['(', ')']).map(Symbol::Other));

        let (symbol, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(symbol, Symbol::Close);
    }

    #[test]
    fn test_map_preserves_failure() {
        let data = ['x'];
        let mut scanner = Scanner::new(&data);
        let plain = token('A').parse(&mut scanner).unwrap_err();
        let mapped = token('A')
            .map(|c| c.to_ascii_lowercase())
            .parse(&mut scanner)
            .unwrap_err();

        assert_eq!(plain, mapped);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_function_syntax() {
        let data = [3u32];
        let mut scanner = Scanner::new(&data);
        let parser = map(token(3u32), |n| n * 2);

        let (value, _) = parser.parse(&mut scanner).unwrap();
        assert_eq!(value, 6);
    }

    #[test]
    fn test_map_clone_and_debug() {
        let data = ['3'];
        let parser = token('3').map(|c: char| c.to_digit(10));
        let copy = parser.clone();

        assert_eq!(parse_tokens(&copy, &data).unwrap().0, Some(3));
        assert_eq!(parse_tokens(&parser, &data).unwrap().0, Some(3));
        assert!(format!("{parser:?}").contains("<function>"));
    }
}
