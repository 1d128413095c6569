use crate::outcome::{ParseResult, Success};
use crate::parser::{BoxedParser, Parse, Parser};
use crate::scanner::Scanner;
use std::fmt;

/// Parser combinator that runs a list of same-typed parsers one after another
///
/// Succeeds only if every parser succeeds, consuming the sum of their
/// lengths. The first failure is returned as is and the scanner is put back
/// to where the sequence started.
pub struct Sequence<'p, T, R> {
    parsers: Vec<BoxedParser<'p, T, R>>,
}

impl<'p, T, R> Sequence<'p, T, R> {
    pub fn new(parsers: Vec<BoxedParser<'p, T, R>>) -> Self {
        Sequence { parsers }
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl<T, R> fmt::Debug for Sequence<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.parsers.iter().map(|parser| parser.name()))
            .finish()
    }
}

impl<T, R> Parser<T> for Sequence<'_, T, R> {
    type Output = Vec<R>;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Vec<R>> {
        let checkpoint = scanner.checkpoint();
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(scanner) {
                Ok((value, _)) => results.push(value),
                Err(failure) => {
                    scanner.restore(checkpoint);
                    return Err(failure);
                }
            }
        }

        Ok((results, Success::since(checkpoint.position(), scanner)))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'p, T, R>(parsers: Vec<BoxedParser<'p, T, R>>) -> Sequence<'p, T, R> {
    Sequence::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Reason;
    use crate::parser::BoxedExt;
    use crate::token::{any, token};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_all_succeed() {
        let data = ['l', 'e', 't', ' '];
        let mut scanner = Scanner::new(&data);
        let parser = sequence(vec![
            token('l').boxed(),
            token('e').boxed(),
            token('t').boxed(),
        ]);

        let (letters, success) = parser.parse(&mut scanner).unwrap();
        assert_eq!(letters, vec!['l', 'e', 't']);
        assert_eq!(success.consumed, 3);
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn test_sequence_atomic_on_failure() {
        let data = ['a', 'b', 'x'];
        let mut scanner = Scanner::new(&data);
        let parser = sequence(vec![
            any::<char>().boxed(),
            any::<char>().boxed(),
            token('c').boxed(),
        ]);

        let failure = parser.parse(&mut scanner).unwrap_err();
        assert_eq!(
            failure.reason,
            Reason::Expected {
                expected: "'c'".to_string(),
                found: "'x'".to_string(),
            }
        );
        assert_eq!(failure.position, 2);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_sequence_empty_succeeds_without_consuming() {
        let data = ['a'];
        let mut scanner = Scanner::new(&data);
        let parser: Sequence<'_, char, char> = sequence(Vec::new());

        let (results, success) = parser.parse(&mut scanner).unwrap();
        assert!(results.is_empty());
        assert!(parser.is_empty());
        assert_eq!(success.consumed, 0);
    }
}
