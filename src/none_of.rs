use crate::outcome::{ParseResult, Reason};
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::token::single;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Parser that consumes one token only if it is not in a prohibited set
///
/// Fails with [`Reason::InvalidValue`] for a prohibited token and with
/// [`Reason::EndOfInput`] when there is nothing left to read. Neither failure
/// moves the scanner.
#[derive(Debug, Clone)]
pub struct NoneOf<T> {
    prohibited: HashSet<T>,
}

impl<T: Eq + Hash> NoneOf<T> {
    pub fn new(prohibited: impl IntoIterator<Item = T>) -> Self {
        NoneOf {
            prohibited: prohibited.into_iter().collect(),
        }
    }

    pub fn prohibits(&self, token: &T) -> bool {
        self.prohibited.contains(token)
    }
}

impl<T> Parser<T> for NoneOf<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    type Output = T;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<T> {
        single(scanner, |token| {
            if self.prohibited.contains(token) {
                Err(Reason::InvalidValue(format!("{token:?}")))
            } else {
                Ok(token.clone())
            }
        })
    }
}

/// Convenience function to create a NoneOf parser
pub fn none_of<T: Eq + Hash>(prohibited: impl IntoIterator<Item = T>) -> NoneOf<T> {
    NoneOf::new(prohibited)
}
