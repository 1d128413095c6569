use crate::outcome::{ParseResult, Reason};
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::token::single;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Parser that consumes one token only if it belongs to an allowed set
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    allowed: HashSet<T>,
}

impl<T: Eq + Hash> OneOf<T> {
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        OneOf {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl<T> Parser<T> for OneOf<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    type Output = T;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<T> {
        single(scanner, |token| {
            if self.allowed.contains(token) {
                Ok(token.clone())
            } else {
                Err(Reason::InvalidValue(format!("{token:?}")))
            }
        })
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<T: Eq + Hash>(allowed: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(allowed)
}
