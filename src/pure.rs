use crate::outcome::{ParseResult, Success};
use crate::parser::Parser;
use crate::scanner::Scanner;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
#[derive(Debug, Clone)]
pub struct Pure<T, R> {
    value: R,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, R> Pure<T, R> {
    pub fn new(value: R) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, R: Clone> Parser<T> for Pure<T, R> {
    type Output = R;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<R> {
        Ok((self.value.clone(), Success::empty(scanner.position())))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T, R: Clone>(value: R) -> Pure<T, R> {
    Pure::new(value)
}

/// Convenience function to create a parser yielding `R::default()`
pub fn default<T, R: Clone + Default>() -> Pure<T, R> {
    Pure::new(R::default())
}
