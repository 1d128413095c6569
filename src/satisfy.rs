use crate::outcome::{ParseResult, Reason};
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::token::single;
use std::borrow::Cow;
use std::fmt;

/// Parser that consumes one token for which a predicate holds
///
/// The predicate must be a pure function of the token.
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, description: Cow<'static, str>) -> Self {
        Satisfy {
            predicate,
            description,
        }
    }
}

impl<F> fmt::Debug for Satisfy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfy")
            .field("predicate", &"<function>")
            .field("description", &self.description)
            .finish()
    }
}

impl<T, F> Parser<T> for Satisfy<F>
where
    T: Clone + fmt::Debug,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<T> {
        single(scanner, |token| {
            if (self.predicate)(token) {
                Ok(token.clone())
            } else {
                Err(Reason::Expected {
                    expected: self.description.to_string(),
                    found: format!("{token:?}"),
                })
            }
        })
    }

    fn name(&self) -> Cow<'static, str> {
        self.description.clone()
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<T, F>(predicate: F, description: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(&T) -> bool,
{
    Satisfy::new(predicate, description.into())
}
