use crate::error::Error;
use crate::outcome::{Failure, ParseResult};
use crate::parser::{BoxedParser, Parse, Parser};
use crate::scanner::Scanner;
use std::fmt;
use tracing::debug;

/// Parser combinator that tries a list of alternatives in declared order
///
/// Each alternative starts from the same checkpoint. The first success wins.
/// If every alternative fails, the failure that progressed furthest is
/// returned, with ties going to the earlier alternative.
pub struct Choice<'p, T, R> {
    alternatives: Vec<BoxedParser<'p, T, R>>,
}

impl<'p, T, R> Choice<'p, T, R> {
    /// Build a choice, rejecting an empty list of alternatives
    pub fn new(alternatives: Vec<BoxedParser<'p, T, R>>) -> Result<Self, Error> {
        if alternatives.is_empty() {
            return Err(Error::invalid_configuration(
                "choice needs at least one alternative",
            ));
        }
        Ok(Choice { alternatives })
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<T, R> fmt::Debug for Choice<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.alternatives.iter().map(|alternative| alternative.name()))
            .finish()
    }
}

impl<T, R> Parser<T> for Choice<'_, T, R> {
    type Output = R;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<R> {
        let checkpoint = scanner.checkpoint();
        let mut furthest: Option<Failure> = None;

        for alternative in &self.alternatives {
            match alternative.parse(scanner) {
                Ok(result) => return Ok(result),
                Err(failure) => {
                    scanner.restore(checkpoint);
                    furthest = Some(match furthest {
                        Some(best) => best.furthest(failure),
                        None => failure,
                    });
                }
            }
        }

        // Construction guarantees at least one alternative ran
        let failure = furthest.unwrap_or_else(|| Failure::end_of_input(checkpoint.position()));
        debug!(
            alternatives = self.alternatives.len(),
            start = checkpoint.position(),
            position = failure.position,
            "no alternative matched"
        );
        Err(failure)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'p, T, R>(
    alternatives: Vec<BoxedParser<'p, T, R>>,
) -> Result<Choice<'p, T, R>, Error> {
    Choice::new(alternatives)
}
