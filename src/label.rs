use crate::outcome::{Failure, ParseResult, Reason};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use std::borrow::Cow;

/// Parser combinator that attaches a description to the failures of a parser
///
/// Successes pass through unchanged. A failure keeps its position and gets
/// its reason wrapped in [`Reason::Labeled`].
#[derive(Debug, Clone)]
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Label { parser, label }
    }
}

impl<T, P> Parser<T> for Label<P>
where
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        self.parser.parse(scanner).map_err(|failure| {
            Failure::new(
                Reason::Labeled {
                    label: self.label.clone(),
                    inner: Box::new(failure.reason),
                },
                failure.position,
            )
        })
    }

    fn name(&self) -> Cow<'static, str> {
        self.label.clone()
    }
}

/// Convenience function to create a Label parser
pub fn label<T, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<T>,
{
    Label::new(parser, label.into())
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<T>: Parser<T> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label.into())
    }
}

/// Implement LabelExt for all parsers
impl<T, P> LabelExt<T> for P where P: Parser<T> {}
