use crate::outcome::{ParseResult, Success};
use crate::parser::{Parse, Parser};
use crate::scanner::Scanner;
use tracing::trace;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is not consumed
/// - Separator outputs are discarded
/// - Stops after a separator and item that together consumed nothing
#[derive(Debug, Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<T, P, PS> Parser<T> for SeparatedList<P, PS>
where
    P: Parser<T>,
    PS: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse_main(&self, scanner: &mut Scanner<'_, T>) -> ParseResult<Self::Output> {
        let start = scanner.position();
        let (first, _) = self.parser.parse(scanner)?;
        let mut results = vec![first];

        loop {
            let before_separator = scanner.checkpoint();
            if self.separator.parse(scanner).is_err() {
                break;
            }
            match self.parser.parse(scanner) {
                Ok((value, _)) => {
                    results.push(value);
                    if scanner.position() == before_separator.position() {
                        trace!(
                            position = scanner.position(),
                            count = results.len(),
                            "separated list stopped on empty separator and item"
                        );
                        break;
                    }
                }
                Err(_) => {
                    scanner.restore(before_separator);
                    break;
                }
            }
        }

        Ok((results, Success::since(start, scanner)))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<T, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<T>,
    PS: Parser<T>,
{
    SeparatedList::new(parser, separator)
}
