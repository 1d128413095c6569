//! # ScanComb - Token Stream Parser Combinators
//!
//! A parser combinator core for building recursive-descent parsers over any
//! pre-lexed token sequence.
//!
//! ScanComb provides small stateless parsers that compose into grammars. The
//! library is built around three pieces:
//!
//! - **Scanner**: an exclusively owned cursor over `&[T]` with checkpoint/restore
//! - **Match**: a success (start, consumed length) or a failure (reason, position)
//! - **Parser**: the composable unit; every parser is entered through [`Parse::parse`]
//!
//! Grammar mismatches are ordinary values, never panics: a failing parser
//! leaves the scanner where it found it so an enclosing combinator can try
//! something else. Misusing the scanner or building an unsatisfiable
//! combinator is reported separately through [`Error`].
//!
//! ```
//! use scancomb::prelude::*;
//! use scancomb::{none_of, token};
//!
//! // A quoted string: '"' followed by anything but '"', then '"'
//! let quoted = token('"').then(none_of(['"']).many()).skip(token('"'));
//!
//! let input: Vec<char> = "\"hi\" rest".chars().collect();
//! let mut scanner = Scanner::new(&input);
//! let (body, success) = quoted.parse(&mut scanner).unwrap();
//! assert_eq!(body, vec!['h', 'i']);
//! assert_eq!(success.consumed, 4);
//! ```

pub mod and;
pub mod choice;
pub mod end;
pub mod error;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod many;
pub mod map;
pub mod none_of;
pub mod not;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod satisfy;
pub mod scanner;
pub mod separated_list;
pub mod sequence;
pub mod span;
pub mod token;

pub use and::and;
pub use choice::choice;
pub use end::end;
pub use error::Error;
pub use filter::filter;
pub use label::label;
pub use lazy::lazy;
pub use many::{many, many1, repeat};
pub use map::map;
pub use none_of::{NoneOf, none_of};
pub use not::not;
pub use one_of::{OneOf, one_of};
pub use optional::optional;
pub use or::or;
pub use outcome::{Failure, IntoMatch, Match, ParseResult, Reason, Success};
pub use parser::{BoxedParser, Parse, Parser, parse_complete, parse_tokens};
pub use pure::pure;
pub use satisfy::satisfy;
pub use scanner::{Checkpoint, Scanner};
pub use separated_list::separated_list;
pub use sequence::sequence;
pub use span::{Span, with_span};
pub use token::{any, token};

/// Traits needed to build and run parsers with method syntax
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::end::CompleteExt;
    pub use crate::filter::FilterExt;
    pub use crate::label::LabelExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::outcome::IntoMatch;
    pub use crate::parser::{BoxedExt, Parse, Parser};
    pub use crate::scanner::Scanner;
    pub use crate::span::SpanExt;
}
