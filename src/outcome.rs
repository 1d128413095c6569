use crate::scanner::Scanner;
use std::borrow::Cow;
use thiserror::Error;

/// Result of one parser invocation
///
/// On success the parsed value travels with a [`Success`]; on failure there
/// is no value, only a [`Failure`].
pub type ParseResult<R> = Result<(R, Success), Failure>;

/// Successful match: where it started and how many tokens it consumed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Success {
    pub start: usize,
    pub consumed: usize,
}

impl Success {
    /// Build a success from the scanner's movement since `start`
    pub fn since<T>(start: usize, scanner: &Scanner<'_, T>) -> Self {
        Success {
            start,
            consumed: scanner.position().saturating_sub(start),
        }
    }

    /// Zero-length success at `position`
    pub fn empty(position: usize) -> Self {
        Success {
            start: position,
            consumed: 0,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.consumed
    }
}

/// Why a parser did not match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("invalid value {0}")]
    InvalidValue(String),
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("expected at least {min} repetitions, found {found}")]
    TooFewRepetitions { min: usize, found: usize },
    #[error("{remaining} unconsumed tokens after a complete match")]
    TrailingInput { remaining: usize },
    #[error("{0}")]
    Rejected(Cow<'static, str>),
    #[error("{label}: {inner}")]
    Labeled {
        label: Cow<'static, str>,
        inner: Box<Reason>,
    },
}

/// Failed match with a diagnostic and the position it was detected at
///
/// The position is where the mismatch happened, which may lie beyond the
/// position the scanner was restored to. Alternation relies on this to report
/// the alternative that got furthest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} at position {position}")]
pub struct Failure {
    pub reason: Reason,
    pub position: usize,
}

impl Failure {
    pub fn new(reason: Reason, position: usize) -> Self {
        Failure { reason, position }
    }

    pub fn end_of_input(position: usize) -> Self {
        Failure::new(Reason::EndOfInput, position)
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.reason, Reason::EndOfInput)
    }

    /// Pick the failure that progressed further into the input
    ///
    /// Ties keep `self`, so the earlier alternative wins.
    pub fn furthest(self, other: Failure) -> Failure {
        if other.position > self.position {
            other
        } else {
            self
        }
    }
}

/// Outcome descriptor of one parser invocation, independent of its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    Success(Success),
    Failure(Failure),
}

impl Match {
    pub fn is_success(&self) -> bool {
        matches!(self, Match::Success(_))
    }

    /// Tokens consumed; zero for a failure
    pub fn consumed(&self) -> usize {
        match self {
            Match::Success(success) => success.consumed,
            Match::Failure(_) => 0,
        }
    }

    /// Start of a success, or the detection point of a failure
    pub fn position(&self) -> usize {
        match self {
            Match::Success(success) => success.start,
            Match::Failure(failure) => failure.position,
        }
    }
}

/// Extension trait to split a [`ParseResult`] into a value slot and a [`Match`]
pub trait IntoMatch<R> {
    fn into_match(self) -> (Option<R>, Match);
}

impl<R> IntoMatch<R> for ParseResult<R> {
    fn into_match(self) -> (Option<R>, Match) {
        match self {
            Ok((value, success)) => (Some(value), Match::Success(success)),
            Err(failure) => (None, Match::Failure(failure)),
        }
    }
}
