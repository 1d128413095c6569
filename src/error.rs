use thiserror::Error;

/// Contract violations raised by the scanner or by combinator construction
///
/// These are distinct from ordinary parse mismatches, which are reported as
/// [`Failure`](crate::outcome::Failure) values. Grammar logic is not expected
/// to recover from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scanner was asked to read or advance past the last token
    #[error("scanner out of bounds: position {position} in input of length {len}")]
    OutOfBounds { position: usize, len: usize },
    /// A combinator was built with parameters that can never be satisfied
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let error = Error::OutOfBounds {
            position: 3,
            len: 3,
        };
        let display_str = error.to_string();
        assert!(display_str.contains("position 3"));
        assert!(display_str.contains("length 3"));
    }

    #[test]
    fn test_invalid_configuration_display() {
        let error = Error::invalid_configuration("max 1 is below min 2");
        assert_eq!(
            error.to_string(),
            "invalid configuration: max 1 is below min 2"
        );
    }
}
