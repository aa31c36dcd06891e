use std::num::ParseIntError;
use thiserror::Error;

/// Failure to interpret a record of puzzle input.
///
/// Parsing is fail-fast: the first malformed record aborts the parse of the
/// whole file, so a value built from puzzle input is never partial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field that should hold an integer held something else.
    #[error("invalid integer {token:?}")]
    Int {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A code outside the domain it is parsed against.
    #[error("{code:?} is not a valid {domain}")]
    Code { code: String, domain: &'static str },

    /// A delimited record with the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    Fields { expected: usize, found: usize },
}

impl ParseError {
    pub fn int(token: &str, source: ParseIntError) -> Self {
        Self::Int {
            token: token.to_owned(),
            source,
        }
    }

    pub fn code(code: &str, domain: &'static str) -> Self {
        Self::Code {
            code: code.to_owned(),
            domain,
        }
    }

    pub fn fields(expected: usize, found: usize) -> Self {
        Self::Fields { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = "snack".parse::<u64>().unwrap_err();
        assert_eq!(
            ParseError::int("snack", err).to_string(),
            "invalid integer \"snack\""
        );
        assert_eq!(
            ParseError::code("D", "opponent move").to_string(),
            "\"D\" is not a valid opponent move"
        );
        assert_eq!(
            ParseError::fields(2, 3).to_string(),
            "expected 2 fields, found 3"
        );
    }
}
