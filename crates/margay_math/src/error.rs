use core::fmt;

/// Reason why a textual value could not be parsed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseErrorKind {
    /// The text is not enclosed in `(` and `)`
    MissingParentheses,
    /// The text does not contain the expected number of components
    ComponentCount { expected: usize, found: usize },
    /// The component at the given index is not a valid number
    InvalidNumber { index: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingParentheses => f.write_str("value is not enclosed in parentheses"),
            ParseErrorKind::ComponentCount { expected, found } => f.write_fmt(format_args!("expected {expected} components, found {found}")),
            ParseErrorKind::InvalidNumber { index } => f.write_fmt(format_args!("component {index} is not a valid number")),
        }
    }
}

/// Math error
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    /// A division by an exact zero was requested through a checked operation
    #[error("division by zero")]
    DivideByZero,
    /// A component index was outside of the valid range
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },
    /// Text could not be parsed into a value
    #[error("parse error: {0}")]
    Parse(ParseErrorKind),
    /// An argument was not valid for the requested operation
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The value has no inverse
    #[error("value is not invertible")]
    NotInvertible,
    /// The requested operation is not implemented for the given arguments
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// An operation needs a strategy that was not provided
    #[error("no {0} strategy was provided")]
    MissingStrategy(&'static str),
}

impl From<ParseErrorKind> for Error {
    fn from(kind: ParseErrorKind) -> Self {
        Error::Parse(kind)
    }
}

/// Math result
pub type Result<T> = core::result::Result<T, Error>;

/// Check an index against the number of components
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::DivideByZero.to_string(), "division by zero");
        assert_eq!(Error::IndexOutOfRange { index: 4, len: 3 }.to_string(), "index 4 is out of range for 3 components");
        assert_eq!(Error::Parse(ParseErrorKind::ComponentCount { expected: 3, found: 2 }).to_string(), "parse error: expected 3 components, found 2");
        assert_eq!(Error::MissingStrategy("integration").to_string(), "no integration strategy was provided");
    }

    #[test]
    fn index_check() {
        assert_eq!(check_index(2, 3), Ok(()));
        assert_eq!(check_index(3, 3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    }
}
