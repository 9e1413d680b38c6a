use core::str::FromStr;
use crate::{Error, ParseErrorKind, Result};

/// Parse a parenthesized, comma separated list of exactly `N` numbers, e.g. `"(1, 2.5, -3)"`
pub(crate) fn parse_tuple<T: FromStr + Copy, const N: usize>(text: &str) -> Result<[T; N]> {
    let inner = text.trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(Error::Parse(ParseErrorKind::MissingParentheses))?;

    let found = inner.split(',').count();
    if found != N {
        return Err(Error::Parse(ParseErrorKind::ComponentCount { expected: N, found }));
    }

    let mut vals = Vec::with_capacity(N);
    for (index, part) in inner.split(',').enumerate() {
        let val = part.trim().parse::<T>().map_err(|_| Error::Parse(ParseErrorKind::InvalidNumber { index }))?;
        vals.push(val);
    }

    vals.try_into().map_err(|_| Error::Parse(ParseErrorKind::ComponentCount { expected: N, found }))
}

/// Write values as a parenthesized, comma separated list
pub(crate) fn write_tuple<T: core::fmt::Display>(f: &mut core::fmt::Formatter<'_>, vals: &[T]) -> core::fmt::Result {
    f.write_str("(")?;
    for (idx, val) in vals.iter().enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }
        f.write_fmt(format_args!("{val}"))?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(parse_tuple::<f32, 3>("(1, 2.5, -3)"), Ok([1.0, 2.5, -3.0]));
        assert_eq!(parse_tuple::<f64, 2>("  ( 0.25 ,1e3 ) "), Ok([0.25, 1000.0]));
        assert_eq!(parse_tuple::<i32, 4>("(1,2,3,4)"), Ok([1, 2, 3, 4]));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse_tuple::<f32, 2>("1, 2"), Err(Error::Parse(ParseErrorKind::MissingParentheses)));
        assert_eq!(parse_tuple::<f32, 3>("(1, 2)"), Err(Error::Parse(ParseErrorKind::ComponentCount { expected: 3, found: 2 })));
        assert_eq!(parse_tuple::<f32, 2>("(1, x)"), Err(Error::Parse(ParseErrorKind::InvalidNumber { index: 1 })));
        assert_eq!(parse_tuple::<f32, 1>("()"), Err(Error::Parse(ParseErrorKind::InvalidNumber { index: 0 })));
    }
}
