use thiserror::Error;

/// What was wrong with a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing to parse, or only a sign and/or point.
    Empty,
    /// A character that is not a digit, sign, point or exponent marker.
    InvalidDigit,
    /// The exponent is malformed or absurdly large.
    InvalidExponent,
    /// The integer part does not fit in 96 bits.
    Overflow,
}

/// Returned by `Decimal::from_str`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", self.description())]
pub struct ParseDecimalError {
    kind: ParseErrorKind,
}

impl ParseDecimalError {
    pub(crate) fn new(kind: ParseErrorKind) -> ParseDecimalError {
        ParseDecimalError { kind }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    fn description(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::Empty => "cannot parse decimal from empty string",
            ParseErrorKind::InvalidDigit => "invalid digit found in string",
            ParseErrorKind::InvalidExponent => "invalid exponent in decimal literal",
            ParseErrorKind::Overflow => "integer part too large to fit in 96 bits",
        }
    }
}
