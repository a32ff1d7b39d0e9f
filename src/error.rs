use thiserror::Error;

use crate::decimal::parse_decimal_error::ParseDecimalError;

/// Every way a decimal operation can fail. Failures are never partial: an operation either
/// yields a valid `Decimal` or one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("overflow: coefficient does not fit in 96 bits")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent is not an integer")]
    NonIntegerExponent,

    #[error("undefined operation: zero raised to a negative power")]
    UndefinedOperation,

    #[error("square root of a negative number")]
    NegativeSquareRoot,

    #[error("scale {0} is out of range (maximum is 28)")]
    ScaleOutOfRange(u32),

    #[error(transparent)]
    Parse(#[from] ParseDecimalError),
}

pub type Result<T> = core::result::Result<T, DecimalError>;
