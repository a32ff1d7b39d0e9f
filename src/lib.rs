//! Exact fixed-point decimal arithmetic on a 96-bit coefficient.
//!
//! A [`Decimal`] is a sign, a coefficient below `2^96` and a scale from 0 to 28: `-1.50` is the
//! coefficient 150 at scale 2, negated. Integer sums run on the three 32-bit limbs directly;
//! everything else falls back to digit buffers and rounds the result back into the
//! representation half to even. Results that cannot be represented are errors, never silently
//! wrapped or saturated.
//!
//! ```
//! use decimal96::Decimal;
//!
//! let price: Decimal = "19.99".parse().unwrap();
//! let total = price.checked_mul(&Decimal::from(3)).unwrap();
//! assert_eq!("59.97", total.to_string());
//!
//! let third = Decimal::ONE.true_divide(&Decimal::from(3)).unwrap();
//! assert_eq!("0.3333333333333333333333333333", third.to_string());
//! ```

mod bit_ops;
mod decimal;
mod digits;
mod error;
mod num_ops;
mod zero_pad;

pub use decimal::consts;
pub use decimal::parse_decimal_error::{ParseDecimalError, ParseErrorKind};
pub use decimal::Decimal;
pub use error::{DecimalError, Result};
