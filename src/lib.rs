//! Dec Big Num \
//! This crate provides:
//! - [`BigInt`]: non-negative arbitrary-precision integers kept as decimal digits,
//!   with `+ - * / %`, comparisons, increment and digit indexing.
//! - `fibo`, `fact` and `collatz` built only from that arithmetic.
//! - [`ArithmeticConfig`]: strict or lenient parsing and the zero-divisor policy of the checked API.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod config;
mod error;
mod format;
mod sequence;

#[cfg(test)]
mod proptests;

pub use big_int::BigInt;
pub use config::{ArithmeticConfig, DivByZero, ParseMode};
pub use error::{BigIntError, Result};
