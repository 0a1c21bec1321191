use thiserror::Error;

pub type Result<T> = std::result::Result<T, BigIntError>;

/// Errors reported by the checked API.
///
/// The operator traits never produce these; they keep the silent fallbacks
/// (non-digits dropped, zero on a zero divisor).
#[derive(Error, Debug)]
pub enum BigIntError {
    #[error("invalid digit '{found}' at position {position} in \"{input}\"")]
    InvalidDigit {
        input: String,
        position: usize,
        found: char,
    },

    #[error("cannot parse a BigInt from an empty string")]
    Empty,

    #[error("division by zero")]
    DivisionByZero,

    #[error("subtraction underflow: minuend is smaller than subtrahend")]
    Underflow,

    #[error("the Collatz sequence never reaches 1 from zero")]
    CollatzFromZero,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[test]
fn test_error_messages() {
    let e = BigIntError::InvalidDigit { input: "12a".to_string(), position: 2, found: 'a' };
    assert_eq!(e.to_string(), "invalid digit 'a' at position 2 in \"12a\"");
    assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
}
