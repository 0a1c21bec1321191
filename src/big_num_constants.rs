pub const RADIX: u8 = 10;

/// Numbers with more digits than this are rendered in scientific notation.
pub const SCIENTIFIC_THRESHOLD: usize = 12;

/// Digits printed after the decimal point in scientific notation.
pub const MANTISSA_DIGITS: usize = 6;

pub const COLLATZ_SEPARATOR: &str = ". ";

/// Enough decimal digits to hold `u64::MAX`.
pub const DIGITS_PER_U64: usize = 20;
