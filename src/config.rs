//! Knobs for the checked API.
//!
//! The defaults reproduce the lenient behaviour of the operators: parsing
//! drops anything that is not a digit and a zero divisor yields zero.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip every non-digit character.
    #[default]
    Lenient,
    /// Reject any non-digit character and the empty string.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivByZero {
    /// Quotient and remainder are both zero.
    #[default]
    Zero,
    /// Report `BigIntError::DivisionByZero`.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArithmeticConfig {
    pub parse: ParseMode,
    pub division_by_zero: DivByZero,
}

impl ArithmeticConfig {
    pub fn strict() -> Self {
        ArithmeticConfig { parse: ParseMode::Strict, division_by_zero: DivByZero::Error }
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse = mode;
        self
    }

    pub fn with_division_by_zero(mut self, policy: DivByZero) -> Self {
        self.division_by_zero = policy;
        self
    }
}

#[test]
fn test_config_defaults() {
    let c = ArithmeticConfig::default();
    assert_eq!(c.parse, ParseMode::Lenient);
    assert_eq!(c.division_by_zero, DivByZero::Zero);

    let c = c.with_parse_mode(ParseMode::Strict);
    assert_eq!(c.parse, ParseMode::Strict);
    assert_eq!(c.division_by_zero, DivByZero::Zero);
    assert_eq!(ArithmeticConfig::strict(), c.with_division_by_zero(DivByZero::Error));
}
