//! # BigInt
//! Non-negative arbitrary-precision integers stored as decimal digits, least significant digit first.
//! # Example
//! ```
//! use dec_big_num::BigInt;
//!
//! let a = BigInt::from(1234);
//! let b: BigInt = "25".into();
//! assert_eq!(&a / &b, BigInt::from(49));
//! assert_eq!(&a % &b, BigInt::from(9));
//! assert_eq!((&a - &b) + &b, a);
//! ```
//!

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Index,
};
use std::str::FromStr;

use log::{trace, warn};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::config::{ArithmeticConfig, DivByZero, ParseMode};
use crate::error::{BigIntError, Result};

macro_rules! new_zero_digits {
    ($len: expr) => {
        vec![0u8; $len as usize]
    };
}

// 去掉高位多余的 0, 至少保留一位
macro_rules! trim_leading_zero {
    ($digits: expr) => {
        {
            while $digits.len() > 1 && $digits.last() == Some(&0) {
                $digits.pop();
            }
            if $digits.is_empty() {
                $digits.push(0);
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    /// `digits` must already be normalized: least significant first, each in `0..=9`,
    /// no zero at the most significant end unless it is the only digit.
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        BigInt { digits }
    }
    fn from_digits(mut digits: Vec<u8>) -> Self {
        trim_leading_zero!(digits);
        BigInt { digits }
    }
    pub fn new() -> Self {
        ZERO.clone()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

// 杂项辅助函数
impl BigInt {
    /// Number of decimal digits. Zero has one digit.
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    /// Digits, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }
    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(RADIX as u64)?.checked_add(d as u64))
    }
    /// Native step count for `fibo` and `fact`.
    ///
    /// Values past `u64::MAX` wrap modulo 2^64. This is a known limitation,
    /// reported with a warning rather than corrected.
    pub(crate) fn to_count(&self) -> u64 {
        match self.to_u64() {
            Some(n) => n,
            None => {
                let wrapped = self
                    .digits
                    .iter()
                    .rev()
                    .fold(0u64, |acc, &d| acc.wrapping_mul(RADIX as u64).wrapping_add(d as u64));
                warn!("{} digit value does not fit in u64, count truncated to {}", self.len(), wrapped);
                wrapped
            }
        }
    }
    /// Divides by two in place, walking from the most significant digit down.
    pub(crate) fn halve(&mut self) {
        let mut remainder = 0u8;
        for d in self.digits.iter_mut().rev() {
            let val = *d + remainder * RADIX;
            *d = val / 2;
            remainder = val % 2;
        }
        trim_leading_zero!(self.digits);
    }
    // remainder * 10 + d, used by long division
    fn push_low_digit(&mut self, d: u8) {
        if self.is_zero() {
            self.digits[0] = d;
        } else {
            self.digits.insert(0, d);
        }
    }
}

// 实现整数转换
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                warn!("negative value {} is not representable, using zero", val);
                ZERO.clone()
            } else {
                BigInt::value_of(val as u64)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(mut val: u64) -> BigInt {
        if val < RADIX as u64 {
            return DIGIT_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(DIGITS_PER_U64);
        while val > 0 {
            digits.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
        }
        BigInt::from_raw(digits)
    }
}

// 实现解析
impl BigInt {
    /// Parses `val` under the given configuration.
    ///
    /// In lenient mode every non-digit character (signs and whitespace included)
    /// is skipped and a string without digits is zero. Strict mode rejects both.
    pub fn parse(val: &str, config: &ArithmeticConfig) -> Result<BigInt> {
        match config.parse {
            ParseMode::Lenient => Ok(BigInt::parse_lenient(val)),
            ParseMode::Strict => BigInt::parse_strict(val),
        }
    }
    fn parse_lenient(val: &str) -> BigInt {
        let digits = val
            .chars()
            .rev()
            .filter_map(|c| c.to_digit(RADIX as u32))
            .map(|d| d as u8)
            .collect();
        BigInt::from_digits(digits)
    }
    fn parse_strict(val: &str) -> Result<BigInt> {
        if val.is_empty() {
            return Err(BigIntError::Empty);
        }
        let mut digits = Vec::with_capacity(val.len());
        for (position, c) in val.chars().enumerate() {
            match c.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(BigIntError::InvalidDigit {
                        input: val.to_string(),
                        position,
                        found: c,
                    })
                }
            }
        }
        digits.reverse();
        Ok(BigInt::from_digits(digits))
    }
}

impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        BigInt::parse_lenient(val)
    }
}

impl From<String> for BigInt {
    fn from(val: String) -> Self {
        BigInt::parse_lenient(&val)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse_strict(s)
    }
}

// 实现大小比较
impl BigInt {
    fn compare_digits(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_digits(other)
    }
}

// 为 owned / borrowed 的组合转发运算符
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $op: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$op(self, rhs)
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: Self) -> Self::Output {
                BigInt::$op(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$op(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$op(self, &rhs)
            }
        }

        impl $assign_imp for BigInt {
            fn $assign_method(&mut self, rhs: Self) {
                *self = BigInt::$op(self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$op(self, rhs);
            }
        }
    };
}

// 实现加法
impl BigInt {
    fn sum(&self, val: &BigInt) -> BigInt {
        BigInt::from_digits(BigInt::add_digits(&self.digits, &val.digits))
    }
    fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry = 0u8;
        let mut i = 0;
        while i < len || carry != 0 {
            let sum = carry + x.get(i).copied().unwrap_or(0) + y.get(i).copied().unwrap_or(0);
            result.push(sum % RADIX);
            carry = sum / RADIX;
            i += 1;
        }
        result
    }
}

forward_binop!(Add, add, AddAssign, add_assign, sum);

// 实现减法
impl BigInt {
    /// Digit-wise difference over the minuend's length.
    ///
    /// The caller guarantees `self >= val`. Otherwise the final borrow is
    /// dropped and the result is meaningless (but still a valid BigInt).
    fn difference(&self, val: &BigInt) -> BigInt {
        BigInt::from_digits(BigInt::sub_digits(&self.digits, &val.digits))
    }
    fn sub_digits(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0i8;
        for (i, &d) in big.iter().enumerate() {
            let mut diff = d as i8 - borrow - little.get(i).copied().unwrap_or(0) as i8;
            if diff < 0 {
                diff += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }
        result
    }
    pub fn checked_sub(&self, val: &BigInt) -> Result<BigInt> {
        if self < val {
            Err(BigIntError::Underflow)
        } else {
            Ok(self.difference(val))
        }
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign, difference);

// 实现乘法
impl BigInt {
    fn product(&self, val: &BigInt) -> BigInt {
        if self.is_zero() || val.is_zero() {
            return ZERO.clone();
        }
        let x = &self.digits;
        let y = &val.digits;
        let mut result = new_zero_digits!(x.len() + y.len());

        for (i, &a) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let cur = result[i + j] as u64
                    + a as u64 * y.get(j).copied().unwrap_or(0) as u64
                    + carry;
                result[i + j] = (cur % RADIX as u64) as u8;
                carry = cur / RADIX as u64;
                j += 1;
            }
        }
        BigInt::from_digits(result)
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign, product);

// 实现除法和取余
impl BigInt {
    /// Quotient and remainder together. A zero divisor gives `(0, 0)`.
    pub fn div_rem(&self, val: &BigInt) -> (BigInt, BigInt) {
        if val.is_zero() {
            return (ZERO.clone(), ZERO.clone());
        }
        self.divide_long(val)
    }
    /// Like [`BigInt::div_rem`], with the zero-divisor case decided by `config`.
    pub fn div_rem_with(&self, val: &BigInt, config: &ArithmeticConfig) -> Result<(BigInt, BigInt)> {
        if val.is_zero() && config.division_by_zero == DivByZero::Error {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_rem(val))
    }
    pub fn checked_div(&self, val: &BigInt) -> Result<BigInt> {
        self.div_rem_with(val, &ArithmeticConfig::strict()).map(|(q, _)| q)
    }
    pub fn checked_rem(&self, val: &BigInt) -> Result<BigInt> {
        self.div_rem_with(val, &ArithmeticConfig::strict()).map(|(_, r)| r)
    }
    fn quotient(&self, val: &BigInt) -> BigInt {
        self.div_rem(val).0
    }
    fn remainder(&self, val: &BigInt) -> BigInt {
        self.div_rem(val).1
    }
    /// Schoolbook long division. Each quotient digit is found by subtracting
    /// the divisor from the running remainder until it no longer fits, so the
    /// results match plain repeated subtraction.
    fn divide_long(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        if self < divisor {
            return (ZERO.clone(), self.clone());
        }
        let mut quotient = new_zero_digits!(self.digits.len());
        let mut remainder = ZERO.clone();

        for (pos, &d) in self.digits.iter().enumerate().rev() {
            remainder.push_low_digit(d);
            let mut q = 0u8;
            while remainder >= *divisor {
                remainder = remainder.difference(divisor);
                q += 1;
            }
            quotient[pos] = q;
            trace!("long division: quotient digit {} = {}", pos, q);
        }

        (BigInt::from_digits(quotient), remainder)
    }
}

forward_binop!(Div, div, DivAssign, div_assign, quotient);
forward_binop!(Rem, rem, RemAssign, rem_assign, remainder);

// 实现与原生整数的加减
macro_rules! impl_native_ops {
    ($($t: ty),*) => {
    $(
    impl Add<$t> for BigInt {
        type Output = BigInt;

        fn add(self, rhs: $t) -> Self::Output {
            self.sum(&BigInt::from(rhs))
        }
    }

    impl Add<$t> for &BigInt {
        type Output = BigInt;

        fn add(self, rhs: $t) -> Self::Output {
            self.sum(&BigInt::from(rhs))
        }
    }

    impl Add<BigInt> for $t {
        type Output = BigInt;

        fn add(self, rhs: BigInt) -> Self::Output {
            BigInt::from(self).sum(&rhs)
        }
    }

    impl Add<&BigInt> for $t {
        type Output = BigInt;

        fn add(self, rhs: &BigInt) -> Self::Output {
            BigInt::from(self).sum(rhs)
        }
    }

    impl Sub<$t> for BigInt {
        type Output = BigInt;

        fn sub(self, rhs: $t) -> Self::Output {
            self.difference(&BigInt::from(rhs))
        }
    }

    impl Sub<$t> for &BigInt {
        type Output = BigInt;

        fn sub(self, rhs: $t) -> Self::Output {
            self.difference(&BigInt::from(rhs))
        }
    }
    )*
    };
}
impl_native_ops!(u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

// 实现自增
impl BigInt {
    fn increment(&mut self) {
        let mut carry = true;
        for d in self.digits.iter_mut() {
            if *d == RADIX - 1 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            self.digits.push(1);
        }
    }
    /// `++x`: adds one and returns the new value.
    pub fn pre_inc(&mut self) -> BigInt {
        self.increment();
        self.clone()
    }
    /// `x++`: adds one and returns the value from before.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.increment();
        old
    }
}

// 实现下标访问
impl Index<usize> for BigInt {
    type Output = BigInt;

    /// The digit at `index` (0 is the ones place), or zero past the end.
    fn index(&self, index: usize) -> &Self::Output {
        match self.digits.get(index) {
            Some(&d) => &DIGIT_CACHE[d as usize],
            None => &DIGIT_CACHE[0],
        }
    }
}

impl BigInt {
    pub fn digit(&self, index: usize) -> BigInt {
        self[index].clone()
    }
}

#[test]
fn test_from_native() {
    assert_eq!(BigInt::from(0u32).digits(), &[0]);
    assert_eq!(BigInt::from(1234).digits(), &[4, 3, 2, 1]);
    assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(BigInt::from(-5i32), BigInt::new());
    assert_eq!(BigInt::default(), BigInt::from(0u8));
}

#[test]
fn test_parse() {
    let a: BigInt = "25".into();
    assert_eq!(a, BigInt::from(25));
    let a: BigInt = "-1,234 ".into();
    assert_eq!(a, BigInt::from(1234));
    let a: BigInt = "".into();
    assert!(a.is_zero());
    let a: BigInt = "abc".into();
    assert!(a.is_zero());
    let a: BigInt = "000120".into();
    assert_eq!(a.digits(), &[0, 2, 1]);

    assert!("123".parse::<BigInt>().is_ok());
    match "12x3".parse::<BigInt>() {
        Err(BigIntError::InvalidDigit { position, found, .. }) => {
            assert_eq!(position, 2);
            assert_eq!(found, 'x');
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!("".parse::<BigInt>(), Err(BigIntError::Empty)));

    let lenient = ArithmeticConfig::default();
    assert_eq!(BigInt::parse("+42", &lenient).unwrap(), BigInt::from(42));
    assert!(BigInt::parse("+42", &ArithmeticConfig::strict()).is_err());
}

#[test]
fn test_compare() {
    let a = BigInt::from(99);
    let b = BigInt::from(100);
    let c = BigInt::from(123);
    let d = BigInt::from(129);
    assert!(a < b);
    assert!(c < d);
    assert!(d >= c);
    assert!(c >= c.clone());
    assert_eq!(BigInt::from(25), BigInt::from("25"));
    assert_eq!(c.cmp(&c.clone()), Ordering::Equal);
}

#[test]
fn test_add() {
    let a = BigInt::from(999);
    let b = BigInt::from(1);
    assert_eq!(&a + &b, BigInt::from(1000));
    assert_eq!(BigInt::new() + BigInt::new(), BigInt::new());
    assert_eq!((BigInt::new() + BigInt::new()).digits(), &[0]);
    assert_eq!(10u32 + BigInt::from(25), BigInt::from(35));
    assert_eq!(BigInt::from(25) + 10u32, BigInt::from(35));

    let a: BigInt = "123456789012345678901234567890".into();
    let b: BigInt = "987654321098765432109876543210".into();
    let sum: BigInt = "1111111110111111111011111111100".into();
    assert_eq!(a + b, sum);

    let mut c = BigInt::from(5);
    c += BigInt::from(7);
    assert_eq!(c, BigInt::from(12));
}

#[test]
fn test_sub() {
    let a = BigInt::from(1000);
    let b = BigInt::from(1);
    assert_eq!(&a - &b, BigInt::from(999));
    assert_eq!((&a - &a).digits(), &[0]);
    assert_eq!(BigInt::from(1000) - 1u32, BigInt::from(999));
    assert_eq!(BigInt::from(1234).checked_sub(&BigInt::from(34)).unwrap(), BigInt::from(1200));
    assert!(matches!(BigInt::from(3).checked_sub(&BigInt::from(5)), Err(BigIntError::Underflow)));

    // minuend < subtrahend keeps the borrow-dropping result
    assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(8));
    assert_eq!(BigInt::from(5) - BigInt::from(123), BigInt::from(2));
}

#[test]
fn test_mul() {
    let a: BigInt = "10000000000000000".into();
    let b: BigInt = "3001".into();
    let result: BigInt = "30010000000000000000".into();
    assert_eq!(result, &a * &b);
    assert_eq!(result, b * a);

    let zero = BigInt::new();
    let c = BigInt::from(987654321u64);
    assert_eq!((&c * &zero).digits(), &[0]);
    assert_eq!(&zero * &c, zero);

    let big: BigInt = "9223372036854775807".into();
    let s2: BigInt = "1234".into();
    let result: BigInt = "11381641093478793345838".into();
    assert_eq!(&s2 * &big, result);
    assert_eq!(&big * &s2, result);
}

#[test]
fn test_div() {
    let a = BigInt::from(1234);
    let b = BigInt::from(25);
    assert_eq!(&a / &b, BigInt::from(49));
    assert_eq!(&a % &b, BigInt::from(9));

    let a = BigInt::from("120");
    let b = BigInt::from("13");
    assert_eq!(a / b, BigInt::from(9));

    let a = BigInt::from("10000000000000000000000000000000000");
    let b = BigInt::from("1000");
    let c = BigInt::from("10000000000000000000000000000000");
    assert_eq!(&a / &b, c);
    assert!((&a % &b).is_zero());

    let a = BigInt::from(7);
    let b = BigInt::from(10);
    assert_eq!(a.div_rem(&b), (BigInt::new(), BigInt::from(7)));
}

#[test]
fn test_div_by_zero() {
    let a = BigInt::from(1234);
    let zero = BigInt::new();
    assert!((&a / &zero).is_zero());
    assert!((&a % &zero).is_zero());
    assert!(matches!(a.checked_div(&zero), Err(BigIntError::DivisionByZero)));
    assert!(matches!(a.checked_rem(&zero), Err(BigIntError::DivisionByZero)));
    let (q, r) = a.div_rem_with(&zero, &ArithmeticConfig::default()).unwrap();
    assert!(q.is_zero() && r.is_zero());
    assert_eq!(a.checked_div(&BigInt::from(2)).unwrap(), BigInt::from(617));
}

#[test]
fn test_mod() {
    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".into();
    let b: BigInt = "526738495607659438721653478560954837265378495607".into();
    let r: BigInt = "393707270751296419349581795408095683999332705291".into();
    assert_eq!(a % b, r);
}

#[test]
fn test_increment() {
    let mut n1 = BigInt::from(25);
    let before = n1.post_inc();
    assert_eq!(before, BigInt::from(25));
    assert_eq!(n1, BigInt::from(26));

    let mut s1: BigInt = "25".into();
    let after = s1.pre_inc();
    assert_eq!(after, BigInt::from(26));
    assert_eq!(s1, BigInt::from(26));

    let mut n = BigInt::from(999);
    n.pre_inc();
    assert_eq!(n, BigInt::from(1000));
}

#[test]
fn test_index() {
    let n = BigInt::from(1234);
    assert_eq!(n[0], BigInt::from(4));
    assert_eq!(n[3], BigInt::from(1));
    assert_eq!(n[4], BigInt::new());
    assert_eq!(n.digit(usize::MAX), BigInt::new());
}

#[test]
fn test_halve() {
    let mut n = BigInt::from(1000);
    n.halve();
    assert_eq!(n, BigInt::from(500));
    let mut n = BigInt::from(10);
    n.halve();
    assert_eq!(n.digits(), &[5]);
    let mut n = BigInt::from(1);
    n.halve();
    assert!(n.is_zero());
}

#[test]
fn test_to_count() {
    assert_eq!(BigInt::from(3000).to_count(), 3000);
    let big: BigInt = "18446744073709551616".into();
    assert_eq!(big.to_u64(), None);
    assert_eq!(big.to_count(), 0);
}
