use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

use crate::big_num_constants::*;
use crate::BigInt;

#[inline(always)]
fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

// 实现打印
impl Display for BigInt {
    /// Up to 12 digits are written in full; longer values use the fixed
    /// scientific form `d.dddddde<exp>`. Any width flag (`{:10}`) is only a
    /// hint: it adds a single leading space to the full form instead of padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() > SCIENTIFIC_THRESHOLD {
            f.write_str(&self.to_scientific_string())
        } else {
            if f.width().is_some() {
                f.write_char(' ')?;
            }
            f.write_str(&self.to_digit_string())
        }
    }
}

impl BigInt {
    /// Every digit, most significant first, whatever the length.
    pub fn to_digit_string(&self) -> String {
        self.digits().iter().rev().map(|&d| digit_char(d)).collect()
    }
    /// Leading digit, a point, the next six digits (zero padded) and the
    /// decimal exponent, e.g. `1.000000e13`.
    pub fn to_scientific_string(&self) -> String {
        let mut msd_first = self.digits().iter().rev();
        let mut s = String::with_capacity(MANTISSA_DIGITS + 8);
        if let Some(&lead) = msd_first.next() {
            s.push(digit_char(lead));
        }
        s.push('.');
        for _ in 0..MANTISSA_DIGITS {
            s.push(msd_first.next().map_or('0', |&d| digit_char(d)));
        }
        s.push('e');
        s.push_str(&(self.len() - 1).to_string());
        s
    }
    /// Writes all digits with no scientific threshold and no width handling.
    pub fn write_digits<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_digit_string().as_bytes())
    }
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_digits(&mut out)?;
        out.flush()
    }
}

#[test]
fn test_display() {
    let a = BigInt::from(25);
    assert_eq!(a.to_string(), "25");
    assert_eq!(format!("{:10}", a), " 25");
    assert_eq!(format!("{}", a), "25");

    let twelve: BigInt = "989345275647".into();
    assert_eq!(twelve.to_string(), "989345275647");

    let fourteen: BigInt = "10000000000000".into();
    assert_eq!(fourteen.to_string(), "1.000000e13");
    assert_eq!(format!("{:10}", fourteen), "1.000000e13");
    let thirteen: BigInt = "1234567890123".into();
    assert_eq!(thirteen.to_string(), "1.234567e12");

    let big: BigInt = "9223372036854775807".into();
    assert_eq!(big.to_string(), "9.223372e18");
    assert_eq!(BigInt::new().to_string(), "0");
}

#[test]
fn test_scientific_padding() {
    let a = BigInt::from(42);
    assert_eq!(a.to_scientific_string(), "4.200000e1");
    assert_eq!(BigInt::new().to_scientific_string(), "0.000000e0");
}

#[test]
fn test_write_digits() {
    let big: BigInt = "9223372036854775807".into();
    let mut out = Vec::new();
    big.write_digits(&mut out).unwrap();
    assert_eq!(out, b"9223372036854775807");
    assert_eq!(big.to_digit_string(), "9223372036854775807");
}
