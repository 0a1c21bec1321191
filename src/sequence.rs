//! Fibonacci, factorial and Collatz on top of the digit arithmetic.
//!
//! `fibo` and `fact` read their count from the receiver through a native
//! `u64`, so a receiver beyond `u64::MAX` wraps (with a warning).

use std::io::{self, Write};

use log::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};
use crate::BigInt;

impl BigInt {
    /// The `self`-th Fibonacci number, counting from `fibo(0) == 0`.
    pub fn fibo(&self) -> BigInt {
        let n = self.to_count();
        debug!("fibo: {} steps", n);
        BigInt::fibo_tail(n, ZERO.clone(), ONE.clone())
    }
    // (a, b) -> (b, a + b), n times
    fn fibo_tail(mut n: u64, mut a: BigInt, mut b: BigInt) -> BigInt {
        while n != 0 {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
            n -= 1;
        }
        a
    }

    /// `self!`; zero and one both give one.
    pub fn fact(&self) -> BigInt {
        let n = self.to_count();
        debug!("fact: {} steps", n);
        BigInt::fact_tail(n, ONE.clone())
    }
    fn fact_tail(mut n: u64, mut acc: BigInt) -> BigInt {
        while n > 1 {
            acc *= BigInt::from(n);
            n -= 1;
        }
        acc
    }

    /// Number of Collatz steps from `self` down to 1.
    ///
    /// With `print_steps` every visited value is written to stdout, separated
    /// by `". "`, followed by a newline. Zero never reaches 1 and is rejected.
    pub fn collatz(&self, print_steps: bool) -> Result<BigInt> {
        if !print_steps {
            return self.run_collatz(None);
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let steps = self.run_collatz(Some(&mut out))?;
        writeln!(out)?;
        Ok(steps)
    }

    /// Like [`BigInt::collatz`] with tracing on, writing the trace to `out`.
    pub fn collatz_to<W: Write>(&self, out: &mut W) -> Result<BigInt> {
        self.run_collatz(Some(out))
    }

    fn run_collatz(&self, mut out: Option<&mut dyn Write>) -> Result<BigInt> {
        if self.is_zero() {
            return Err(BigIntError::CollatzFromZero);
        }
        let mut curr = self.clone();
        let mut steps = ZERO.clone();

        loop {
            if let Some(out) = out.as_mut() {
                write!(out, "{}", curr)?;
                if !curr.is_one() {
                    out.write_all(COLLATZ_SEPARATOR.as_bytes())?;
                }
            }

            if curr.is_one() {
                break;
            }

            if curr.is_even() {
                curr.halve();
            } else {
                curr = &curr * &*THREE + &*ONE;
            }

            steps.pre_inc();
            trace!("collatz: step {} -> {}", steps, curr);
        }

        debug!("collatz({}) finished in {} steps", self, steps);
        Ok(steps)
    }
}

#[test]
fn test_fibo() {
    assert_eq!(BigInt::from(10).fibo(), BigInt::from(55));
    assert_eq!(BigInt::new().fibo(), BigInt::new());
    assert_eq!(BigInt::from(1).fibo(), BigInt::from(1));
    let f100: BigInt = "354224848179261915075".into();
    assert_eq!(BigInt::from(100).fibo(), f100);
}

#[test]
fn test_fact() {
    assert_eq!(BigInt::from(5).fact(), BigInt::from(120));
    assert_eq!(BigInt::new().fact(), BigInt::from(1));
    assert_eq!(BigInt::from(1).fact(), BigInt::from(1));
    let f25: BigInt = "15511210043330985984000000".into();
    assert_eq!(BigInt::from(25).fact(), f25);
}

#[test]
fn test_collatz() {
    assert_eq!(BigInt::from(27).collatz(false).unwrap(), BigInt::from(111));
    assert_eq!(BigInt::from(1).collatz(false).unwrap(), BigInt::new());
    let z2: BigInt = "989345275647".into();
    assert_eq!(z2.collatz(false).unwrap(), BigInt::from(1348));
    assert!(matches!(BigInt::new().collatz(false), Err(BigIntError::CollatzFromZero)));
}

#[test]
fn test_collatz_trace() {
    let mut out = Vec::new();
    let steps = BigInt::from(6).collatz_to(&mut out).unwrap();
    assert_eq!(steps, BigInt::from(8));
    assert_eq!(String::from_utf8(out).unwrap(), "6. 3. 10. 5. 16. 8. 4. 2. 1");
}
