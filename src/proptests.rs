//! Property-based tests for the digit arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating digit strings, leading zeros included
    fn digit_string() -> impl Strategy<Value = String> {
        "[0-9]{1,40}"
    }

    fn big() -> impl Strategy<Value = BigInt> {
        digit_string().prop_map(|s| BigInt::from(s.as_str()))
    }

    // Strategy for values that fit comfortably in u128 arithmetic
    fn small() -> impl Strategy<Value = u64> {
        0u64..u64::MAX
    }

    // Quotient and remainder by plain repeated subtraction
    fn div_rem_by_subtraction(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
        if b.is_zero() {
            return (BigInt::new(), BigInt::new());
        }
        let mut count = BigInt::new();
        let mut temp = a.clone();
        while temp >= *b {
            temp = &temp - b;
            count.pre_inc();
        }
        (count, temp)
    }

    proptest! {
        #[test]
        fn normalized(s in digit_string(), t in digit_string()) {
            let a = BigInt::from(s.as_str());
            let b = BigInt::from(t.as_str());
            let (lo, hi) = if a < b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) };
            for n in [&a + &b, &hi - &lo, &a * &b, &hi / &lo, &hi % &lo] {
                prop_assert!(!n.digits().is_empty());
                prop_assert!(n.len() == 1 || *n.digits().last().unwrap() != 0);
                prop_assert!(n.digits().iter().all(|&d| d <= 9));
            }
        }

        #[test]
        fn sub_inverts_add(a in big(), b in big()) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            prop_assert_eq!(&(&hi - &lo) + &lo, hi);
        }

        #[test]
        fn add_commutative(a in big(), b in big()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_identity(a in big()) {
            let zero = BigInt::new();
            let one = BigInt::from(1u8);
            prop_assert_eq!(&a * &zero, zero.clone());
            prop_assert_eq!(&a * &one, a);
        }

        #[test]
        fn mul_distributive(a in big(), b in big(), c in big()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn div_rem_identity(a in big(), b in big()) {
            prop_assume!(!b.is_zero());
            let q = &a / &b;
            let r = &a % &b;
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn long_division_matches_subtraction(a in 0u32..20_000, b in 0u32..500) {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            prop_assert_eq!(a.div_rem(&b), div_rem_by_subtraction(&a, &b));
        }

        #[test]
        fn matches_native(a in small(), b in small()) {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            let sum = (a as u128 + b as u128).to_string();
            let product = (a as u128 * b as u128).to_string();
            prop_assert_eq!((&x + &y).to_digit_string(), sum);
            prop_assert_eq!((&x * &y).to_digit_string(), product);
            if b != 0 {
                prop_assert_eq!((&x / &y).to_u64(), Some(a / b));
                prop_assert_eq!((&x % &y).to_u64(), Some(a % b));
            }
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn comparison_total(a in big(), b in big()) {
            let holds = [a < b, b < a, a == b].iter().filter(|&&x| x).count();
            prop_assert_eq!(holds, 1);
        }

        #[test]
        fn post_increment(a in big()) {
            let mut n = a.clone();
            let before = n.post_inc();
            prop_assert_eq!(before, a.clone());
            prop_assert_eq!(n, &a + &BigInt::from(1u8));
        }

        #[test]
        fn text_round_trip(a in big()) {
            let text = a.to_digit_string();
            prop_assert_eq!(BigInt::from(text.as_str()), a.clone());
            prop_assert_eq!(text.parse::<BigInt>().unwrap(), a);
        }
    }
}
