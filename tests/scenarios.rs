use dec_big_num::{ArithmeticConfig, BigInt, BigIntError, DivByZero, ParseMode};

#[test]
fn test_division_scenario() {
    let n1 = BigInt::from(25);
    let n2 = BigInt::from(1234);
    assert_eq!(&n2 / &n1, BigInt::from(49));
    assert_eq!(&n2 % &n1, BigInt::from(9));
    assert_eq!(format!("{}/{} = {} rem {}", n2, n1, &n2 / &n1, &n2 % &n1), "1234/25 = 49 rem 9");
}

#[test]
fn test_constructors_agree() {
    let n1 = BigInt::from(25);
    let s1: BigInt = "25".into();
    let n2 = BigInt::from(1234);
    let n3 = n2.clone();
    assert_eq!(n1, s1);
    assert_eq!(n2, n3);
    assert_eq!(format!("{:10}", n1), " 25");
    assert_eq!(format!("{:10}", BigInt::from(i32::MAX)), " 2147483647");
}

#[test]
fn test_sequences() {
    assert_eq!(BigInt::from(5).fact(), BigInt::from(120));
    assert_eq!(BigInt::from(10).fibo(), BigInt::from(55));
    assert_eq!(BigInt::from(27).collatz(false).unwrap(), BigInt::from(111));

    let z1 = BigInt::from(123);
    let mut trace = Vec::new();
    let steps = z1.collatz_to(&mut trace).unwrap();
    assert_eq!(steps, BigInt::from(46));
    let trace = String::from_utf8(trace).unwrap();
    assert!(trace.starts_with("123. 370. 185. 556. "));
    assert!(trace.ends_with(". 4. 2. 1"));
}

#[test]
fn test_large_fibo_and_fact_render_scientific() {
    let fib = BigInt::from(3000).fibo();
    assert_eq!(fib.len(), 627);
    assert_eq!(fib.to_string(), "4.106158e626");

    let fact = BigInt::from(50).fact();
    assert_eq!(
        fact.to_digit_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
    assert_eq!(fact.to_string(), "3.041409e64");
}

#[test]
fn test_native_and_increment() {
    let mut n1 = BigInt::from(25);
    assert_eq!(BigInt::from(10) + &n1, BigInt::from(35));
    assert_eq!(&n1 + BigInt::from(10), BigInt::from(35));
    assert_eq!(10u64 + &n1, BigInt::from(35));
    assert_eq!(&n1 - 5u64, BigInt::from(20));

    assert_eq!(n1.post_inc(), BigInt::from(25));
    assert_eq!(n1, BigInt::from(26));
    assert_eq!(n1.pre_inc(), BigInt::from(27));
    assert_eq!(n1[0], BigInt::from(7));
    assert_eq!(n1[9], BigInt::new());
}

#[test]
fn test_checked_api() {
    let strict = ArithmeticConfig::strict();
    assert!(matches!(BigInt::parse("12 3", &strict), Err(BigIntError::InvalidDigit { position: 2, .. })));
    assert!(matches!(BigInt::parse("", &strict), Err(BigIntError::Empty)));

    let lenient = ArithmeticConfig::default().with_division_by_zero(DivByZero::Error);
    assert_eq!(lenient.parse, ParseMode::Lenient);
    assert_eq!(BigInt::parse("1 2 3", &lenient).unwrap(), BigInt::from(123));

    let a = BigInt::from(10);
    let zero = BigInt::new();
    assert!(matches!(a.div_rem_with(&zero, &lenient), Err(BigIntError::DivisionByZero)));
    let (q, r) = a.div_rem_with(&BigInt::from(3), &lenient).unwrap();
    assert_eq!((q, r), (BigInt::from(3), BigInt::from(1)));
}
