use lazy_static::*;

use crate::BigInt;

lazy_static! {
    pub static ref DIGIT_CACHE: [BigInt; 10] = [
        BigInt::from_raw(vec![0]),
        BigInt::from_raw(vec![1]),
        BigInt::from_raw(vec![2]),
        BigInt::from_raw(vec![3]),
        BigInt::from_raw(vec![4]),
        BigInt::from_raw(vec![5]),
        BigInt::from_raw(vec![6]),
        BigInt::from_raw(vec![7]),
        BigInt::from_raw(vec![8]),
        BigInt::from_raw(vec![9]),
    ];
    pub static ref ZERO: BigInt = DIGIT_CACHE[0].clone();
    pub static ref ONE: BigInt = DIGIT_CACHE[1].clone();
    pub static ref THREE: BigInt = DIGIT_CACHE[3].clone();
}

#[test]
fn test_digit_cache() {
    for (d, n) in DIGIT_CACHE.iter().enumerate() {
        assert_eq!(n.len(), 1);
        assert_eq!(n.to_u64(), Some(d as u64));
    }
    assert!(ZERO.is_zero());
    assert!(ONE.is_one());
}
