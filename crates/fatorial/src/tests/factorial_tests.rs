use crate::error::FatError;
use crate::factorial::{factorial, wrapping_factorial, Overflow, MAX_INPUT};

#[test]
fn test_base_cases() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
}

#[test]
fn test_known_values() {
    assert_eq!(factorial(5).unwrap(), 120);
    assert_eq!(factorial(10).unwrap(), 3628800);
    assert_eq!(factorial(12).unwrap(), 479001600);
}

#[test]
fn test_recurrence() {
    for n in 2..=MAX_INPUT {
        assert_eq!(factorial(n).unwrap(), n * factorial(n - 1).unwrap(), "n = {}", n);
    }
}

#[test]
fn test_overflow_is_reported() {
    assert!(matches!(factorial(13), Err(FatError::Overflow { n: 13 })));
    assert!(matches!(factorial(i32::MAX), Err(FatError::Overflow { .. })));
}

#[test]
fn test_negative_is_rejected() {
    assert!(matches!(factorial(-1), Err(FatError::NegativeInput { n: -1 })));
    assert!(matches!(wrapping_factorial(-5), Err(FatError::NegativeInput { n: -5 })));
}

#[test]
fn test_wrapping_matches_c_int() {
    assert_eq!(wrapping_factorial(10).unwrap(), 3628800);
    assert_eq!(wrapping_factorial(13).unwrap(), 1932053504);
    assert_eq!(wrapping_factorial(33).unwrap(), -2147483648);
    assert_eq!(wrapping_factorial(34).unwrap(), 0);
    assert_eq!(wrapping_factorial(100_000).unwrap(), 0);
}

#[test]
fn test_overflow_mode() {
    assert_eq!(Overflow::default(), Overflow::Checked);
    assert!(Overflow::Checked.eval(13).is_err());
    assert_eq!(Overflow::Wrapping.eval(13).unwrap(), 1932053504);
}
