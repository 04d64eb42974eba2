// 415: Add Strings
// Digit-by-digit addition with carry, plus operand validation.

use leet_archive::easy::add_strings::add_strings;
use leet_archive::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Test 1: Judge examples
// =============================================================================
#[test]
fn judge_examples() {
    assert_eq!(add_strings("11", "123").unwrap(), "134");
    assert_eq!(add_strings("456", "77").unwrap(), "533");
    assert_eq!(add_strings("0", "0").unwrap(), "0");
}

// =============================================================================
// Test 2: Carry propagates into a new leading digit
// =============================================================================
#[test]
fn carry_extends_length() {
    assert_eq!(add_strings("999", "1").unwrap(), "1000");
    assert_eq!(add_strings("1", "9999999999").unwrap(), "10000000000");
    assert_eq!(add_strings("5", "5").unwrap(), "10");
}

// =============================================================================
// Test 3: Empty operands contribute nothing
// =============================================================================
#[test]
fn empty_operands() {
    assert_eq!(add_strings("", "").unwrap(), "");
    assert_eq!(add_strings("", "42").unwrap(), "42");
    assert_eq!(add_strings("42", "").unwrap(), "42");
}

// =============================================================================
// Test 4: Leading zeros are kept as the walk produces them
// =============================================================================
#[test]
fn leading_zeros_preserved() {
    assert_eq!(add_strings("007", "1").unwrap(), "008");
    assert_eq!(add_strings("000", "0").unwrap(), "000");
}

// =============================================================================
// Test 5: Non-digits are rejected with their location
// =============================================================================
#[test]
fn invalid_digits_rejected() {
    assert_eq!(
        add_strings("12a", "1"),
        Err(Error::InvalidDigit {
            operand: 1,
            position: 2,
            found: 'a'
        })
    );
    assert_eq!(
        add_strings("1", "-5"),
        Err(Error::InvalidDigit {
            operand: 2,
            position: 0,
            found: '-'
        })
    );
    // Non-ASCII digits are not decimal digits here.
    assert!(add_strings("١", "1").is_err());

    let msg = add_strings("1 2", "3").unwrap_err().to_string();
    assert!(msg.contains("position 1"), "{msg}");
}

// =============================================================================
// Test 6: Operands far beyond machine integer range
// =============================================================================
#[test]
fn very_long_operands() {
    let a = "9".repeat(500);
    let b = "1";
    let sum = add_strings(&a, b).unwrap();

    assert_eq!(sum.len(), 501);
    assert!(sum.starts_with('1'));
    assert!(sum[1..].bytes().all(|d| d == b'0'));
}

// =============================================================================
// Test 7: Agrees with native addition
// =============================================================================
#[test]
fn agrees_with_native_addition() {
    let mut rng = StdRng::seed_from_u64(415);

    for _ in 0..1000 {
        let a: u64 = rng.gen_range(0..u64::MAX / 2);
        let b: u64 = rng.gen_range(0..u64::MAX / 2);

        let sum = add_strings(&a.to_string(), &b.to_string()).unwrap();
        assert_eq!(sum, (a as u128 + b as u128).to_string());
    }
}
