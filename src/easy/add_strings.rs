//! 415. Add Strings
//!
//! Sum two non-negative integers given as decimal digit strings without
//! converting either to a machine integer. Digits are added right to left
//! with a carry, so operands of any length work.

use crate::catalog::Problem;
use crate::error::{Error, Result};
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 415,
    title: "Add Strings",
    slug: "add-strings",
    difficulty: Difficulty::Easy,
    topics: &["Math", "String", "Simulation"],
};

/// Decimal sum of `num1` and `num2`.
///
/// An empty operand contributes nothing, so `add_strings("", "")` is `""`.
/// Leading zeros in the inputs are carried through as the digit walk
/// produces them (`"007" + "1"` is `"008"`).
///
/// # Errors
/// `Error::InvalidDigit` if either operand contains a non-digit.
pub fn add_strings(num1: &str, num2: &str) -> Result<String> {
    let a = digits(num1, 1)?;
    let b = digits(num2, 2)?;

    // Built least-significant digit first, reversed at the end.
    let mut out: Vec<u8> = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut i = a.len();
    let mut j = b.len();
    let mut carry = 0u8;

    while i > 0 || j > 0 || carry > 0 {
        let mut sum = carry;
        if i > 0 {
            i -= 1;
            sum += a[i];
        }
        if j > 0 {
            j -= 1;
            sum += b[j];
        }
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }

    out.reverse();
    // Only ASCII digits were pushed.
    Ok(out.into_iter().map(char::from).collect())
}

/// Validate an operand and return its digit values.
fn digits(num: &str, operand: usize) -> Result<Vec<u8>> {
    num.char_indices()
        .map(|(position, ch)| match ch.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(Error::InvalidDigit {
                operand,
                position,
                found: ch,
            }),
        })
        .collect()
}
