//! 680. Valid Palindrome II
//!
//! Can the input become a palindrome by deleting at most one element?
//!
//! Walk inward from both ends. At the first mismatch the only two repairs
//! are dropping the left element or dropping the right one, and the
//! remaining window must then be a palindrome as is.

use crate::catalog::Problem;
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 680,
    title: "Valid Palindrome II",
    slug: "valid-palindrome-ii",
    difficulty: Difficulty::Easy,
    topics: &["Two Pointers", "String", "Greedy"],
};

/// Returns true if `s` reads the same forwards and backwards.
pub fn is_palindrome<T: PartialEq>(s: &[T]) -> bool {
    s.iter().eq(s.iter().rev())
}

/// Returns true if `s` is a palindrome after removing at most one element.
pub fn valid_palindrome_by<T: PartialEq>(s: &[T]) -> bool {
    // Half-open window [lo, hi).
    let mut lo = 0;
    let mut hi = s.len();

    while lo + 1 < hi {
        if s[lo] == s[hi - 1] {
            lo += 1;
            hi -= 1;
        } else {
            return is_palindrome(&s[lo + 1..hi]) || is_palindrome(&s[lo..hi - 1]);
        }
    }

    true
}

/// Byte-wise check for string input.
pub fn valid_palindrome(s: &str) -> bool {
    valid_palindrome_by(s.as_bytes())
}
