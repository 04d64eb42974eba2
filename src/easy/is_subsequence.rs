//! 392. Is Subsequence
//!
//! `candidate` is a subsequence of `reference` if it can be obtained by
//! deleting zero or more elements of `reference` without reordering the rest.
//!
//! Two cursors, one per sequence:
//!
//! ```text
//! reference:  a  h  b  g  d  c
//!             ^     ^        ^     reference cursor moves every step
//! candidate:  a     b        c
//!             ^     ^        ^     candidate cursor moves only on a match
//! ```
//!
//! O(n) in the length of `reference`, O(1) extra space.

use crate::catalog::Problem;
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 392,
    title: "Is Subsequence",
    slug: "is-subsequence",
    difficulty: Difficulty::Easy,
    topics: &["Two Pointers", "String", "Dynamic Programming"],
};

/// Returns true if every element of `candidate` appears in `reference`
/// in the same relative order.
///
/// An empty candidate is a subsequence of anything; a candidate longer
/// than the reference never is.
pub fn is_subsequence<T: PartialEq>(candidate: &[T], reference: &[T]) -> bool {
    let mut c = 0;
    let mut r = 0;

    while c < candidate.len() && r < reference.len() {
        if candidate[c] == reference[r] {
            c += 1;
        }
        r += 1;
    }

    c == candidate.len()
}

/// Character-wise variant for string slices.
///
/// Compares `char`s rather than bytes, so a multi-byte character in the
/// candidate only matches the same whole character in the reference.
pub fn is_subsequence_str(candidate: &str, reference: &str) -> bool {
    let mut pending = candidate.chars().peekable();

    for ch in reference.chars() {
        match pending.peek() {
            None => break,
            Some(&want) if want == ch => {
                pending.next();
            }
            Some(_) => {}
        }
    }

    pending.peek().is_none()
}
