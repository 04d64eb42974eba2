//! 151. Reverse Words in a String

use crate::catalog::Problem;
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 151,
    title: "Reverse Words in a String",
    slug: "reverse-words-in-a-string",
    difficulty: Difficulty::Medium,
    topics: &["Two Pointers", "String"],
};

/// Reverse the order of the words in `s`.
///
/// A word is a maximal run of non-space characters; only `' '` separates
/// words. Leading, trailing and repeated spaces are dropped, and the output
/// joins words with exactly one space. All-space input gives `""`.
pub fn reverse_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for word in s.split(' ').filter(|w| !w.is_empty()).rev() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}
