//! Easy tier.

pub mod add_strings;
pub mod is_subsequence;
pub mod valid_palindrome;
