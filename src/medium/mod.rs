//! Medium tier.

pub mod matching_subsequences;
pub mod reverse_words;
pub mod search_matrix;
