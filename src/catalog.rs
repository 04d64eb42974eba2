//! Index of archived problems.
//!
//! Each solution module exports a `PROBLEM` describing what it solves. The
//! catalog collects them and derives the archive naming used for solution
//! files: `<Difficulty>/<NNNN>-<sanitized-title>.<ext>`, each file opening
//! with a header block such as
//!
//! ```text
//! /*
//!  * Problem: 392. Is Subsequence
//!  * Difficulty: Easy
//!  * URL: https://leetcode.com/problems/is-subsequence/
//!  * Topics: Two Pointers, String, Dynamic Programming
//! */
//! ```

use std::fmt::Write;

use crate::types::Difficulty;
use crate::{easy, medium};

/// Base URL of the judge's problem pages.
pub const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems/";

/// Characters that never make it into a file name.
const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Static description of one archived problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// Judge-assigned problem number.
    pub id: u32,
    pub title: &'static str,
    /// URL slug on the judge site.
    pub slug: &'static str,
    pub difficulty: Difficulty,
    pub topics: &'static [&'static str],
}

impl Problem {
    /// Problem page on the judge site.
    pub fn url(&self) -> String {
        format!("{PROBLEM_URL_BASE}{}/", self.slug)
    }

    /// `0392-is-subsequence` style stem: id padded to four digits plus the
    /// sanitized title.
    pub fn file_stem(&self) -> String {
        format!("{:04}-{}", self.id, sanitize_title(self.title))
    }

    /// Path of the solution file relative to the archive root.
    /// `ext` is given without the leading dot.
    pub fn relative_path(&self, ext: &str) -> String {
        format!("{}/{}.{}", self.difficulty, self.file_stem(), ext)
    }

    /// Header comment placed at the top of a solution file.
    pub fn header(&self) -> String {
        let mut out = String::from("/*\n");
        // Writing into a String cannot fail.
        let _ = writeln!(out, " * Problem: {}. {}", self.id, self.title);
        let _ = writeln!(out, " * Difficulty: {}", self.difficulty);
        let _ = writeln!(out, " * URL: {}", self.url());
        if !self.topics.is_empty() {
            let _ = writeln!(out, " * Topics: {}", self.topics.join(", "));
        }
        out.push_str("*/\n");
        out
    }
}

/// Turn a problem title into a file-name fragment.
///
/// Drops characters that are invalid in file names, turns whitespace runs
/// into a single `-`, collapses repeated `-`, lowercases, and trims `-` from
/// both ends.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        if FORBIDDEN_FILENAME_CHARS.contains(&ch) {
            continue;
        }
        if ch.is_whitespace() || ch == '-' {
            if !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out.trim_matches('-').to_string()
}

/// Every problem in the archive, ordered by tier and then by id.
pub const ALL: &[Problem] = &[
    easy::is_subsequence::PROBLEM,
    easy::add_strings::PROBLEM,
    easy::valid_palindrome::PROBLEM,
    medium::reverse_words::PROBLEM,
    medium::search_matrix::PROBLEM,
    medium::matching_subsequences::PROBLEM,
];

/// Look up a problem by its judge id.
pub fn find(id: u32) -> Option<&'static Problem> {
    ALL.iter().find(|p| p.id == id)
}

/// Problems of one tier, in catalog order.
pub fn by_difficulty(difficulty: Difficulty) -> impl Iterator<Item = &'static Problem> {
    ALL.iter().filter(move |p| p.difficulty == difficulty)
}
