//! 808. Number of Matching Subsequences
//!
//! Count how many candidates are subsequences of one shared reference.
//!
//! Inputs are duplicate-heavy in practice, so each distinct candidate value
//! is matched once and the answer is cached in a [`MemoTable`] keyed by the
//! candidate's contents. The table lives for a single count and is dropped
//! afterwards, so it never needs eviction.
//!
//! Strings are compared byte-wise. For character-wise matching of non-ASCII
//! text, collect both sides into `Vec<char>` first.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};
use xxhash_rust::xxh3::Xxh3Builder;

use crate::catalog::Problem;
use crate::easy::is_subsequence::is_subsequence;
use crate::types::Difficulty;

pub const PROBLEM: Problem = Problem {
    id: 808,
    title: "Number of Matching Subsequences",
    slug: "number-of-matching-subsequences",
    difficulty: Difficulty::Medium,
    topics: &[
        "Array",
        "Hash Table",
        "String",
        "Binary Search",
        "Dynamic Programming",
        "Trie",
        "Sorting",
    ],
};

/// Upper bound on how many slots the memo table reserves up front.
/// Sized from the candidate count, capped so a huge batch of mostly
/// duplicates does not over-allocate.
pub const MEMO_INITIAL_CAPACITY: usize = 1024;

/// Cache counters for one memo table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that ran the matcher.
    pub misses: usize,
}

/// Candidate → "is a subsequence of the reference" cache.
///
/// Keys borrow the candidates, so the table cannot outlive the batch it
/// was built for. Key equality is full-value equality: two separately
/// allocated but identical candidates share an entry.
pub struct MemoTable<'a, T> {
    reference: &'a [T],
    results: HashMap<&'a [T], bool, Xxh3Builder>,
    stats: MemoStats,
}

impl<'a, T: Eq + Hash> MemoTable<'a, T> {
    /// Create an empty table for `reference`.
    pub fn new(reference: &'a [T]) -> Self {
        Self::with_capacity(reference, 0)
    }

    /// Create a table expecting about `expected` candidates.
    pub fn with_capacity(reference: &'a [T], expected: usize) -> Self {
        Self {
            reference,
            results: HashMap::with_capacity_and_hasher(
                expected.min(MEMO_INITIAL_CAPACITY),
                Xxh3Builder::new(),
            ),
            stats: MemoStats::default(),
        }
    }

    /// Is `candidate` a subsequence of the reference?
    /// Runs the matcher only the first time a given value is seen.
    pub fn matches(&mut self, candidate: &'a [T]) -> bool {
        if let Some(&cached) = self.results.get(candidate) {
            self.stats.hits += 1;
            return cached;
        }

        let matched = is_subsequence(candidate, self.reference);
        trace!(len = candidate.len(), matched, "memo miss");
        self.results.insert(candidate, matched);
        self.stats.misses += 1;
        matched
    }

    /// The reference every candidate is checked against.
    pub fn reference(&self) -> &'a [T] {
        self.reference
    }

    /// Number of distinct candidates seen so far.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

/// Number of `candidates` that are subsequences of `reference`.
///
/// Duplicates count once per occurrence even though they are matched only
/// once. Accepts anything that views as a slice of the reference's element
/// type, so `&str` and `String` candidates work against a byte reference:
///
/// ```
/// use leet_archive::medium::matching_subsequences::count_matching_subsequences;
///
/// let words = ["a", "bb", "acd", "ace"];
/// assert_eq!(count_matching_subsequences(b"abcde", &words), 3);
/// ```
pub fn count_matching_subsequences<T, S>(reference: &[T], candidates: &[S]) -> usize
where
    T: Eq + Hash,
    S: AsRef<[T]>,
{
    let mut memo = MemoTable::with_capacity(reference, candidates.len());
    let mut count = 0;

    for candidate in candidates {
        if memo.matches(candidate.as_ref()) {
            count += 1;
        }
    }

    let stats = memo.stats();
    debug!(
        candidates = candidates.len(),
        distinct = memo.len(),
        hits = stats.hits,
        matched = count,
        "counted matching subsequences"
    );
    count
}
