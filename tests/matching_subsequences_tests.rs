// 808: Number of Matching Subsequences
// Batch counting against one reference, with the per-call memo table.

use leet_archive::easy::is_subsequence::is_subsequence;
use leet_archive::medium::matching_subsequences::{
    count_matching_subsequences, MemoStats, MemoTable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Test 1: Judge examples
// =============================================================================
#[test]
fn judge_examples() {
    let words = ["a", "bb", "acd", "ace"];
    assert_eq!(count_matching_subsequences(b"abcde".as_slice(), &words), 3);

    let words = ["ahjpjau", "ja", "ahbwzgqnuk", "tnmlanowax"];
    assert_eq!(
        count_matching_subsequences(b"dsahjpjauf".as_slice(), &words),
        2
    );
}

// =============================================================================
// Test 2: No candidates, no matches
// =============================================================================
#[test]
fn empty_candidate_list() {
    let words: [&str; 0] = [];
    assert_eq!(count_matching_subsequences(b"abc".as_slice(), &words), 0);
}

// =============================================================================
// Test 3: Duplicates are counted once per occurrence
// =============================================================================
#[test]
fn duplicates_counted_with_multiplicity() {
    let reference = b"abcde".as_slice();

    assert_eq!(count_matching_subsequences(reference, &["ace", "ace"]), 2);
    assert_eq!(count_matching_subsequences(reference, &["aec", "aec"]), 0);

    let words = vec![String::from("a"); 1000];
    assert_eq!(count_matching_subsequences(reference, &words), 1000);
}

// =============================================================================
// Test 4: Empty strings on either side
// =============================================================================
#[test]
fn empty_candidates_and_reference() {
    assert_eq!(count_matching_subsequences(b"".as_slice(), &["", "a", ""]), 2);
    assert_eq!(count_matching_subsequences(b"xyz".as_slice(), &[""]), 1);
}

// =============================================================================
// Test 5: Memo table hit/miss accounting
// =============================================================================
#[test]
fn memo_table_tracks_distinct_values() {
    let words = ["a", "bb", "a", "ace", "bb", "a"];
    let mut memo = MemoTable::new(b"abcde".as_slice());
    assert!(memo.is_empty());

    let results: Vec<bool> = words.iter().map(|w| memo.matches(w.as_bytes())).collect();

    assert_eq!(results, vec![true, false, true, true, false, true]);
    assert_eq!(memo.len(), 3);
    assert_eq!(memo.stats(), MemoStats { hits: 3, misses: 3 });
    assert_eq!(memo.reference(), b"abcde");
}

// =============================================================================
// Test 6: Generic element types
// =============================================================================
#[test]
fn generic_elements() {
    let reference = [1u32, 2, 3, 4, 5];
    let candidates: Vec<Vec<u32>> = vec![vec![1, 3], vec![3, 1], vec![5], vec![1, 3]];
    assert_eq!(count_matching_subsequences(&reference, &candidates), 3);
}

// =============================================================================
// Test 7: Agrees with running the matcher on every candidate
// =============================================================================
#[test]
fn agrees_with_single_matcher() {
    let mut rng = StdRng::seed_from_u64(808);

    for _ in 0..50 {
        let reference: Vec<u8> = (0..rng.gen_range(0..40))
            .map(|_| rng.gen_range(b'a'..=b'e'))
            .collect();

        // Small alphabet and short words so duplicates are common.
        let words: Vec<Vec<u8>> = (0..rng.gen_range(0..60))
            .map(|_| {
                (0..rng.gen_range(0..4))
                    .map(|_| rng.gen_range(b'a'..=b'e'))
                    .collect()
            })
            .collect();

        let expected = words
            .iter()
            .filter(|w| is_subsequence(w.as_slice(), &reference))
            .count();

        assert_eq!(count_matching_subsequences(&reference, &words), expected);
    }
}
