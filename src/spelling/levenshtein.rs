//! Levenshtein edit distance.
//!
//! Ranks correction candidates, and is only ever run against the handful of
//! candidates that survive the bigram similarity cut.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into the other.
/// Characters are Unicode scalar values.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Two rows are enough: row i only reads row i - 1
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(
            levenshtein_distance("aple", "apples"),
            levenshtein_distance("apples", "aple")
        );
    }

    #[test]
    fn test_common_typos() {
        let common_typos = vec![
            ("apple", "aple", 1),   // deletion
            ("apply", "aple", 2),   // deletion + substitution
            ("apples", "aple", 2),  // two deletions
            ("hello", "helo", 1),   // deletion
            ("world", "wrold", 2),  // transposition
        ];

        for (correct, typo, expected) in common_typos {
            assert_eq!(
                levenshtein_distance(correct, typo),
                expected,
                "distance for {correct} -> {typo}"
            );
        }
    }

    #[test]
    fn test_unicode() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("سلام", "سلم"), 1);
    }
}
