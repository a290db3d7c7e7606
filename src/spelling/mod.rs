//! Approximate word matching for spelling correction.
//!
//! Words seen so far are kept in a [`BigramIndex`]: an append-only vocabulary
//! plus an inverted index from character bigrams to the words containing
//! them. Correcting a word looks up the words sharing bigrams with it, keeps
//! the most similar by Jaccard similarity of the bigram sets, and picks the
//! one of those closest by Levenshtein distance.
//!
//! # Examples
//!
//! ```
//! use lexpack::spelling::SharedBigramIndex;
//!
//! let index = SharedBigramIndex::new();
//! index.index_words(["apple", "apply", "apples"], false);
//!
//! assert_eq!(index.correct("aple"), "apple");
//! assert_eq!(index.correct("pear"), "pear");
//! ```

pub mod bigram;
pub mod corrector;
pub mod index;
pub mod levenshtein;
pub mod shared;

// Re-export commonly used types
pub use corrector::*;
pub use index::*;
pub use shared::*;
