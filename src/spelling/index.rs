//! Incremental bigram index over a growing vocabulary.

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::spelling::bigram::{Bigram, bigram_set};

/// Permanent identifier of a vocabulary word: its insertion position.
pub type WordId = usize;

/// Inverted index from character bigrams to the vocabulary words that
/// contain them.
///
/// The vocabulary is an append-only arena; a word's position in it is its
/// [`WordId`] for the lifetime of the index. Postings lists only ever grow, and
/// each id appears at most once per list.
#[derive(Debug, Clone, Default)]
pub struct BigramIndex {
    /// Indexed words in insertion order
    words: Vec<String>,
    /// Set of all words for duplicate detection
    word_set: AHashSet<String>,
    /// Number of distinct bigrams of each word, parallel to `words`
    bigram_counts: Vec<usize>,
    postings: AHashMap<Bigram, Vec<WordId>>,
}

/// Size figures of a [`BigramIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of vocabulary words.
    pub words: usize,
    /// Number of distinct bigrams with a postings list.
    pub bigrams: usize,
    /// Total number of ids over all postings lists.
    pub postings: usize,
}

impl BigramIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words to the vocabulary.
    ///
    /// Words already present, repeats within `words` and empty words are
    /// skipped. Returns the number of words newly admitted.
    pub fn index_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut admitted = 0;

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                warn!("skipping empty word");
                continue;
            }
            if self.word_set.contains(word) {
                continue;
            }

            self.insert(word);
            admitted += 1;
        }

        debug!(
            "indexed {admitted} new words, vocabulary size is {}",
            self.words.len()
        );
        admitted
    }

    fn insert(&mut self, word: &str) -> WordId {
        let id = self.words.len();
        let bigrams = bigram_set(word);

        for bigram in &bigrams {
            self.postings.entry(*bigram).or_default().push(id);
        }

        self.bigram_counts.push(bigrams.len());
        self.words.push(word.to_string());
        self.word_set.insert(word.to_string());
        id
    }

    /// Number of vocabulary words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// The word with the given id.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// All words in id order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Ids of the words containing `bigram`, ascending.
    pub fn postings(&self, bigram: &Bigram) -> &[WordId] {
        self.postings.get(bigram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get statistics about the index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.words.len(),
            bigrams: self.postings.len(),
            postings: self.postings.values().map(Vec::len).sum(),
        }
    }

    /// Jaccard similarity between the bigram set of `word` and that of every
    /// vocabulary word sharing at least one bigram with it.
    ///
    /// The result is in no particular order.
    pub fn jaccard_lookup(&self, word: &str) -> Vec<(WordId, f64)> {
        let query = bigram_set(word);
        let mut shared: AHashMap<WordId, usize> = AHashMap::new();

        for bigram in &query {
            for &id in self.postings(bigram) {
                *shared.entry(id).or_insert(0) += 1;
            }
        }

        shared
            .into_iter()
            .map(|(id, common)| {
                let union = query.len() + self.bigram_counts[id] - common;
                (id, common as f64 / union as f64)
            })
            .collect()
    }
}
