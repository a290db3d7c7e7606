//! Thread-safe handles around [`BigramIndex`].
//!
//! [`SharedBigramIndex`] is the explicit, passable replacement for a
//! process-wide index: writers are serialized behind the write lock, readers
//! share the read lock, and a reset swaps the whole index value while the
//! write lock is held so no reader ever sees a half-reset index.
//! [`IndexRegistry`] keeps any number of independent named indexes.

use std::sync::Arc;

use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;

use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector, Suggestion};
use crate::spelling::index::{BigramIndex, IndexStats};

/// A [`BigramIndex`] shared between one writer at a time and many readers.
#[derive(Debug, Default)]
pub struct SharedBigramIndex {
    index: RwLock<BigramIndex>,
    corrector: SpellingCorrector,
}

impl SharedBigramIndex {
    /// Create an empty shared index with the default corrector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared index correcting with `corrector`.
    pub fn with_corrector(corrector: SpellingCorrector) -> Self {
        SharedBigramIndex {
            index: RwLock::new(BigramIndex::new()),
            corrector,
        }
    }

    /// Add words, optionally discarding all previous state first.
    ///
    /// Returns the number of words newly admitted.
    pub fn index_words<I, S>(&self, words: I, reset: bool) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = self.index.write();
        if reset {
            info!("resetting bigram index of {} words", index.len());
            *index = BigramIndex::new();
        }
        index.index_words(words)
    }

    /// Discard every indexed word.
    pub fn reset(&self) {
        self.index_words(std::iter::empty::<&str>(), true);
    }

    /// Best correction of `word` against the current vocabulary.
    pub fn correct(&self, word: &str) -> String {
        let index = self.index.read();
        self.corrector.correct(&index, word)
    }

    /// Ranked correction candidates for `word`.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let index = self.index.read();
        self.corrector.suggest(&index, word)
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.index.read().contains(word)
    }

    /// Get statistics about the index.
    pub fn stats(&self) -> IndexStats {
        self.index.read().stats()
    }
}

/// Named, independent shared indexes (one per tenant, for instance).
#[derive(Debug, Default)]
pub struct IndexRegistry {
    indexes: RwLock<AHashMap<String, Arc<SharedBigramIndex>>>,
    config: CorrectorConfig,
}

impl IndexRegistry {
    /// Create a registry whose indexes correct with `config`.
    pub fn new(config: CorrectorConfig) -> Self {
        IndexRegistry {
            indexes: RwLock::new(AHashMap::new()),
            config,
        }
    }

    /// The index registered under `name`, created empty on first use.
    pub fn get_or_create(&self, name: &str) -> Arc<SharedBigramIndex> {
        if let Some(index) = self.indexes.read().get(name) {
            return Arc::clone(index);
        }

        let mut indexes = self.indexes.write();
        Arc::clone(indexes.entry(name.to_string()).or_insert_with(|| {
            info!("creating bigram index '{name}'");
            Arc::new(SharedBigramIndex::with_corrector(
                SpellingCorrector::with_config(self.config.clone()),
            ))
        }))
    }

    /// The index registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<SharedBigramIndex>> {
        self.indexes.read().get(name).cloned()
    }

    /// Unregister an index. Handles already given out keep working.
    pub fn remove(&self, name: &str) -> bool {
        self.indexes.write().remove(name).is_some()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.read().keys().cloned().collect();
        names.sort();
        names
    }
}
