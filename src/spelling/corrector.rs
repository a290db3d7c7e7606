//! Candidate ranking and word correction over a [`BigramIndex`].

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexpackError, Result};
use crate::spelling::index::{BigramIndex, WordId};
use crate::spelling::levenshtein::levenshtein_distance;

/// How the surviving candidates are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Smallest edit distance wins; similarity only breaks ties.
    #[default]
    EditDistanceFirst,
    /// Highest bigram similarity wins; edit distance only breaks ties.
    SimilarityFirst,
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Number of most similar candidates kept for edit-distance re-ranking.
    pub candidate_limit: usize,
    /// Ordering applied to the kept candidates.
    pub ranking: RankingStrategy,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            candidate_limit: 10,
            ranking: RankingStrategy::EditDistanceFirst,
        }
    }
}

impl CorrectorConfig {
    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.candidate_limit == 0 {
            return Err(LexpackError::config("candidate_limit must be at least 1"));
        }
        Ok(())
    }
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Vocabulary id of the suggested word.
    pub id: WordId,
    /// The suggested word.
    pub word: String,
    /// Jaccard similarity of the bigram sets (0.0 to 1.0).
    pub similarity: f64,
    /// Edit distance from the query word.
    pub distance: usize,
}

/// Corrects words against the vocabulary of a [`BigramIndex`].
#[derive(Debug, Clone, Default)]
pub struct SpellingCorrector {
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a new corrector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new corrector with custom configuration.
    pub fn with_config(config: CorrectorConfig) -> Self {
        SpellingCorrector { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Ranked candidates for `word`, best first.
    ///
    /// Only the `candidate_limit` words with the highest bigram similarity are
    /// considered (at least one); ties at that cut go to the older word. An
    /// empty result means no vocabulary word shares a bigram with `word`.
    pub fn suggest(&self, index: &BigramIndex, word: &str) -> Vec<Suggestion> {
        let mut scored = index.jaccard_lookup(word);
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(self.config.candidate_limit.max(1));

        let mut suggestions: Vec<Suggestion> = scored
            .into_iter()
            .filter_map(|(id, similarity)| {
                let candidate = index.word(id)?;
                Some(Suggestion {
                    id,
                    word: candidate.to_string(),
                    similarity,
                    distance: levenshtein_distance(word, candidate),
                })
            })
            .collect();

        suggestions.sort_by(|a, b| self.compare(a, b));
        suggestions
    }

    /// Best correction of `word`, or `word` itself when it is already in the
    /// vocabulary or nothing resembles it.
    pub fn correct(&self, index: &BigramIndex, word: &str) -> String {
        if index.contains(word) {
            return word.to_string();
        }

        match self.suggest(index, word).into_iter().next() {
            Some(best) => {
                debug!(
                    "corrected '{word}' to '{}' (similarity {:.3}, distance {})",
                    best.word, best.similarity, best.distance
                );
                best.word
            }
            None => {
                debug!("no candidates for '{word}'");
                word.to_string()
            }
        }
    }

    fn compare(&self, a: &Suggestion, b: &Suggestion) -> Ordering {
        let by_similarity = b.similarity.total_cmp(&a.similarity);
        let by_distance = a.distance.cmp(&b.distance);

        let primary = match self.config.ranking {
            RankingStrategy::SimilarityFirst => by_similarity.then(by_distance),
            RankingStrategy::EditDistanceFirst => by_distance.then(by_similarity),
        };
        primary.then(a.id.cmp(&b.id))
    }
}
