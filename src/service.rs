//! Request-level facade over the codec and the spelling index.
//!
//! [`TextService`] exposes the operations a request layer calls, taking and
//! returning serde types whose field names match the JSON request bodies
//! (`integer_lists`, `compressed_values`, `words`, `query`). Transport and
//! framing are left to the caller.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::{Tokenizer, UnicodeWordTokenizer};
use crate::codec::{CompressionMode, IntegerListCodec};
use crate::config::LexpackConfig;
use crate::error::Result;
use crate::spelling::{SharedBigramIndex, SpellingCorrector};

/// Body of a compress request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompressRequest {
    /// Mode token, `gamma` or `varbyte`.
    #[serde(alias = "type")]
    pub mode: String,
    /// Ascending lists of non-negative integers by key.
    pub integer_lists: BTreeMap<String, Vec<u64>>,
}

/// Body of a decompress request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecompressRequest {
    /// Mode token the blobs were encoded with.
    #[serde(alias = "type")]
    pub mode: String,
    /// Hex blobs by key.
    pub compressed_values: BTreeMap<String, String>,
}

/// Hex blobs by key.
pub type CompressResponse = BTreeMap<String, String>;

/// Decoded integer lists by key.
pub type DecompressResponse = BTreeMap<String, Vec<u64>>;

/// Body of an index-words request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexWordsRequest {
    /// Words to add to the vocabulary.
    pub words: Vec<String>,
    /// Discard the existing vocabulary first.
    #[serde(default)]
    pub reset: bool,
}

/// Body of a query preprocessing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessQueryRequest {
    /// Raw query text.
    pub query: String,
}

/// Acknowledgment of a mutating request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"success"`.
    pub status: String,
    /// Number of words newly added to the vocabulary.
    pub indexed: usize,
}

impl StatusResponse {
    fn success(indexed: usize) -> Self {
        StatusResponse {
            status: "success".to_string(),
            indexed,
        }
    }
}

/// The text-processing service.
pub struct TextService {
    config: LexpackConfig,
    index: Arc<SharedBigramIndex>,
    tokenizer: Box<dyn Tokenizer>,
}

impl TextService {
    /// Create a service with its own empty index and the Unicode word
    /// tokenizer.
    pub fn new(config: LexpackConfig) -> Self {
        let corrector = SpellingCorrector::with_config(config.corrector.clone());
        let index = Arc::new(SharedBigramIndex::with_corrector(corrector));
        Self::with_index(config, index)
    }

    /// Create a service working on an existing shared index.
    pub fn with_index(config: LexpackConfig, index: Arc<SharedBigramIndex>) -> Self {
        TextService {
            config,
            index,
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
        }
    }

    /// Replace the tokenizer used for query preprocessing.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The shared index this service reads and writes.
    pub fn index(&self) -> &Arc<SharedBigramIndex> {
        &self.index
    }

    /// Parse an optional mode token, falling back to the configured default.
    pub fn resolve_mode(&self, mode: Option<&str>) -> Result<CompressionMode> {
        match mode {
            Some(token) => token.parse(),
            None => Ok(self.config.default_mode),
        }
    }

    /// Compress every list of the request.
    pub fn compress(&self, request: &CompressRequest) -> Result<CompressResponse> {
        let mode: CompressionMode = request.mode.parse()?;
        debug!(
            "compressing {} lists with {mode}",
            request.integer_lists.len()
        );
        IntegerListCodec::new(mode).compress_lists(&request.integer_lists)
    }

    /// Decompress every blob of the request.
    pub fn decompress(&self, request: &DecompressRequest) -> Result<DecompressResponse> {
        let mode: CompressionMode = request.mode.parse()?;
        debug!(
            "decompressing {} values with {mode}",
            request.compressed_values.len()
        );
        IntegerListCodec::new(mode).decompress_lists(&request.compressed_values)
    }

    /// Add the request's words to the vocabulary.
    pub fn index_words(&self, request: &IndexWordsRequest) -> StatusResponse {
        let indexed = self.index.index_words(&request.words, request.reset);
        info!(
            "indexed {indexed} of {} words (reset: {})",
            request.words.len(),
            request.reset
        );
        StatusResponse::success(indexed)
    }

    /// Correct a single word.
    pub fn correct_word(&self, word: &str) -> String {
        self.index.correct(word)
    }

    /// Tokenize a query and correct each token, in query order.
    pub fn preprocess_and_correct_query(&self, query: &str) -> Result<Vec<String>> {
        let mut tokens: Vec<_> = self
            .tokenizer
            .tokenize(query)
            .map_err(|e| e.with_context(self.tokenizer.name()))?
            .collect();
        tokens.sort_by_key(|token| token.position);

        Ok(tokens
            .into_iter()
            .map(|token| self.correct_word(&token.text))
            .collect())
    }
}
