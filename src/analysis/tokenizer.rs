//! Tokenizers for query preprocessing.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Segments without any alphanumeric character (whitespace, punctuation) are
/// dropped and the remaining words are numbered from 0 in text order.
///
/// # Examples
///
/// ```
/// use lexpack::analysis::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello, wrold!").unwrap().collect();
///
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "wrold");
/// ```
#[derive(Clone, Debug)]
pub struct UnicodeWordTokenizer {
    lowercase: bool,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer that lowercases its tokens.
    pub fn new() -> Self {
        UnicodeWordTokenizer { lowercase: true }
    }

    /// Keep or drop the lowercasing step.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Default for UnicodeWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, (start_offset, word))| {
                let end_offset = start_offset + word.len();
                let text = if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                };
                Token::with_offsets(text, position, start_offset, end_offset)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
