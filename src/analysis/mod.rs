//! Text analysis collaborators.
//!
//! Query preprocessing only needs to split text into ordered word tokens.
//! Anything language-aware (stemming, stop words, script-specific
//! normalization) lives behind the [`Tokenizer`] trait and can be plugged in
//! by the caller.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
