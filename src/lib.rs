//! # lexpack
//!
//! Two small text-processing services for search back ends:
//!
//! - [`codec`]: lossless compression of ascending integer lists (postings,
//!   ID sets) with gamma or variable-byte gap coding.
//! - [`spelling`]: an incrementally built character-bigram index that
//!   corrects misspelled words against the vocabulary seen so far.
//!
//! [`service::TextService`] ties both together behind request-style
//! operations, and the `lexpack` binary drives them from the command line.

pub mod analysis;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod service;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
