//! Compression of ascending integer lists.
//!
//! Sorted ID lists (document ids, postings) are shifted by one so that zero
//! is representable, turned into gaps, and then written with one of two
//! interchangeable codes:
//!
//! - [`CompressionMode::Gamma`]: Elias gamma over a bit string, smallest
//!   output for the small gaps typical of dense ID lists.
//! - [`CompressionMode::VariableByte`]: 7 bits per byte, simpler and faster
//!   to decode.
//!
//! The encoded blob is a lowercase hex string and carries no mode marker, so
//! a blob must be decoded with the mode it was encoded with.
//!
//! # Examples
//!
//! ```
//! use lexpack::codec::{CompressionMode, IntegerListCodec};
//!
//! let codec = IntegerListCodec::new(CompressionMode::Gamma);
//! let blob = codec.compress(&[5, 25, 86, 92]).unwrap();
//! assert_eq!(codec.decompress(&blob).unwrap(), vec![5, 25, 86, 92]);
//! ```

pub mod gamma;
pub mod gaps;
pub mod vbyte;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LexpackError, Result};

/// Encoding scheme used for a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionMode {
    /// Elias gamma coding.
    #[default]
    #[serde(rename = "gamma")]
    Gamma,
    /// Variable-byte coding.
    #[serde(rename = "varbyte")]
    VariableByte,
}

impl CompressionMode {
    /// All supported modes.
    pub const ALL: [CompressionMode; 2] = [CompressionMode::Gamma, CompressionMode::VariableByte];

    /// The fixed token identifying this mode at the request boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionMode::Gamma => "gamma",
            CompressionMode::VariableByte => "varbyte",
        }
    }

    fn encode(&self, gaps: &[u64]) -> Result<Vec<u8>> {
        match self {
            CompressionMode::Gamma => gamma::encode(gaps),
            CompressionMode::VariableByte => vbyte::encode(gaps),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u64>> {
        match self {
            CompressionMode::Gamma => gamma::decode(bytes),
            CompressionMode::VariableByte => vbyte::decode(bytes),
        }
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMode {
    type Err = LexpackError;

    fn from_str(s: &str) -> Result<Self> {
        CompressionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                LexpackError::unsupported_mode(format!(
                    "'{s}' (expected one of: gamma, varbyte)"
                ))
            })
    }
}

/// Compressor for ascending sequences of non-negative integers.
///
/// The codec holds nothing but its mode and is freely `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerListCodec {
    mode: CompressionMode,
}

impl IntegerListCodec {
    /// Create a codec for the given mode.
    pub fn new(mode: CompressionMode) -> Self {
        IntegerListCodec { mode }
    }

    /// The mode blobs are encoded and decoded with.
    pub fn mode(&self) -> CompressionMode {
        self.mode
    }

    /// Compress an ascending, non-empty sequence into a hex blob.
    pub fn compress(&self, values: &[u64]) -> Result<String> {
        let shifted = values
            .iter()
            .map(|&value| {
                value.checked_add(1).ok_or_else(|| {
                    LexpackError::invalid_input(format!("value {value} is too large to encode"))
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let gaps = gaps::to_gaps(&shifted)?;
        let bytes = self.mode.encode(&gaps)?;
        debug!(
            "compressed {} integers into {} bytes using {}",
            values.len(),
            bytes.len(),
            self.mode
        );

        Ok(hex::encode(bytes))
    }

    /// Decompress a hex blob produced by [`IntegerListCodec::compress`] with
    /// the same mode.
    pub fn decompress(&self, blob: &str) -> Result<Vec<u64>> {
        let bytes = hex::decode(blob.trim())
            .map_err(|e| LexpackError::malformed(format!("invalid hex: {e}")))?;
        let gaps = self.mode.decode(&bytes)?;
        let shifted = gaps::from_gaps(&gaps)?;

        shifted
            .into_iter()
            .map(|value| {
                value
                    .checked_sub(1)
                    .ok_or_else(|| LexpackError::malformed("decoded value below the shifted range"))
            })
            .collect()
    }

    /// Compress every list of a keyed batch.
    ///
    /// The first failing entry fails the whole batch; its key is named in the
    /// error message.
    pub fn compress_lists(
        &self,
        lists: &BTreeMap<String, Vec<u64>>,
    ) -> Result<BTreeMap<String, String>> {
        lists
            .par_iter()
            .map(|(key, values)| {
                self.compress(values)
                    .map(|blob| (key.clone(), blob))
                    .map_err(|e| e.with_context(&format!("list '{key}'")))
            })
            .collect()
    }

    /// Decompress every blob of a keyed batch.
    pub fn decompress_lists(
        &self,
        blobs: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, Vec<u64>>> {
        blobs
            .par_iter()
            .map(|(key, blob)| {
                self.decompress(blob)
                    .map(|values| (key.clone(), values))
                    .map_err(|e| e.with_context(&format!("value '{key}'")))
            })
            .collect()
    }
}

/// Compress `values` with `mode`.
pub fn compress(values: &[u64], mode: CompressionMode) -> Result<String> {
    IntegerListCodec::new(mode).compress(values)
}

/// Decompress `blob` with `mode`.
pub fn decompress(blob: &str, mode: CompressionMode) -> Result<Vec<u64>> {
    IntegerListCodec::new(mode).decompress(blob)
}
