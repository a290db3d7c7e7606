//! Gap (delta) transform for ascending integer sequences.
//!
//! The first element is kept verbatim and every later element is replaced by
//! its difference from the previous raw element, so sorted ID lists turn into
//! runs of small numbers.

use crate::error::{LexpackError, Result};

/// Replace every element after the first with its distance to its predecessor.
///
/// Fails with [`LexpackError::InvalidInput`] on an empty sequence or when an
/// element is smaller than the one before it.
pub fn to_gaps(values: &[u64]) -> Result<Vec<u64>> {
    let Some(&first) = values.first() else {
        return Err(LexpackError::invalid_input(
            "integer sequence must be of positive length",
        ));
    };

    let mut gaps = Vec::with_capacity(values.len());
    gaps.push(first);

    for (i, pair) in values.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(LexpackError::invalid_input(format!(
                "integer sequence is not ascending at index {}: {} follows {}",
                i + 1,
                pair[1],
                pair[0]
            )));
        }
        gaps.push(pair[1] - pair[0]);
    }

    Ok(gaps)
}

/// Inverse of [`to_gaps`]: running sum of the gap sequence.
///
/// Called on decoded data, so every failure is a
/// [`LexpackError::MalformedEncoding`].
pub fn from_gaps(gaps: &[u64]) -> Result<Vec<u64>> {
    if gaps.is_empty() {
        return Err(LexpackError::malformed("encoding holds no values"));
    }

    let mut values = Vec::with_capacity(gaps.len());
    let mut current = 0u64;

    for &gap in gaps {
        current = current
            .checked_add(gap)
            .ok_or_else(|| LexpackError::malformed("decoded values overflow 64 bits"))?;
        values.push(current);
    }

    Ok(values)
}
