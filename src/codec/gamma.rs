//! Elias gamma coding over a byte-aligned bit string.
//!
//! Each value `v >= 1` is written as `floor(log2 v)` one-bits, a zero-bit,
//! and then the binary digits of `v` without the leading one. The bit string
//! of all values is left-padded with zero bits and preceded by the marker
//! [`MARKER`] so that the decoder can find where the payload begins:
//!
//! ```text
//! 0000000 01111110 0 1101 ...
//! padding marker   payload
//! ```
//!
//! Padding is `8 - (len % 8)` bits, so an already aligned payload still gets a
//! full zero byte in front of the marker.

use bit_vec::BitVec;

use crate::error::{LexpackError, Result};

/// Bit pattern separating the zero padding from the payload.
pub const MARKER: u8 = 0b0111_1110;

const MARKER_BITS: usize = 8;

/// Number of bits the gamma code of `value` occupies.
pub fn len_gamma(value: u64) -> usize {
    debug_assert!(value > 0);
    2 * magnitude_width(value) + 1
}

/// Encode a gap sequence as padded, marker-prefixed bytes.
///
/// Fails with [`LexpackError::InvalidInput`] on a zero gap, which gamma
/// coding cannot represent.
pub fn encode(gaps: &[u64]) -> Result<Vec<u8>> {
    let payload_len: usize = gaps
        .iter()
        .filter(|&&gap| gap > 0)
        .map(|&gap| len_gamma(gap))
        .sum();
    let mut payload = BitVec::with_capacity(payload_len);
    for (i, &gap) in gaps.iter().enumerate() {
        write_gamma(&mut payload, gap).map_err(|e| e.with_context(&format!("gap {i}")))?;
    }

    let padding = 8 - payload.len() % 8;
    let mut bits = BitVec::with_capacity(padding + MARKER_BITS + payload.len());
    bits.grow(padding, false);
    for shift in (0..MARKER_BITS).rev() {
        bits.push((MARKER >> shift) & 1 == 1);
    }
    bits.extend(payload.iter());

    debug_assert_eq!(bits.len() % 8, 0);
    Ok(bits.to_bytes())
}

/// Decode bytes produced by [`encode`] back into the gap sequence.
pub fn decode(bytes: &[u8]) -> Result<Vec<u64>> {
    let bits = BitVec::from_bytes(bytes);
    let start = find_marker(&bits)
        .ok_or_else(|| LexpackError::malformed("gamma marker 01111110 not found"))?;

    let mut pos = start + MARKER_BITS;
    let mut values = Vec::new();

    while pos < bits.len() {
        let mut width = 0usize;
        loop {
            match bits.get(pos) {
                Some(true) => width += 1,
                Some(false) => break,
                None => {
                    return Err(LexpackError::malformed(
                        "gamma length prefix is not terminated",
                    ));
                }
            }
            pos += 1;
        }
        pos += 1;

        if width >= u64::BITS as usize {
            return Err(LexpackError::malformed(format!(
                "gamma length prefix of {width} bits exceeds 64-bit values"
            )));
        }
        if pos + width > bits.len() {
            return Err(LexpackError::malformed(format!(
                "gamma value truncated: expected {width} magnitude bits, found {}",
                bits.len() - pos
            )));
        }

        let mut value = 1u64;
        for offset in 0..width {
            value = (value << 1) | u64::from(bits[pos + offset]);
        }
        pos += width;
        values.push(value);
    }

    Ok(values)
}

fn write_gamma(bits: &mut BitVec, value: u64) -> Result<()> {
    if value == 0 {
        return Err(LexpackError::invalid_input(
            "gamma coding cannot represent a zero gap; values must be strictly ascending",
        ));
    }

    let width = magnitude_width(value);
    for _ in 0..width {
        bits.push(true);
    }
    bits.push(false);
    for shift in (0..width).rev() {
        bits.push((value >> shift) & 1 == 1);
    }

    Ok(())
}

/// Number of binary digits after the leading one, i.e. `floor(log2 value)`.
fn magnitude_width(value: u64) -> usize {
    (u64::BITS - 1 - value.leading_zeros()) as usize
}

fn find_marker(bits: &BitVec) -> Option<usize> {
    let last_start = bits.len().checked_sub(MARKER_BITS)?;
    (0..=last_start).find(|&start| {
        (0..MARKER_BITS).all(|i| bits[start + i] == ((MARKER >> (MARKER_BITS - 1 - i)) & 1 == 1))
    })
}
