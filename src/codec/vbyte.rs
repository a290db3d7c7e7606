//! Variable-byte integer coding.
//!
//! A value is split into 7-bit groups, most significant group first, one group
//! per byte. The high bit of a byte is clear while more groups of the same
//! value follow and set on the value's final byte, which terminates it:
//!
//! ```text
//! 5      -> 0x85
//! 130    -> 0x01 0x82
//! 0      -> 0x80
//! ```

use std::io::Write;

use crate::error::{LexpackError, Result};

const PAYLOAD_MASK: u8 = 0x7F;
const TERMINATOR_BIT: u8 = 0x80;

/// Encode a u64 value as a variable-byte group sequence.
pub fn encode_u64(value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(10);
    let mut val = value;

    loop {
        bytes.push((val & u64::from(PAYLOAD_MASK)) as u8);
        val >>= 7;

        if val == 0 {
            break;
        }
    }

    bytes.reverse();
    if let Some(last) = bytes.last_mut() {
        *last |= TERMINATOR_BIT;
    }

    bytes
}

/// Decode one value from the front of `bytes`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode_u64(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut result = 0u64;

    for (i, &byte) in bytes.iter().enumerate() {
        if result > u64::MAX >> 7 {
            return Err(LexpackError::malformed(
                "variable-byte value overflows 64 bits",
            ));
        }

        result = (result << 7) | u64::from(byte & PAYLOAD_MASK);

        if byte & TERMINATOR_BIT != 0 {
            return Ok((result, i + 1));
        }
    }

    Err(LexpackError::malformed("variable-byte stream ends mid-value"))
}

/// Write a variable-byte encoded u64 to a writer.
pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<usize> {
    let bytes = encode_u64(value);
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Encode a whole gap sequence.
pub fn encode(gaps: &[u64]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(gaps.len() * 2);
    for &gap in gaps {
        write_u64(&mut out, gap)?;
    }
    Ok(out)
}

/// Decode a byte stream produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Vec<u64>> {
    let mut values = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let (value, read) = decode_u64(&bytes[pos..])
            .map_err(|e| e.with_context(&format!("byte offset {pos}")))?;
        values.push(value);
        pos += read;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_u64() {
        let test_values = [0, 1, 127, 128, 255, 256, 16383, 16384, u64::MAX];

        for &value in &test_values {
            let encoded = encode_u64(value);
            let (decoded, bytes_read) = decode_u64(&encoded).unwrap();

            assert_eq!(value, decoded);
            assert_eq!(encoded.len(), bytes_read);
        }
    }

    #[test]
    fn test_group_order_and_terminator() {
        assert_eq!(encode_u64(0), vec![0x80]);
        assert_eq!(encode_u64(5), vec![0x85]);
        assert_eq!(encode_u64(130), vec![0x01, 0x82]);
        assert_eq!(encode_u64(214577), vec![0x0D, 0x0C, 0xB1]);
    }

    #[test]
    fn test_encoding_efficiency() {
        assert_eq!(encode_u64(127).len(), 1);
        assert_eq!(encode_u64(128).len(), 2);
        assert_eq!(encode_u64(16383).len(), 2);
        assert_eq!(encode_u64(16384).len(), 3);
        assert_eq!(encode_u64(u64::MAX).len(), 10);
    }

    #[test]
    fn test_write_u64() {
        let mut buffer = Vec::new();
        let written = write_u64(&mut buffer, 300).unwrap();
        assert_eq!(written, buffer.len());
        assert_eq!(decode_u64(&buffer).unwrap(), (300, 2));
    }

    #[test]
    fn test_sequence() {
        let gaps = vec![6, 20, 61, 6, 99962, 10];
        assert_eq!(decode(&encode(&gaps).unwrap()).unwrap(), gaps);
    }

    #[test]
    fn test_incomplete_value() {
        // no terminator bit on the last byte
        let err = decode(&[0x85, 0x01]).unwrap_err();
        assert!(matches!(err, LexpackError::MalformedEncoding(_)));
        assert!(err.to_string().contains("byte offset 1"));
    }

    #[test]
    fn test_overflow() {
        let overflow_data = vec![0x7F; 11];
        assert!(decode_u64(&overflow_data).is_err());
    }
}
