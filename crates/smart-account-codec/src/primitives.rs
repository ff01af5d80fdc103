//! Fixed-width primitive encode/decode.
//!
//! The smart-account program's wire format uses little-endian integers of
//! 1, 2, and 8 bytes plus raw 32-byte addresses, with no padding between
//! fields. Every decoder takes `(bytes, offset)` and returns the value
//! together with the offset just past the consumed bytes, so decoders for
//! nested structures compose by threading the offset forward.
//!
//! Decoded addresses are owned copies, never views into the source buffer,
//! so a parsed value can outlive the account data or log it came from.

use crate::error::CodecError;

/// A raw 32-byte account address (Ed25519 public key bytes).
pub type Address = [u8; 32];

/// Wire size of an address.
pub const ADDRESS_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a `u8` as a single byte.
pub fn encode_u8(value: u8) -> [u8; 1] {
    [value]
}

/// Encode a `u16` as 2 little-endian bytes.
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Encode a `u64` as 8 little-endian bytes.
pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Encode an address as its raw 32 bytes. No validation is applied — the
/// codec treats addresses as opaque identifiers.
pub fn encode_address(address: &Address) -> [u8; 32] {
    *address
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Borrow `count` bytes at `offset`, or fail with `TruncatedBuffer`.
pub(crate) fn take<'a>(
    bytes: &'a [u8],
    offset: usize,
    count: usize,
    what: &str,
) -> Result<&'a [u8], CodecError> {
    let end = offset.checked_add(count).ok_or_else(|| {
        CodecError::TruncatedBuffer(format!("{what}: offset {offset} + {count} overflows usize"))
    })?;
    if end > bytes.len() {
        return Err(CodecError::TruncatedBuffer(format!(
            "{what}: need {count} bytes at offset {offset}, buffer holds {}",
            bytes.len()
        )));
    }
    Ok(&bytes[offset..end])
}

/// Decode a `u8` at `offset`.
pub fn decode_u8(bytes: &[u8], offset: usize) -> Result<(u8, usize), CodecError> {
    let slice = take(bytes, offset, 1, "u8")?;
    Ok((slice[0], offset + 1))
}

/// Decode a little-endian `u16` at `offset`.
pub fn decode_u16(bytes: &[u8], offset: usize) -> Result<(u16, usize), CodecError> {
    let slice = take(bytes, offset, 2, "u16")?;
    Ok((u16::from_le_bytes([slice[0], slice[1]]), offset + 2))
}

/// Decode a little-endian `u64` at `offset`.
pub fn decode_u64(bytes: &[u8], offset: usize) -> Result<(u64, usize), CodecError> {
    let slice = take(bytes, offset, 8, "u64")?;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(slice);
    Ok((u64::from_le_bytes(raw), offset + 8))
}

/// Decode a 32-byte address at `offset`. The returned array is a copy.
pub fn decode_address(bytes: &[u8], offset: usize) -> Result<(Address, usize), CodecError> {
    let slice = take(bytes, offset, ADDRESS_LEN, "address")?;
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(slice);
    Ok((address, offset + ADDRESS_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- byte order ----------------------------------------------------------

    #[test]
    fn u16_is_little_endian() {
        // 300 = 0x012C -> low byte first.
        assert_eq!(encode_u16(300), [0x2C, 0x01]);
    }

    #[test]
    fn u64_is_little_endian() {
        assert_eq!(
            encode_u64(0x0102030405060708),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn u8_is_single_byte() {
        assert_eq!(encode_u8(0xAB), [0xAB]);
    }

    // -- round trips ---------------------------------------------------------

    #[test]
    fn u16_roundtrip() {
        for value in [0u16, 1, 127, 128, 255, 256, 300, u16::MAX] {
            let encoded = encode_u16(value);
            let (decoded, offset) = decode_u16(&encoded, 0).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(offset, 2);
        }
    }

    #[test]
    fn u64_roundtrip() {
        for value in [0u64, 1, u32::MAX as u64, u64::MAX] {
            let encoded = encode_u64(value);
            let (decoded, offset) = decode_u64(&encoded, 0).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(offset, 8);
        }
    }

    #[test]
    fn address_roundtrip() {
        let address: Address = [0x42; 32];
        let encoded = encode_address(&address);
        let (decoded, offset) = decode_address(&encoded, 0).unwrap();
        assert_eq!(decoded, address);
        assert_eq!(offset, 32);
    }

    // -- offset threading ----------------------------------------------------

    #[test]
    fn decode_at_nonzero_offset() {
        let bytes = [0xFF, 0xFF, 0x2C, 0x01];
        let (value, offset) = decode_u16(&bytes, 2).unwrap();
        assert_eq!(value, 300);
        assert_eq!(offset, 4);
    }

    #[test]
    fn decoded_address_is_a_copy() {
        let mut bytes = vec![0x11u8; 32];
        let (decoded, _) = decode_address(&bytes, 0).unwrap();
        bytes[0] = 0x99;
        // The decoded value must be unaffected by later buffer mutation.
        assert_eq!(decoded[0], 0x11);
    }

    // -- truncation ----------------------------------------------------------

    #[test]
    fn decode_u16_truncated_fails() {
        let result = decode_u16(&[0x2C], 0);
        assert!(matches!(result, Err(CodecError::TruncatedBuffer(_))));
    }

    #[test]
    fn decode_u64_truncated_fails() {
        let result = decode_u64(&[0; 7], 0);
        assert!(matches!(result, Err(CodecError::TruncatedBuffer(_))));
    }

    #[test]
    fn decode_address_truncated_fails() {
        let result = decode_address(&[0; 31], 0);
        assert!(matches!(result, Err(CodecError::TruncatedBuffer(_))));
    }

    #[test]
    fn decode_past_end_fails() {
        // Enough bytes overall, but not past the offset.
        let bytes = [0u8; 8];
        let result = decode_u64(&bytes, 1);
        assert!(matches!(result, Err(CodecError::TruncatedBuffer(_))));
    }

    #[test]
    fn decode_from_empty_buffer_fails() {
        assert!(decode_u8(&[], 0).is_err());
        assert!(decode_u16(&[], 0).is_err());
        assert!(decode_u64(&[], 0).is_err());
        assert!(decode_address(&[], 0).is_err());
    }
}
