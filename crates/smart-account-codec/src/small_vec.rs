//! `SmallVec` compact sequences: a narrow length prefix followed by items.
//!
//! The smart-account program serializes collections with a 1- or 2-byte
//! unsigned little-endian length prefix instead of the usual 4 or 8 bytes.
//! Which width applies is fixed per field by the program's layout (signer
//! lists are bounded small, instruction payloads can be larger), so the
//! width is a type parameter here rather than a runtime argument.
//!
//! ```text
//! SmallVec:
//!   len       u8 or u16 LE (per field)
//!   items     len * item encoding, original order, no padding
//! ```
//!
//! One generic algorithm handles every concrete sequence type; the prefix
//! and iteration logic cannot diverge between uses.

use crate::error::CodecError;
use crate::primitives::{self, Address, ADDRESS_LEN};

/// A value that can appear as a `SmallVec` item.
///
/// `encoded_size` and `write` must agree byte-for-byte: the encoder sizes
/// its output from the former and fills it with the latter.
pub trait SmallVecItem: Sized {
    /// Exact number of bytes `write` appends for this value.
    fn encoded_size(&self) -> usize;

    /// Append the wire encoding of this value to `out`.
    fn write(&self, out: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Decode one value at `offset`, returning it with the offset just past
    /// the consumed bytes.
    fn read(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError>;
}

/// Width of the length prefix in front of a `SmallVec`.
pub trait LengthPrefix {
    /// Prefix size in bytes.
    const BYTES: usize;
    /// Largest item count the prefix can represent.
    const MAX_LEN: usize;

    /// Append the prefix for `len` items. Callers check `len <= MAX_LEN`
    /// before this runs.
    fn write_len(len: usize, out: &mut Vec<u8>);

    /// Read the prefix at `offset`, returning the item count and the offset
    /// past the prefix.
    fn read_len(bytes: &[u8], offset: usize) -> Result<(usize, usize), CodecError>;
}

/// One-byte length prefix; sequences bounded at 255 entries.
pub struct U8Prefix;

/// Two-byte little-endian length prefix; sequences bounded at 65535 entries.
pub struct U16Prefix;

impl LengthPrefix for U8Prefix {
    const BYTES: usize = 1;
    const MAX_LEN: usize = u8::MAX as usize;

    fn write_len(len: usize, out: &mut Vec<u8>) {
        out.push(len as u8);
    }

    fn read_len(bytes: &[u8], offset: usize) -> Result<(usize, usize), CodecError> {
        let (len, offset) = primitives::decode_u8(bytes, offset)?;
        Ok((len as usize, offset))
    }
}

impl LengthPrefix for U16Prefix {
    const BYTES: usize = 2;
    const MAX_LEN: usize = u16::MAX as usize;

    fn write_len(len: usize, out: &mut Vec<u8>) {
        out.extend_from_slice(&(len as u16).to_le_bytes());
    }

    fn read_len(bytes: &[u8], offset: usize) -> Result<(usize, usize), CodecError> {
        let (len, offset) = primitives::decode_u16(bytes, offset)?;
        Ok((len as usize, offset))
    }
}

// ---------------------------------------------------------------------------
// Generic encode/decode
// ---------------------------------------------------------------------------

/// Total encoded size of `items` as a `SmallVec` with prefix `P`:
/// prefix bytes plus the sum of each item's encoded size.
pub fn small_vec_encoded_size<P: LengthPrefix, T: SmallVecItem>(items: &[T]) -> usize {
    P::BYTES + items.iter().map(SmallVecItem::encoded_size).sum::<usize>()
}

/// Encode `items` as `prefix || item_0 || ... || item_{len-1}`.
///
/// Fails with `LengthOverflow` when `items.len()` exceeds what the prefix
/// width can represent. The output length always equals
/// [`small_vec_encoded_size`] for the same items.
pub fn encode_small_vec<P: LengthPrefix, T: SmallVecItem>(
    items: &[T],
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(small_vec_encoded_size::<P, T>(items));
    write_small_vec::<P, T>(items, &mut out)?;
    Ok(out)
}

/// Append `prefix || items` to an existing buffer. Composite item codecs use
/// this directly so nested sequences encode without intermediate allocations.
pub(crate) fn write_small_vec<P: LengthPrefix, T: SmallVecItem>(
    items: &[T],
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    if items.len() > P::MAX_LEN {
        return Err(CodecError::LengthOverflow(format!(
            "{} items exceed the {}-byte prefix maximum of {}",
            items.len(),
            P::BYTES,
            P::MAX_LEN
        )));
    }
    P::write_len(items.len(), out);
    for item in items {
        item.write(out)?;
    }
    Ok(())
}

/// Decode a `SmallVec` at `offset`: read the prefix, then exactly that many
/// items, threading the offset through each read. Item order is preserved.
pub fn decode_small_vec<P: LengthPrefix, T: SmallVecItem>(
    bytes: &[u8],
    offset: usize,
) -> Result<(Vec<T>, usize), CodecError> {
    let (len, mut offset) = P::read_len(bytes, offset)?;
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        let (item, next) = T::read(bytes, offset)?;
        items.push(item);
        offset = next;
    }
    Ok((items, offset))
}

// ---------------------------------------------------------------------------
// Primitive items
// ---------------------------------------------------------------------------

impl SmallVecItem for u8 {
    fn encoded_size(&self) -> usize {
        1
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.push(*self);
        Ok(())
    }

    fn read(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        primitives::decode_u8(bytes, offset)
    }
}

impl SmallVecItem for Address {
    fn encoded_size(&self) -> usize {
        ADDRESS_LEN
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(self);
        Ok(())
    }

    fn read(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        primitives::decode_address(bytes, offset)
    }
}
