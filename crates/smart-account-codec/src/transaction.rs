//! Transaction-message item codecs.
//!
//! Instruction arguments that carry an inner transaction embed two kinds of
//! variable-length items, both serialized with `SmallVec` fields:
//!
//! ```text
//! CompiledInstruction:
//!   program_id_index    u8
//!   account_indexes     SmallVec<u8 prefix, u8>
//!   data                SmallVec<u16 prefix, u8>
//!
//! MessageAddressTableLookup:
//!   account_key         32 bytes
//!   writable_indexes    SmallVec<u8 prefix, u8>
//!   readonly_indexes    SmallVec<u8 prefix, u8>
//! ```
//!
//! Both implement [`SmallVecItem`], so the outer `SmallVec<u8 prefix, _>`
//! forms the program expects come straight from the generic sequence codec.
//! Sizes are derived from the same field enumeration the writers use; there
//! is no per-call-site width arithmetic to drift out of sync.

use crate::error::CodecError;
use crate::primitives::{self, Address, ADDRESS_LEN};
use crate::small_vec::{
    decode_small_vec, small_vec_encoded_size, write_small_vec, SmallVecItem, U16Prefix, U8Prefix,
};

/// The smart-account program ID: `SQDS4ep65T869zMMBKyuUq6aD6EgTu8psMjkvj52pCf`.
pub const SMART_ACCOUNT_PROGRAM_ID: Address = [
    0x06, 0x81, 0xc4, 0xce, 0x47, 0xe2, 0x23, 0x68, 0xb8, 0xb1, 0x55, 0x5e, 0xc8, 0x87, 0xaf,
    0x09, 0x2e, 0xfc, 0x7e, 0xfb, 0xb6, 0x6c, 0xa3, 0xf5, 0x2f, 0xbf, 0x68, 0xd4, 0xac, 0x9c,
    0xb7, 0xa8,
];

/// An inner instruction with account references compiled to indexes into the
/// surrounding message's account list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    /// Index of the program to invoke.
    pub program_id_index: u8,
    /// Indexes of the accounts the instruction reads or writes.
    pub account_indexes: Vec<u8>,
    /// Opaque instruction data.
    pub data: Vec<u8>,
}

impl CompiledInstruction {
    /// Encode this instruction alone (without an outer sequence prefix).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.write(&mut out)?;
        Ok(out)
    }

    /// Decode one instruction at `offset`.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        Self::read(bytes, offset)
    }
}

impl SmallVecItem for CompiledInstruction {
    fn encoded_size(&self) -> usize {
        1 + small_vec_encoded_size::<U8Prefix, u8>(&self.account_indexes)
            + small_vec_encoded_size::<U16Prefix, u8>(&self.data)
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.push(self.program_id_index);
        write_small_vec::<U8Prefix, u8>(&self.account_indexes, out)?;
        write_small_vec::<U16Prefix, u8>(&self.data, out)?;
        Ok(())
    }

    fn read(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (program_id_index, offset) = primitives::decode_u8(bytes, offset)
            .map_err(|e| e.in_field("compiled_instruction.program_id_index"))?;
        let (account_indexes, offset) = decode_small_vec::<U8Prefix, u8>(bytes, offset)
            .map_err(|e| e.in_field("compiled_instruction.account_indexes"))?;
        let (data, offset) = decode_small_vec::<U16Prefix, u8>(bytes, offset)
            .map_err(|e| e.in_field("compiled_instruction.data"))?;
        Ok((
            Self {
                program_id_index,
                account_indexes,
                data,
            },
            offset,
        ))
    }
}

/// A reference into an on-chain address lookup table: one table address plus
/// the writable and readonly slots the message borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAddressTableLookup {
    /// Address of the lookup table account.
    pub account_key: Address,
    /// Table slots loaded as writable.
    pub writable_indexes: Vec<u8>,
    /// Table slots loaded as readonly.
    pub readonly_indexes: Vec<u8>,
}

impl MessageAddressTableLookup {
    /// Encode this lookup alone (without an outer sequence prefix).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.write(&mut out)?;
        Ok(out)
    }

    /// Decode one lookup at `offset`.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        Self::read(bytes, offset)
    }
}

impl SmallVecItem for MessageAddressTableLookup {
    fn encoded_size(&self) -> usize {
        ADDRESS_LEN
            + small_vec_encoded_size::<U8Prefix, u8>(&self.writable_indexes)
            + small_vec_encoded_size::<U8Prefix, u8>(&self.readonly_indexes)
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(&self.account_key);
        write_small_vec::<U8Prefix, u8>(&self.writable_indexes, out)?;
        write_small_vec::<U8Prefix, u8>(&self.readonly_indexes, out)?;
        Ok(())
    }

    fn read(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (account_key, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("address_table_lookup.account_key"))?;
        let (writable_indexes, offset) = decode_small_vec::<U8Prefix, u8>(bytes, offset)
            .map_err(|e| e.in_field("address_table_lookup.writable_indexes"))?;
        let (readonly_indexes, offset) = decode_small_vec::<U8Prefix, u8>(bytes, offset)
            .map_err(|e| e.in_field("address_table_lookup.readonly_indexes"))?;
        Ok((
            Self {
                account_key,
                writable_indexes,
                readonly_indexes,
            },
            offset,
        ))
    }
}
