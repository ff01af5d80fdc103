//! Base58 address helpers.
//!
//! Callers pass addresses around as Base58 strings (the form every RPC and
//! explorer uses); the wire format wants the raw 32 bytes. These helpers
//! convert between the two. There is no hashing step — the Base58 string is
//! the encoding of the public key bytes themselves.

use crate::error::CodecError;
use crate::primitives::{Address, ADDRESS_LEN};

/// Decode a Base58 address string to its raw 32 bytes.
pub fn address_to_bytes(address: &str) -> Result<Address, CodecError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| CodecError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: Address = bytes.try_into().map_err(|v: Vec<u8>| {
        CodecError::InvalidAddress(format!("expected {ADDRESS_LEN} bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode raw 32-byte address bytes as a Base58 string.
pub fn bytes_to_address(bytes: &Address) -> String {
    bs58::encode(bytes).into_string()
}

/// Validate a Base58 address string: it must decode to exactly 32 bytes.
pub fn validate_address(address: &str) -> Result<bool, CodecError> {
    address_to_bytes(address)?;
    Ok(true)
}
