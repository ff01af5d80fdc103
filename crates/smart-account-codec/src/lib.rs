//! Binary wire codec for a smart-account program's instruction arguments
//! and log events.
//!
//! The on-chain program serializes collections with compact `SmallVec`
//! layouts (a 1- or 2-byte unsigned little-endian length prefix, fixed per
//! field) and emits log events as fixed-shape field concatenations with no
//! prefix or tag. This crate reproduces those layouts by hand — no
//! `solana-sdk` dependency — with explicit byte accounting: every decoder
//! returns the offset just past what it consumed, so nested decoders
//! compose exactly.
//!
//! The codec layer is pure and stateless. Transaction construction,
//! signing, RPC, and address derivation belong to the callers on either
//! side: instruction builders hand in typed values and get bytes back, log
//! readers hand in bytes and get typed events back.

pub mod address;
pub mod error;
pub mod events;
pub mod primitives;
pub mod small_vec;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, bytes_to_address, validate_address};
pub use error::CodecError;
pub use events::{
    AddSpendingLimitEvent, AuthorityChangeEvent, AuthoritySettingsEvent, CreateSmartAccountEvent,
    RemoveSpendingLimitEvent, SynchronousSettingsTransactionEvent, SynchronousTransactionEvent,
    UseSpendingLimitEvent,
};
pub use primitives::{
    decode_address, decode_u16, decode_u64, decode_u8, encode_address, encode_u16, encode_u64,
    encode_u8, Address, ADDRESS_LEN,
};
pub use small_vec::{
    decode_small_vec, encode_small_vec, small_vec_encoded_size, LengthPrefix, SmallVecItem,
    U16Prefix, U8Prefix,
};
pub use transaction::{CompiledInstruction, MessageAddressTableLookup, SMART_ACCOUNT_PROGRAM_ID};
