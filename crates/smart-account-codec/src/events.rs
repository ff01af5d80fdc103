//! Log events emitted by the smart-account program.
//!
//! Each event is a fixed-shape concatenation of primitive fields with no
//! length prefix and no inline type tag. The log reader learns which shape
//! to expect out of band — from the instruction that produced the log — and
//! calls the matching decoder; these codecs never discriminate between
//! kinds themselves.
//!
//! All decoders take `(bytes, offset)` and return `(event, new_offset)` so
//! they compose with whatever framing the log transport adds around them.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::primitives::{self, Address, ADDRESS_LEN};

/// Emitted once when a new smart account is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSmartAccountEvent {
    pub smart_account: Address,
    /// Derivation seed the account was created with.
    pub seed: u64,
}

impl CreateSmartAccountEvent {
    /// Fixed wire size: address + u64 seed.
    pub const ENCODED_LEN: usize = ADDRESS_LEN + 8;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.extend_from_slice(&primitives::encode_u64(self.seed));
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("create_smart_account.smart_account"))?;
        let (seed, offset) = primitives::decode_u64(bytes, offset)
            .map_err(|e| e.in_field("create_smart_account.seed"))?;
        Ok((Self { smart_account, seed }, offset))
    }
}

/// Emitted when a transaction executes synchronously against one of the
/// smart account's derived accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynchronousTransactionEvent {
    pub smart_account: Address,
    pub account_index: u8,
}

impl SynchronousTransactionEvent {
    pub const ENCODED_LEN: usize = ADDRESS_LEN + 1;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.push(self.account_index);
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("synchronous_transaction.smart_account"))?;
        let (account_index, offset) = primitives::decode_u8(bytes, offset)
            .map_err(|e| e.in_field("synchronous_transaction.account_index"))?;
        Ok((
            Self {
                smart_account,
                account_index,
            },
            offset,
        ))
    }
}

/// Emitted when a settings change executes synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynchronousSettingsTransactionEvent {
    pub smart_account: Address,
}

impl SynchronousSettingsTransactionEvent {
    pub const ENCODED_LEN: usize = ADDRESS_LEN;

    pub fn encode(&self) -> Vec<u8> {
        self.smart_account.to_vec()
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("synchronous_settings_transaction.smart_account"))?;
        Ok((Self { smart_account }, offset))
    }
}

/// Emitted when a spending limit is added to a smart account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSpendingLimitEvent {
    pub smart_account: Address,
    pub spending_limit: Address,
}

impl AddSpendingLimitEvent {
    pub const ENCODED_LEN: usize = 2 * ADDRESS_LEN;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.extend_from_slice(&self.spending_limit);
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("add_spending_limit.smart_account"))?;
        let (spending_limit, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("add_spending_limit.spending_limit"))?;
        Ok((
            Self {
                smart_account,
                spending_limit,
            },
            offset,
        ))
    }
}

/// Emitted when a spending limit is removed. Same shape as
/// [`AddSpendingLimitEvent`]; the emitting instruction disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSpendingLimitEvent {
    pub smart_account: Address,
    pub spending_limit: Address,
}

impl RemoveSpendingLimitEvent {
    pub const ENCODED_LEN: usize = 2 * ADDRESS_LEN;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.extend_from_slice(&self.spending_limit);
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("remove_spending_limit.smart_account"))?;
        let (spending_limit, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("remove_spending_limit.spending_limit"))?;
        Ok((
            Self {
                smart_account,
                spending_limit,
            },
            offset,
        ))
    }
}

/// Emitted each time a spending limit is drawn against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseSpendingLimitEvent {
    pub smart_account: Address,
    pub spending_limit: Address,
    /// Amount spent, in the limit's base units.
    pub amount: u64,
}

impl UseSpendingLimitEvent {
    pub const ENCODED_LEN: usize = 2 * ADDRESS_LEN + 8;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.extend_from_slice(&self.spending_limit);
        out.extend_from_slice(&primitives::encode_u64(self.amount));
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("use_spending_limit.smart_account"))?;
        let (spending_limit, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("use_spending_limit.spending_limit"))?;
        let (amount, offset) = primitives::decode_u64(bytes, offset)
            .map_err(|e| e.in_field("use_spending_limit.amount"))?;
        Ok((
            Self {
                smart_account,
                spending_limit,
                amount,
            },
            offset,
        ))
    }
}

/// Emitted when the authority updates account settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritySettingsEvent {
    pub smart_account: Address,
}

impl AuthoritySettingsEvent {
    pub const ENCODED_LEN: usize = ADDRESS_LEN;

    pub fn encode(&self) -> Vec<u8> {
        self.smart_account.to_vec()
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("authority_settings.smart_account"))?;
        Ok((Self { smart_account }, offset))
    }
}

/// Emitted when the account's authority is handed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityChangeEvent {
    pub smart_account: Address,
    pub old_authority: Address,
    pub new_authority: Address,
}

impl AuthorityChangeEvent {
    pub const ENCODED_LEN: usize = 3 * ADDRESS_LEN;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.smart_account);
        out.extend_from_slice(&self.old_authority);
        out.extend_from_slice(&self.new_authority);
        out
    }

    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (smart_account, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("authority_change.smart_account"))?;
        let (old_authority, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("authority_change.old_authority"))?;
        let (new_authority, offset) = primitives::decode_address(bytes, offset)
            .map_err(|e| e.in_field("authority_change.new_authority"))?;
        Ok((
            Self {
                smart_account,
                old_authority,
                new_authority,
            },
            offset,
        ))
    }
}
