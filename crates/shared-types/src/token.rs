//! # Partitioned Token Identifiers
//!
//! A `TokenId` is a `u64` whose high 8 bits name its **kind** partition.
//! Kind `0x00` is a reserved namespace that no mint may touch; the
//! remaining 56 bits are a sequential cursor within the kind.
//!
//! The asset ledger rejects any identifier inside the reserved kind, so
//! the engine pre-validates ranges against the partition before handing
//! them off.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 64-bit token identifier: `kind (8 bits) || sequence (56 bits)`.
pub type TokenId = u64;

/// Number of bits in the sequence portion of a `TokenId`.
pub const SEQ_BITS: u32 = 56;

/// The kind whose identifiers are reserved and never mintable.
pub const RESERVED_KIND: u8 = 0x00;

/// Errors raised when composing token identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenIdError {
    /// The kind is the reserved namespace
    #[error("Kind {0:#04x} is reserved")]
    ReservedKind(u8),

    /// The sequence does not fit in the 56-bit cursor space
    #[error("Sequence {0} exceeds the kind partition")]
    SequenceOverflow(u64),
}

/// Extract the kind partition from an identifier.
pub fn token_kind(id: TokenId) -> u8 {
    (id >> SEQ_BITS) as u8
}

/// Extract the in-kind sequence number from an identifier.
pub fn token_seq(id: TokenId) -> u64 {
    id & kind_capacity()
}

/// Maximum sequence value representable inside one kind (2^56 - 1).
pub const fn kind_capacity() -> u64 {
    (1u64 << SEQ_BITS) - 1
}

/// Compose an identifier from a kind and an in-kind sequence number.
///
/// Fails if the kind is reserved or the sequence overflows the partition.
pub fn token_id(kind: u8, seq: u64) -> Result<TokenId, TokenIdError> {
    if kind == RESERVED_KIND {
        return Err(TokenIdError::ReservedKind(kind));
    }
    if seq > kind_capacity() {
        return Err(TokenIdError::SequenceOverflow(seq));
    }
    Ok(((kind as u64) << SEQ_BITS) | seq)
}
