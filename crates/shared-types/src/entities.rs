//! # Core Primitives
//!
//! Address, digest, and time primitives used by every subsystem.

use sha3::{Digest, Keccak256};

/// A 32-byte Keccak256 digest.
pub type Hash = [u8; 32];

/// The all-zero digest. A stage whose allowlist digest equals this value
/// is open to every requester.
pub const ZERO_HASH: Hash = [0u8; 32];

/// A 20-byte Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// A Unix timestamp in seconds.
pub type Timestamp = u64;

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}
