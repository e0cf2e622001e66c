//! # Allowlist Tree
//!
//! Builds the Merkle commitment over an address set and produces inclusion
//! proofs. Operators run this off the admission path to publish a stage
//! digest; tests use it to drive the verifier.
//!
//! Leaves are deduplicated and sorted so the same set always commits to the
//! same digest regardless of input order. An unpaired node at the end of a
//! level is promoted to the next level unchanged.

use super::errors::ProofError;
use super::verify::{hash_pair, leaf_hash};
use shared_types::{Address, Hash};

/// A Merkle tree over a set of allowlisted addresses.
#[derive(Debug, Clone)]
pub struct AllowlistTree {
    /// All levels, leaves first. `levels[0]` holds the sorted leaf hashes;
    /// the last level holds the single root.
    levels: Vec<Vec<Hash>>,
    /// Sorted, deduplicated member addresses, index-aligned with `levels[0]`.
    members: Vec<Address>,
}

impl AllowlistTree {
    /// Build the commitment over `addresses`.
    ///
    /// Duplicates are dropped and leaves sorted, so the digest is a set
    /// commitment, not a sequence commitment. An empty set commits to the
    /// all-zero digest, which by convention means "no allowlist".
    pub fn build(addresses: &[Address]) -> Self {
        let mut members: Vec<Address> = addresses.to_vec();
        members.sort_unstable();
        members.dedup();

        // Sort members by leaf hash so leaves and members stay index-aligned.
        let mut pairs: Vec<(Hash, Address)> = members
            .iter()
            .map(|addr| (leaf_hash(addr), *addr))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        let leaves: Vec<Hash> = pairs.iter().map(|(leaf, _)| *leaf).collect();
        let members: Vec<Address> = pairs.into_iter().map(|(_, addr)| addr).collect();

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let prev = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity((prev.len() + 1) / 2);
            for chunk in prev.chunks(2) {
                if let [a, b] = chunk {
                    next.push(hash_pair(a, b));
                } else {
                    // Odd node: promote unchanged
                    next.push(chunk[0]);
                }
            }
            levels.push(next);
        }

        Self { levels, members }
    }

    /// The committed digest (all-zero for an empty set).
    pub fn digest(&self) -> Hash {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(shared_types::ZERO_HASH)
    }

    /// Number of distinct members in the commitment.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Produce the sibling path proving `address` is a member.
    ///
    /// Fails with `NotAMember` for addresses outside the committed set.
    pub fn proof_for(&self, address: &Address) -> Result<Vec<Hash>, ProofError> {
        let mut idx = self
            .members
            .binary_search_by(|m| leaf_hash(m).cmp(&leaf_hash(address)))
            .map_err(|_| ProofError::NotAMember)?;

        let mut path = Vec::new();
        for level in &self.levels[..self.levels.len().saturating_sub(1)] {
            let sibling_idx = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
            if let Some(sibling) = level.get(sibling_idx) {
                path.push(*sibling);
            }
            // Promoted odd nodes contribute no sibling at this level.
            idx /= 2;
        }

        Ok(path)
    }
}
