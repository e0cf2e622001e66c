//! # Allowlist Proofs Subsystem (MG-03)
//!
//! Merkle commitments over eligible address sets and the inclusion proofs
//! that gate admission to allowlisted stages.
//!
//! ## Hashing Scheme
//!
//! - Leaf: `keccak256(address)`
//! - Interior: commutative sorted-pair hashing,
//!   `keccak256(min(a, b) || max(a, b))`
//!
//! Sorted-pair hashing makes proofs bare sibling sequences with no
//! left/right flags, which is exactly the shape of the committed-digest
//! contract: a proof is a `Vec<Hash>` and nothing more.

pub mod domain;

pub use domain::errors::ProofError;
pub use domain::tree::AllowlistTree;
pub use domain::verify::verify_inclusion;
