//! # Allowlist Proof Errors

use thiserror::Error;

/// Errors that can occur during allowlist proof handling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProofError {
    /// The proof does not recompute to the committed digest
    #[error("Invalid allowlist proof")]
    InvalidProof,

    /// The address is not a member of the committed set (proof generation)
    #[error("Address is not in the allowlist")]
    NotAMember,
}
