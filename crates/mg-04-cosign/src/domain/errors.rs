//! # Cosign Errors
//!
//! Error types for delegated-signer authorization.

use thiserror::Error;

/// Errors that can occur while verifying a cosigned authorization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CosignError {
    /// No cosigner is configured but a cosigned request arrived
    #[error("No cosigner configured")]
    CosignerNotSet,

    /// The signature is malformed or was not produced by the configured
    /// cosigner over this exact authorization. Malformed encodings and
    /// signer mismatches deliberately collapse into this one kind.
    #[error("Invalid cosign signature")]
    InvalidCosignSignature,

    /// The signed timestamp is older than the configured expiry window
    #[error("Cosign timestamp expired")]
    TimestampExpired,
}
