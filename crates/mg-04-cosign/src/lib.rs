//! # Cosign Subsystem (MG-04)
//!
//! Verifies bounded-lifetime authorizations issued by a designated off-path
//! signer for a specific (minter, quantity, timestamp) tuple.
//!
//! ## Security Notes
//!
//! - **Replay protection**: the signed message binds the minter's current
//!   nonce; the orchestrator advances the nonce on every successful mint, so
//!   a consumed authorization can never be replayed
//! - **Malleability**: signatures with high S values are rejected
//! - **Wire contract**: the digest field order is fixed; reordering breaks
//!   every previously issued signature

pub mod domain;

pub use domain::digest::cosign_digest;
pub use domain::entities::{CosignAuthorization, CosignSignature};
pub use domain::errors::CosignError;
pub use domain::verify::{recover_cosigner, signer_address, CosignVerifier};
