//! # Shared Types Crate
//!
//! Primitive types shared across all engine subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem primitives (addresses,
//!   digests, timestamps, token identifiers) are defined here and only here.
//! - **No behavior**: this crate holds data definitions and pure helpers;
//!   all admission logic lives in the subsystem crates.

pub mod entities;
pub mod token;

pub use entities::*;
pub use token::*;
