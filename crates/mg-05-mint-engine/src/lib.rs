//! # Mint Engine Subsystem (MG-05)
//!
//! Composes the stage registry, supply accountant, allowlist verifier, and
//! cosign verifier into one admission decision per request, and hands
//! admitted requests to the external asset ledger.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): the admission pipeline, no I/O
//! - **Ports Layer** (`ports/`): the inbound admission API and the outbound
//!   asset-ledger gateway
//! - **Service Layer** (`service.rs`): wires the engine to the ledger and
//!   enforces the reentrancy guard
//!
//! ## Security Notes
//!
//! - **Checks before writes**: any failed check leaves all state untouched
//! - **Commit before the external call**: counters, nonce, and the
//!   identifier cursor are fully committed before the ledger is invoked, so
//!   a reentrant call observes updated state and fails the same quota checks
//! - **In-flight guard**: a nested admission attempt fails deterministically
//!   with `ReentrantCall`

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory_ledger::MemoryLedger;
pub use domain::engine::MintEngine;
pub use domain::entities::{
    Admission, Eligibility, MintConfig, MintReceipt, MintRequest, StageInfo,
};
pub use domain::errors::MintError;
pub use ports::inbound::MintAdmissionApi;
pub use ports::outbound::{AssetLedgerGateway, LedgerError};
pub use service::MintService;
