//! # Mintgate Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Full admission flows over the service
//! │   ├── stages.rs
//! │   ├── admission.rs
//! │   └── cosign_flow.rs
//! │
//! └── exploits/         # Attack simulations
//!     ├── replay.rs
//!     ├── reentrancy.rs
//!     └── supply_cap.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mg-tests
//!
//! # By category
//! cargo test -p mg-tests integration::
//! cargo test -p mg-tests exploits::
//! ```

#![allow(dead_code)]

pub mod support;
