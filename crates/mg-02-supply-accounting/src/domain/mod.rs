pub mod errors;
pub mod ledger;

pub use errors::*;
pub use ledger::*;
