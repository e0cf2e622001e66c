pub mod errors;
pub mod tree;
pub mod verify;

pub use errors::*;
pub use tree::*;
pub use verify::*;
