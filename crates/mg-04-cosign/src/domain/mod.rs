pub mod digest;
pub mod entities;
pub mod errors;
pub mod verify;

pub use digest::*;
pub use entities::*;
pub use errors::*;
pub use verify::*;
