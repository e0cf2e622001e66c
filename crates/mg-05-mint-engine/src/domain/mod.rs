pub mod engine;
pub mod entities;
pub mod errors;

pub use engine::*;
pub use entities::*;
pub use errors::*;
