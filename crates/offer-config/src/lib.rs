//! Configuration loading for the offer relay service.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
