//! Core types shared across the offer relay system.

pub mod draft;
pub mod errors;
pub mod money;
pub mod pricing;
pub mod relay;

pub use draft::*;
pub use errors::*;
pub use money::*;
pub use pricing::*;
pub use relay::*;
