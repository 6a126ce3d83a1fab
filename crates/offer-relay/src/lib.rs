//! Server-side offer relay: parse the tagged submission, re-validate it
//! against authoritative storefront data and forward the canonical
//! payload to the downstream bidding service.

pub mod action;
pub mod bid;
pub mod handler;

pub use action::*;
pub use bid::*;
pub use handler::*;
