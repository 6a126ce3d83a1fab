//! Keyed form-submission abstraction: the wire codec that packs a
//! tagged action plus structured inputs into one form field, and the
//! per-key fetcher state machine callers observe submission progress
//! through.

pub mod codec;
pub mod fetcher;

pub use codec::*;
pub use fetcher::*;
