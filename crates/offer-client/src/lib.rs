//! Client side of the offer flow: derive a draft from the navigation
//! context handed forward by the product view, hold the panel's mutable
//! UI state, and submit through the keyed form abstraction.

pub mod context;
pub mod panel;
pub mod submitter;

pub use context::*;
pub use panel::*;
pub use submitter::*;
