//! Client-side state models.
//!
//! DESIGN
//! ======
//! Plain data types and transition functions with no browser dependencies, so
//! every rule here is unit-testable off the WASM target. Components wrap them
//! in `RwSignal`s.

pub mod contact;
pub mod pointer;
pub mod reveal;
pub mod toast;
