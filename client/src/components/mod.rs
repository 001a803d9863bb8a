//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and read/write shared state from
//! Leptos context providers.

pub mod contact;
pub mod icons;
pub mod project_card;
pub mod projects;
pub mod toast;
