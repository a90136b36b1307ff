//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`tasks`, `ui`) so components can depend on
//! small focused models provided through Leptos context.

pub mod filter;
pub mod tasks;
pub mod ui;
