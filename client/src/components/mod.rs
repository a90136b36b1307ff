//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the to-do page chrome and rows while reading/writing
//! shared state from Leptos context providers.

pub mod filter_bar;
pub mod task_input;
pub mod task_row;
pub mod theme_toggle;
