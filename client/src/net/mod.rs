//! Networking modules for the REST task collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the CRUD calls and `types` defines the shared task schema
//! used both on the wire and in browser storage.

pub mod api;
pub mod types;
