//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `token_store` persists the bearer token
//! the client injects, and `types` defines the shared wire schema.

pub mod api;
pub mod token_store;
pub mod types;
