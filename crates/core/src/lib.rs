//! Digital Cafe Core - Shared domain types.
//!
//! This crate provides the common types used across the Digital Cafe
//! workspace (the `client` crate and the integration tests).
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, roles, emails,
//!   statuses, credentials, and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
