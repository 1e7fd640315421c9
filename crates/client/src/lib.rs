//! Digital Cafe client library.
//!
//! Owns the client-side state of the café ordering application: the
//! shopping cart, the authenticated session, role-based access decisions
//! for navigation, and a typed facade over the REST backend. UI rendering
//! and the backend itself are external collaborators.
//!
//! All state mutation happens on a single logical thread (the UI event
//! loop); shared ownership uses `Rc<RefCell<_>>` rather than locks.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod gateway;
pub mod notice;
pub mod routes;
pub mod sequence;
pub mod session;
pub mod storage;
pub mod subscription;

pub use error::{AppError, Result};

/// Initialize `tracing` for binaries and examples.
///
/// Respects `RUST_LOG`; defaults to `info` for this crate. Calling it twice
/// is a no-op (the second global-default registration fails silently).
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("digital_cafe=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
