//! Integration tests for the Digital Cafe client.
//!
//! Everything here runs against real library code and real files; only the
//! backend is faked (through the `OrderApi` seam) or absent. Tests that
//! need durable state use a `JsonFileStore` in the OS temp directory and
//! clean up after themselves.
//!
//! # Test Categories
//!
//! - `cart_persistence` - cart state across simulated restarts
//! - `session_lifecycle` - login, logout, and corrupt-record recovery
//! - `access_gate` - route table and role decisions end to end
//! - `checkout_flow` - cart-to-order submission through a faked backend

/// Shared helpers for the test binaries.
pub mod support {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// A per-process unique temp file path for a store document.
    #[must_use]
    pub fn temp_store_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "digital-cafe-it-{}-{tag}-{n}.json",
            std::process::id()
        ))
    }
}
