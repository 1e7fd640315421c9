//! Core types for the Digital Cafe client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod price;
pub mod role;
pub mod status;
pub mod token;

pub use cart::CartLine;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use role::{Role, UnknownRole};
pub use status::*;
pub use token::{AuthToken, AuthTokenError};
