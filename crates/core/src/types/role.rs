//! User roles driving access decisions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The role of an authenticated user.
///
/// Serialized in `SCREAMING_SNAKE_CASE` to match the backend wire format
/// (e.g. `CAFE_OWNER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    CafeOwner,
    Chef,
    Waiter,
    Customer,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::CafeOwner,
        Self::Chef,
        Self::Waiter,
        Self::Customer,
    ];

    /// The wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::CafeOwner => "CAFE_OWNER",
            Self::Chef => "CHEF",
            Self::Waiter => "WAITER",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Whether this role is café staff (owner, chef, or waiter).
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        matches!(self, Self::CafeOwner | Self::Chef | Self::Waiter)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "CAFE_OWNER" => Ok(Self::CafeOwner),
            "CHEF" => Ok(Self::Chef),
            "WAITER" => Ok(Self::Waiter),
            "CUSTOMER" => Ok(Self::Customer),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized role string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);
