//! Role-based access decisions.
//!
//! A pure, total decision function: every `(principal, rule)` pair yields
//! exactly one [`AccessDecision`], never an error. The hosting router calls
//! [`evaluate`] before committing a navigation and acts on the result.
//! Decisions are never cached - authentication state can change between
//! navigations (a logout elsewhere must be honored immediately), so the
//! gate re-evaluates on every attempt.

use digital_cafe_core::Role;

use crate::session::Principal;

/// Where to send a denied navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login page (not authenticated).
    Login,
    /// The unauthorized page (authenticated, wrong role).
    Unauthorized,
}

/// Result of evaluating a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The navigation may proceed.
    Allow,
    /// The navigation is denied; redirect to the given target.
    Deny(RedirectTarget),
}

impl AccessDecision {
    /// Whether the navigation may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Access requirements attached to a navigable resource.
///
/// Immutable, defined at configuration time. An empty role set means any
/// authenticated role is acceptable. A non-empty role set implies
/// authentication is required regardless of the `requires_authentication`
/// flag, so a rule can never ask for a role check on an absent principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    /// Whether an authenticated principal is required at all.
    pub requires_authentication: bool,
    /// Roles allowed through; empty means any authenticated role.
    pub required_roles: &'static [Role],
}

impl RouteRule {
    /// A rule anyone may pass, logged in or not.
    #[must_use]
    pub const fn public() -> Self {
        Self {
            requires_authentication: false,
            required_roles: &[],
        }
    }

    /// A rule requiring any authenticated principal.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self {
            requires_authentication: true,
            required_roles: &[],
        }
    }

    /// A rule requiring one of the given roles.
    #[must_use]
    pub const fn roles(required: &'static [Role]) -> Self {
        Self {
            requires_authentication: true,
            required_roles: required,
        }
    }
}

/// Decide whether `principal` may reach a resource guarded by `rule`.
///
/// 1. Authentication required (explicitly, or implied by a non-empty role
///    set) and no principal: deny towards login.
/// 2. Role set non-empty and the principal's role not in it: deny towards
///    the unauthorized page.
/// 3. Otherwise: allow.
#[must_use]
pub fn evaluate(principal: Option<&Principal>, rule: &RouteRule) -> AccessDecision {
    let needs_auth = rule.requires_authentication || !rule.required_roles.is_empty();

    let Some(principal) = principal else {
        return if needs_auth {
            AccessDecision::Deny(RedirectTarget::Login)
        } else {
            AccessDecision::Allow
        };
    };

    if !rule.required_roles.is_empty() && !rule.required_roles.contains(&principal.role) {
        return AccessDecision::Deny(RedirectTarget::Unauthorized);
    }

    AccessDecision::Allow
}
