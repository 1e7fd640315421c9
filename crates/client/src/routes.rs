//! The application route table.
//!
//! Each navigable resource carries an immutable [`RouteRule`]. The hosting
//! router looks the rule up with [`rule_for`] and evaluates it through the
//! access gate on every navigation attempt.

use digital_cafe_core::Role;

use crate::access::{AccessDecision, RouteRule, evaluate};
use crate::session::Principal;

/// A navigable path and its access rule.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Path as registered with the router.
    pub path: &'static str,
    /// Access requirements for this path.
    pub rule: RouteRule,
}

/// All registered routes. Unknown paths fall back to home, which is public.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        rule: RouteRule::public(),
    },
    Route {
        path: "/menu",
        rule: RouteRule::public(),
    },
    Route {
        path: "/cart",
        rule: RouteRule::public(),
    },
    Route {
        path: "/auth/login",
        rule: RouteRule::public(),
    },
    Route {
        path: "/auth/register",
        rule: RouteRule::public(),
    },
    Route {
        path: "/auth/verify-email",
        rule: RouteRule::public(),
    },
    Route {
        path: "/auth/forgot-password",
        rule: RouteRule::public(),
    },
    Route {
        path: "/unauthorized",
        rule: RouteRule::public(),
    },
    Route {
        path: "/profile",
        rule: RouteRule::authenticated(),
    },
    Route {
        path: "/orders",
        rule: RouteRule::authenticated(),
    },
    Route {
        path: "/bookings",
        rule: RouteRule::authenticated(),
    },
    Route {
        path: "/dashboard/admin",
        rule: RouteRule::roles(&[Role::Admin]),
    },
    Route {
        path: "/dashboard/owner",
        rule: RouteRule::roles(&[Role::CafeOwner]),
    },
    Route {
        path: "/dashboard/chef",
        rule: RouteRule::roles(&[Role::Chef]),
    },
    Route {
        path: "/dashboard/waiter",
        rule: RouteRule::roles(&[Role::Waiter]),
    },
    Route {
        path: "/dashboard/customer",
        rule: RouteRule::roles(&[Role::Customer]),
    },
    Route {
        path: "/staff/create",
        rule: RouteRule::roles(&[Role::Admin, Role::CafeOwner]),
    },
];

/// Look up the rule for a path. `None` means the path is unregistered and
/// the router should fall back to home.
#[must_use]
pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| &route.rule)
}

/// Evaluate a navigation attempt to `path` for `principal`.
///
/// Re-evaluated fresh on every call; nothing is cached. Unregistered paths
/// are allowed (the router redirects them home, which is public).
#[must_use]
pub fn decide(path: &str, principal: Option<&Principal>) -> AccessDecision {
    rule_for(path).map_or(AccessDecision::Allow, |rule| evaluate(principal, rule))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::access::RedirectTarget;
    use digital_cafe_core::{AuthToken, Email, UserId};

    fn principal(role: Role) -> Principal {
        Principal {
            id: UserId::new(1),
            display_name: "p".to_owned(),
            email: Email::parse("p@example.com").unwrap(),
            role,
            email_verified: true,
            profile_completed: true,
            token: AuthToken::parse("t").unwrap(),
        }
    }

    #[test]
    fn test_menu_and_cart_are_public() {
        assert!(decide("/menu", None).is_allowed());
        assert!(decide("/cart", None).is_allowed());
    }

    #[test]
    fn test_each_dashboard_admits_only_its_role() {
        let dashboards = [
            ("/dashboard/admin", Role::Admin),
            ("/dashboard/owner", Role::CafeOwner),
            ("/dashboard/chef", Role::Chef),
            ("/dashboard/waiter", Role::Waiter),
            ("/dashboard/customer", Role::Customer),
        ];

        for (path, allowed_role) in dashboards {
            for role in Role::ALL {
                let p = principal(role);
                let decision = decide(path, Some(&p));
                if role == allowed_role {
                    assert!(decision.is_allowed(), "{role} should reach {path}");
                } else {
                    assert_eq!(
                        decision,
                        AccessDecision::Deny(RedirectTarget::Unauthorized),
                        "{role} should be denied {path}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_profile_requires_any_authenticated_role() {
        assert_eq!(
            decide("/profile", None),
            AccessDecision::Deny(RedirectTarget::Login)
        );
        let customer = principal(Role::Customer);
        assert!(decide("/profile", Some(&customer)).is_allowed());
    }

    #[test]
    fn test_staff_creation_restricted_to_admin_and_owner() {
        let owner = principal(Role::CafeOwner);
        let waiter = principal(Role::Waiter);
        assert!(decide("/staff/create", Some(&owner)).is_allowed());
        assert_eq!(
            decide("/staff/create", Some(&waiter)),
            AccessDecision::Deny(RedirectTarget::Unauthorized)
        );
    }

    #[test]
    fn test_unregistered_path_falls_through() {
        assert!(rule_for("/no-such-page").is_none());
        assert!(decide("/no-such-page", None).is_allowed());
    }
}
