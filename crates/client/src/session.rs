//! Authenticated session state.
//!
//! The [`SessionHolder`] owns the current [`Principal`], persists the
//! credential and identity between runs, and broadcasts changes to
//! subscribers together with the derived authenticated flag. Persisted
//! state is adopted verbatim at startup; validation is delegated to the
//! backend, which rejects stale credentials at request time.

use digital_cafe_core::{AuthToken, Email, Role, UserId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{SharedStore, StoreError, keys};
use crate::subscription::{Subscribers, SubscriptionId};

/// The authenticated identity driving access decisions.
///
/// Invariant: a present principal always carries a non-empty token
/// (enforced by [`AuthToken`] at construction and re-checked when
/// rehydrating persisted records).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Backend user id.
    pub id: UserId,
    /// Username shown in the header.
    pub display_name: String,
    /// Account email.
    pub email: Email,
    /// Role driving access decisions.
    pub role: Role,
    /// Whether the account email has been verified.
    pub email_verified: bool,
    /// Whether the profile wizard has been completed.
    pub profile_completed: bool,
    /// Bearer credential attached to authenticated requests.
    pub token: AuthToken,
}

/// Outcome of reading the persisted session at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRehydration {
    /// No persisted session existed.
    LoggedOut,
    /// Token and principal were both present and adopted verbatim.
    Restored,
    /// The persisted record was malformed or incomplete; it was removed
    /// and the session starts unauthenticated. Silent by design.
    Recovered,
}

/// State delivered to session observers whenever the principal changes.
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    /// The current principal, if logged in.
    pub principal: Option<Principal>,
    /// Derived login flag (`principal.is_some()`).
    pub authenticated: bool,
}

/// Owner of the authenticated principal.
pub struct SessionHolder {
    store: SharedStore,
    principal: Option<Principal>,
    subscribers: Subscribers<SessionUpdate>,
}

impl SessionHolder {
    /// Rehydrate the session from durable storage.
    ///
    /// Both the token and the serialized principal must be present and
    /// parseable, and the token inside the principal must be non-empty.
    /// Anything less is treated as logged out: the corrupt records are
    /// removed without surfacing an error.
    #[must_use]
    pub fn load(store: SharedStore) -> (Self, SessionRehydration) {
        let (principal, outcome) = match read_persisted(&store) {
            Ok(Some(principal)) => {
                debug!(user = %principal.id, role = %principal.role, "session restored");
                (Some(principal), SessionRehydration::Restored)
            }
            Ok(None) => (None, SessionRehydration::LoggedOut),
            Err(reason) => {
                warn!(reason, "persisted session unusable, logging out");
                discard_persisted_session(&store);
                (None, SessionRehydration::Recovered)
            }
        };

        (
            Self {
                store,
                principal,
                subscribers: Subscribers::new(),
            },
            outcome,
        )
    }

    /// Replace the current principal, persisting credential and identity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persistence fails; the in-memory session
    /// is left unchanged and nothing is published.
    pub fn set_principal(&mut self, principal: Principal) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec(&principal)?;
        {
            let mut store = self.store.borrow_mut();
            store.set(keys::AUTH_TOKEN, principal.token.expose().as_bytes())?;
            store.set(keys::CURRENT_USER, &serialized)?;
        }
        self.principal = Some(principal);
        self.publish();
        Ok(())
    }

    /// Log out: remove persisted credential and identity, publish an
    /// unauthenticated state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persisted records cannot be removed.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        {
            let mut store = self.store.borrow_mut();
            store.delete(keys::AUTH_TOKEN)?;
            store.delete(keys::CURRENT_USER)?;
        }
        self.principal = None;
        self.publish();
        Ok(())
    }

    /// The current principal, if logged in.
    #[must_use]
    pub fn current(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Derived login flag.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// The bearer credential of the current principal, if any.
    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.principal.as_ref().map(|p| &p.token)
    }

    /// Register an observer. It immediately receives the current state,
    /// then every subsequent change of principal or login flag.
    pub fn subscribe(
        &mut self,
        mut observer: impl FnMut(&SessionUpdate) + 'static,
    ) -> SubscriptionId {
        let current = self.current_update();
        observer(&current);
        self.subscribers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn publish(&mut self) {
        let update = self.current_update();
        self.subscribers.publish(&update);
    }

    fn current_update(&self) -> SessionUpdate {
        SessionUpdate {
            principal: self.principal.clone(),
            authenticated: self.principal.is_some(),
        }
    }
}

impl std::fmt::Debug for SessionHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHolder")
            .field("principal", &self.principal)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

/// Read the persisted session, distinguishing "absent" from "corrupt".
fn read_persisted(store: &SharedStore) -> Result<Option<Principal>, &'static str> {
    let store = store.borrow();
    let token = store.get(keys::AUTH_TOKEN).map_err(|_| "token unreadable")?;
    let user = store.get(keys::CURRENT_USER).map_err(|_| "user unreadable")?;

    match (token, user) {
        (None, None) => Ok(None),
        (Some(token), Some(user)) => {
            if token.is_empty() {
                return Err("empty token");
            }
            let principal: Principal =
                serde_json::from_slice(&user).map_err(|_| "principal malformed")?;
            if principal.token.expose().is_empty() {
                return Err("principal missing token");
            }
            Ok(Some(principal))
        }
        // one half missing means a torn write; treat as corrupt
        _ => Err("partial session record"),
    }
}

fn discard_persisted_session(store: &SharedStore) {
    let mut store = store.borrow_mut();
    if let Err(err) = store.delete(keys::AUTH_TOKEN) {
        warn!(error = %err, "failed to remove stale auth token");
    }
    if let Err(err) = store.delete(keys::CURRENT_USER) {
        warn!(error = %err, "failed to remove stale principal");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PersistentStore, shared};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn customer() -> Principal {
        Principal {
            id: UserId::new(7),
            display_name: "asha".to_owned(),
            email: Email::parse("asha@example.com").unwrap(),
            role: Role::Customer,
            email_verified: true,
            profile_completed: false,
            token: AuthToken::parse("tok-7").unwrap(),
        }
    }

    #[test]
    fn test_starts_logged_out() {
        let (session, outcome) = SessionHolder::load(shared(MemoryStore::new()));
        assert_eq!(outcome, SessionRehydration::LoggedOut);
        assert!(!session.is_authenticated());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_set_principal_persists_both_keys() {
        let store = shared(MemoryStore::new());
        let (mut session, _) = SessionHolder::load(Rc::clone(&store));
        session.set_principal(customer()).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(
            store.borrow().get(keys::AUTH_TOKEN).unwrap().as_deref(),
            Some(&b"tok-7"[..])
        );
        assert!(store.borrow().get(keys::CURRENT_USER).unwrap().is_some());
    }

    #[test]
    fn test_rehydration_adopts_persisted_session() {
        let store = shared(MemoryStore::new());
        {
            let (mut session, _) = SessionHolder::load(Rc::clone(&store));
            session.set_principal(customer()).unwrap();
        }

        let (session, outcome) = SessionHolder::load(store);
        assert_eq!(outcome, SessionRehydration::Restored);
        assert_eq!(session.current(), Some(&customer()));
    }

    #[test]
    fn test_rehydration_with_corrupt_principal_recovers() {
        let store = shared(MemoryStore::new());
        store.borrow_mut().set(keys::AUTH_TOKEN, b"tok").unwrap();
        store
            .borrow_mut()
            .set(keys::CURRENT_USER, b"not-json")
            .unwrap();

        let (session, outcome) = SessionHolder::load(Rc::clone(&store));
        assert_eq!(outcome, SessionRehydration::Recovered);
        assert!(!session.is_authenticated());
        // both records were cleaned up
        assert!(store.borrow().get(keys::AUTH_TOKEN).unwrap().is_none());
        assert!(store.borrow().get(keys::CURRENT_USER).unwrap().is_none());
    }

    #[test]
    fn test_rehydration_with_token_but_no_user_recovers() {
        let store = shared(MemoryStore::new());
        store.borrow_mut().set(keys::AUTH_TOKEN, b"tok").unwrap();

        let (_, outcome) = SessionHolder::load(store);
        assert_eq!(outcome, SessionRehydration::Recovered);
    }

    #[test]
    fn test_clear_removes_persisted_records_and_publishes() {
        let store = shared(MemoryStore::new());
        let (mut session, _) = SessionHolder::load(Rc::clone(&store));
        session.set_principal(customer()).unwrap();

        let flags: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let flags = Rc::clone(&flags);
            session.subscribe(move |update| flags.borrow_mut().push(update.authenticated));
        }

        session.clear().unwrap();
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert!(store.borrow().get(keys::AUTH_TOKEN).unwrap().is_none());
    }

    #[test]
    fn test_subscriber_receives_principal_changes() {
        let (mut session, _) = SessionHolder::load(shared(MemoryStore::new()));
        let names: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let names = Rc::clone(&names);
            session.subscribe(move |update| {
                names
                    .borrow_mut()
                    .push(update.principal.as_ref().map(|p| p.display_name.clone()));
            });
        }

        session.set_principal(customer()).unwrap();
        assert_eq!(*names.borrow(), vec![None, Some("asha".to_owned())]);
    }
}
