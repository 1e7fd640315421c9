//! Session login, logout, and recovery against the real file store.

use std::fs;

use digital_cafe_client::session::{Principal, SessionHolder, SessionRehydration};
use digital_cafe_client::storage::{JsonFileStore, PersistentStore, keys, shared};
use digital_cafe_core::{AuthToken, Email, Role, UserId};
use digital_cafe_integration_tests::support::temp_store_path;

fn owner() -> Principal {
    Principal {
        id: UserId::new(21),
        display_name: "maria".to_owned(),
        email: Email::parse("maria@example.com").expect("email"),
        role: Role::CafeOwner,
        email_verified: true,
        profile_completed: true,
        token: AuthToken::parse("jwt-21").expect("token"),
    }
}

#[test]
fn login_survives_restart() {
    let path = temp_store_path("session-restart");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        let (mut session, outcome) = SessionHolder::load(store);
        assert_eq!(outcome, SessionRehydration::LoggedOut);
        session.set_principal(owner()).expect("login");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (session, outcome) = SessionHolder::load(store);
    assert_eq!(outcome, SessionRehydration::Restored);
    let principal = session.current().expect("principal");
    assert_eq!(principal.id, UserId::new(21));
    assert_eq!(principal.role, Role::CafeOwner);
    assert_eq!(principal.token.expose(), "jwt-21");

    fs::remove_file(&path).ok();
}

#[test]
fn logout_survives_restart() {
    let path = temp_store_path("session-logout");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        let (mut session, _) = SessionHolder::load(store);
        session.set_principal(owner()).expect("login");
        session.clear().expect("logout");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (session, outcome) = SessionHolder::load(store);
    assert_eq!(outcome, SessionRehydration::LoggedOut);
    assert!(!session.is_authenticated());

    fs::remove_file(&path).ok();
}

#[test]
fn torn_session_record_recovers_to_logged_out() {
    let path = temp_store_path("session-torn");

    {
        let store = shared(JsonFileStore::open(&path).expect("open store"));
        // token without a principal: half of a login write
        store
            .borrow_mut()
            .set(keys::AUTH_TOKEN, b"jwt-orphan")
            .expect("plant token");
    }

    let store = shared(JsonFileStore::open(&path).expect("reopen store"));
    let (session, outcome) = SessionHolder::load(store);
    assert_eq!(outcome, SessionRehydration::Recovered);
    assert!(!session.is_authenticated());

    // a further restart finds a clean logged-out state
    let store = shared(JsonFileStore::open(&path).expect("reopen again"));
    let (_, outcome) = SessionHolder::load(store);
    assert_eq!(outcome, SessionRehydration::LoggedOut);

    fs::remove_file(&path).ok();
}
