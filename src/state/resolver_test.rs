use super::*;
use std::sync::Mutex;

use futures::executor::block_on;

use crate::net::types::{AuthEnvelope, Role, UserIdentity};
use crate::state::session::Resolution;
use crate::state::token_store::MemoryTokenStore;
use crate::util::guard::{AccessRequirement, Decision, decide};

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeApi {
    identity: Option<Result<AuthEnvelope, AuthError>>,
    login: Option<Result<AuthEnvelope, AuthError>>,
    logout_fails: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AuthApi for FakeApi {
    async fn fetch_identity(&self, token: &str) -> Result<AuthEnvelope, AuthError> {
        self.record(format!("me:{token}"));
        self.identity.clone().unwrap_or(Err(AuthError::Unavailable))
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthEnvelope, AuthError> {
        self.record(format!("login:{}", credentials.username));
        self.login.clone().unwrap_or(Err(AuthError::Unavailable))
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.record(format!("logout:{token}"));
        if self.logout_fails {
            Err(AuthError::Network("offline".to_owned()))
        } else {
            Ok(())
        }
    }
}

fn user(role: Role, owned: Option<&str>) -> UserIdentity {
    UserIdentity {
        id: "u-1".to_owned(),
        display_name: "Coordinación".to_owned(),
        role,
        owned_resource_id: owned.map(str::to_owned),
    }
}

fn envelope(token: &str, user: UserIdentity) -> AuthEnvelope {
    AuthEnvelope { token: token.to_owned(), token_type: Some("Bearer".to_owned()), expires_in: Some(3600), user }
}

fn creds() -> Credentials {
    Credentials { username: "academia.andes".to_owned(), password: "secreto".to_owned() }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_without_token_skips_network() {
    let api = FakeApi::default();
    let store = MemoryTokenStore::new();

    let session = block_on(resolve(&api, &store));

    assert_eq!(session.resolution(), Resolution::Unresolved);
    assert!(api.calls().is_empty());
}

#[test]
fn resolve_with_valid_token_yields_user() {
    let api = FakeApi { identity: Some(Ok(envelope("tok", user(Role::Admin, None)))), ..FakeApi::default() };
    let store = MemoryTokenStore::with_token("tok");

    let session = block_on(resolve(&api, &store));

    assert_eq!(session.resolution(), Resolution::Resolved);
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.role(), Some(&Role::Admin));
    assert_eq!(api.calls(), vec!["me:tok".to_owned()]);
    assert_eq!(store.get().as_deref(), Some("tok"));
}

#[test]
fn resolve_failure_discards_token_for_every_error_kind() {
    let failures = [
        AuthError::Rejected { status: 401, message: None },
        AuthError::Rejected { status: 500, message: Some("boom".to_owned()) },
        AuthError::Network("offline".to_owned()),
        AuthError::Decode("bad json".to_owned()),
    ];
    for failure in failures {
        let api = FakeApi { identity: Some(Err(failure.clone())), ..FakeApi::default() };
        let store = MemoryTokenStore::with_token("stale");

        let session = block_on(resolve(&api, &store));

        assert_eq!(session.resolution(), Resolution::Unresolved, "{failure}");
        assert_eq!(session.user(), None);
        assert_eq!(store.get(), None, "{failure}");
    }
}

#[test]
fn resolve_adopts_refreshed_token() {
    let api = FakeApi { identity: Some(Ok(envelope("fresh", user(Role::Admin, None)))), ..FakeApi::default() };
    let store = MemoryTokenStore::with_token("old");

    let session = block_on(resolve(&api, &store));

    assert_eq!(session.token(), Some("fresh"));
    assert_eq!(store.get().as_deref(), Some("fresh"));
}

#[test]
fn resolve_keeps_stored_token_when_envelope_token_blank() {
    let api = FakeApi { identity: Some(Ok(envelope("", user(Role::Admin, None)))), ..FakeApi::default() };
    let store = MemoryTokenStore::with_token("kept");

    let session = block_on(resolve(&api, &store));

    assert_eq!(session.token(), Some("kept"));
    assert_eq!(store.get().as_deref(), Some("kept"));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_populates_store_and_session() {
    let api = FakeApi {
        login: Some(Ok(envelope("new-tok", user(Role::Academia, Some("A1"))))),
        ..FakeApi::default()
    };
    let store = MemoryTokenStore::new();

    let session = block_on(login(&api, &store, &creds())).unwrap();

    assert_eq!(store.get().as_deref(), Some("new-tok"));
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.display_name.as_str()), Some("Coordinación"));
}

#[test]
fn login_failure_clears_store_and_propagates() {
    let rejected = AuthError::Rejected { status: 401, message: Some("Credenciales inválidas".to_owned()) };
    let api = FakeApi { login: Some(Err(rejected.clone())), ..FakeApi::default() };
    let store = MemoryTokenStore::with_token("previous");

    let result = block_on(login(&api, &store, &creds()));

    assert_eq!(result, Err(rejected));
    assert_eq!(store.get(), None);
}

#[test]
fn login_without_token_is_decode_error() {
    let api = FakeApi { login: Some(Ok(envelope(" ", user(Role::Admin, None)))), ..FakeApi::default() };
    let store = MemoryTokenStore::new();

    let result = block_on(login(&api, &store, &creds()));

    assert!(matches!(result, Err(AuthError::Decode(_))));
    assert_eq!(store.get(), None);
}

#[test]
fn login_reflects_new_role_in_guard_immediately() {
    let admin_only = AccessRequirement::roles([Role::Admin]);
    let academy_scoped = AccessRequirement::roles([Role::Admin, Role::Academia]).owning();
    let before = Session::unresolved();
    assert_eq!(decide(&before, &academy_scoped, Some("A1")), Decision::RedirectToSignIn);

    let api = FakeApi {
        login: Some(Ok(envelope("tok", user(Role::Academia, Some("A1"))))),
        ..FakeApi::default()
    };
    let store = MemoryTokenStore::new();
    let after = block_on(login(&api, &store, &creds())).unwrap();

    assert_eq!(decide(&after, &academy_scoped, Some("A1")), Decision::Allow);
    assert_eq!(decide(&after, &admin_only, None), Decision::Deny);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_store_and_hands_back_token() {
    let store = MemoryTokenStore::with_token("tok");

    let (session, token) = logout(&store);

    assert_eq!(session.resolution(), Resolution::Unresolved);
    assert_eq!(token.as_deref(), Some("tok"));
    assert_eq!(store.get(), None);
}

#[test]
fn logout_when_already_signed_out_is_harmless() {
    let store = MemoryTokenStore::new();

    let first = logout(&store);
    let second = logout(&store);

    assert_eq!(first, (Session::unresolved(), None));
    assert_eq!(second, (Session::unresolved(), None));
}

#[test]
fn notify_logout_sends_token_to_backend() {
    let api = FakeApi::default();

    block_on(notify_logout(&api, "tok"));

    assert_eq!(api.calls(), vec!["logout:tok".to_owned()]);
}

#[test]
fn notify_logout_failure_is_not_an_error() {
    let api = FakeApi { logout_fails: true, ..FakeApi::default() };

    block_on(notify_logout(&api, "tok"));

    assert_eq!(api.calls(), vec!["logout:tok".to_owned()]);
}
