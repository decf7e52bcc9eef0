use super::*;

fn academia_user() -> UserIdentity {
    UserIdentity {
        id: "u-9".to_owned(),
        display_name: "Academia Los Andes".to_owned(),
        role: Role::Academia,
        owned_resource_id: Some("A1".to_owned()),
    }
}

#[test]
fn session_starts_pending_and_empty() {
    let session = Session::pending();
    assert_eq!(session.resolution(), Resolution::Pending);
    assert!(session.is_pending());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
}

#[test]
fn resolved_session_carries_token_and_user() {
    let session = Session::resolved("tok", academia_user());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.role(), Some(&Role::Academia));
}

#[test]
fn unresolved_session_drops_token_and_user_together() {
    let session = Session::unresolved();
    assert_eq!(session.resolution(), Resolution::Unresolved);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(session.role(), None);
}
