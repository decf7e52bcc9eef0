use super::*;
use crate::net::types::UserIdentity;
use crate::util::guard::{Decision, decide};

fn academia(owned: &str) -> Session {
    Session::resolved(
        "tok",
        UserIdentity {
            id: "u-2".to_owned(),
            display_name: "Academia".to_owned(),
            role: Role::Academia,
            owned_resource_id: Some(owned.to_owned()),
        },
    )
}

#[test]
fn academy_routes_require_ownership() {
    let requirement = academy_requirement();
    assert!(requirement.requires_ownership);
    assert!(requirement.admits_role(&Role::Admin));
    assert!(requirement.admits_role(&Role::Academia));
}

#[test]
fn academy_account_cannot_open_another_academy() {
    assert_eq!(decide(&academia("A1"), &academy_requirement(), Some("A2")), Decision::Deny);
}

#[test]
fn admin_directory_is_admin_only() {
    assert_eq!(decide(&academia("A1"), &admin_requirement(), None), Decision::Deny);
}
