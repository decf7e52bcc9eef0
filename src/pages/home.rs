//! Authenticated landing page.
//!
//! Shows who is signed in and, for academy accounts, links into the academy
//! they are scoped to. Entity listings hang off these links.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserIdentity};
use crate::state::context::SessionContext;

/// Landing link and label for a principal; none for roles without an academy.
fn academy_link(user: &UserIdentity) -> Option<(String, &'static str)> {
    match (&user.role, &user.owned_resource_id) {
        (Role::Admin, _) => Some(("/admin/academias".to_owned(), "Ver academias")),
        (_, Some(academy_id)) => Some((format!("/academias/{academy_id}"), "Ir a mi academia")),
        (_, None) => None,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.session;

    let display_name = move || session.with(|s| s.user().map(|u| u.display_name.clone()).unwrap_or_default());
    let role = move || session.with(|s| s.role().map(|r| r.as_str().to_owned()).unwrap_or_default());
    let link = move || session.with(|s| s.user().and_then(academy_link));

    let on_logout = move |_| ctx.logout();

    view! {
        <section class="home-page">
            <header class="home-page__header">
                <h1>{display_name}</h1>
                <span class="role-badge">{role}</span>
                <button class="logout-button" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </header>
            {move || link().map(|(href, label)| view! { <a class="home-page__link" href=href>{label}</a> })}
        </section>
    }
}
