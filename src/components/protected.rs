//! Route wrapper that enacts the access decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::guard::decide` stays pure; this component owns the side effects:
//! a loading placeholder while the session resolves, a client-side redirect
//! to sign-in (the original target is not preserved), the denial view, or
//! the wrapped route.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::components::access_denied::AccessDenied;
use crate::state::context::SessionContext;
use crate::util::guard::{AccessRequirement, Decision, decide, requested_resource_id, should_redirect};

/// Gate `children` behind `requirement`, re-deciding on session or route changes.
#[component]
pub fn Protected(requirement: AccessRequirement, children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.session;
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = params.with(|p| requested_resource_id(|name| p.get(name)));
        session.with(|s| decide(s, &requirement, requested.as_deref()))
    });

    let signin_path = ctx.config().signin_path.clone();
    Effect::new(move || {
        if should_redirect(decision.get(), &location.pathname.get(), &signin_path) {
            navigate(&signin_path, NavigateOptions::default());
        }
    });

    let home_path = ctx.config().home_path.clone();
    move || match decision.get() {
        Decision::Loading => view! {
            <div class="session-loading" aria-busy="true">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
            </div>
        }
        .into_any(),
        Decision::RedirectToSignIn => ().into_any(),
        Decision::Deny => view! { <AccessDenied home_path=home_path.clone()/> }.into_any(),
        Decision::Allow => children().into_any(),
    }
}
