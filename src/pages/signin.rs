//! Sign-in page: username + password exchanged for a bearer token.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::context::SessionContext;
use crate::state::session::Session;

const MISSING_FIELDS: &str = "Ingresa usuario y contraseña.";

/// Trim the username and require both fields.
fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.session;
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (e.g. back button after login): go home.
    let home_path = ctx.config().home_path.clone();
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.with(Session::is_authenticated) {
            navigate_home(&home_path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verificando...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match ctx.login(&credentials).await {
                    Ok(user) => {
                        log::info!("signed in as {} ({})", user.display_name, user.role.as_str());
                        password.set(String::new());
                        info.set(String::new());
                        navigate(&ctx.config().home_path, NavigateOptions::default());
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Torneo Formativo"</h1>
                <p class="signin-card__subtitle">"Consola de administración"</p>
                <form class="signin-form" on:submit=on_submit>
                    <input
                        class="signin-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="signin-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="signin-button" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
