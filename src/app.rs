//! Root application component with routing and the session context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::components::session_watchdog::SessionWatchdog;
use crate::config::ConsoleConfig;
use crate::net::types::Role;
use crate::pages::academy::{AcademyDirectoryPage, AcademyPage, AcademySection};
use crate::pages::home::HomePage;
use crate::pages::signin::SignInPage;
use crate::state::context::SessionContext;
use crate::state::session::Session;
use crate::util::guard::AccessRequirement;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Academy pages: admins, or the academy account that owns the academy.
pub fn academy_requirement() -> AccessRequirement {
    AccessRequirement::roles([Role::Admin, Role::Academia]).owning()
}

pub fn admin_requirement() -> AccessRequirement {
    AccessRequirement::roles([Role::Admin])
}

fn load_config() -> ConsoleConfig {
    ConsoleConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; using default console config");
        ConsoleConfig::default()
    })
}

/// Root application component.
///
/// Builds the single `SessionContext`, starts boot-time resolution in the
/// browser, and declares the access requirement of every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = SessionContext::new(load_config());
    provide_context(ctx.clone());

    #[cfg(feature = "hydrate")]
    {
        let boot = ctx.clone();
        leptos::task::spawn_local(async move { boot.resolve().await });
    }

    let session = ctx.session;

    view! {
        <Stylesheet id="leptos" href="/pkg/torneo-console.css"/>
        <Title text="Torneo Formativo"/>

        <Router>
            <Show when=move || session.with(Session::is_authenticated)>
                <SessionWatchdog/>
            </Show>
            <main>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! {
                            <Protected requirement=AccessRequirement::authenticated()>
                                <HomePage/>
                            </Protected>
                        }
                    />
                    <Route
                        path=(StaticSegment("academias"), ParamSegment("id"))
                        view=|| view! {
                            <Protected requirement=academy_requirement()>
                                <AcademyPage section=AcademySection::Overview/>
                            </Protected>
                        }
                    />
                    <Route
                        path=(StaticSegment("academias"), ParamSegment("academiaId"), StaticSegment("equipos"))
                        view=|| view! {
                            <Protected requirement=academy_requirement()>
                                <AcademyPage section=AcademySection::Teams/>
                            </Protected>
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("academias"))
                        view=|| view! {
                            <Protected requirement=admin_requirement()>
                                <AcademyDirectoryPage/>
                            </Protected>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
