//! Academy-scoped route shells.
//!
//! Access is decided by `Protected` before these render; the pages only read
//! the same route parameters the guard used so the heading matches the
//! academy that was authorized.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::guard::requested_resource_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcademySection {
    Overview,
    Teams,
}

impl AcademySection {
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Academia",
            Self::Teams => "Equipos de la academia",
        }
    }
}

#[component]
pub fn AcademyPage(section: AcademySection) -> impl IntoView {
    let params = use_params_map();
    let academy_id = move || params.with(|p| requested_resource_id(|name| p.get(name)).unwrap_or_default());

    view! {
        <section class="academy-page">
            <h1>{section.title()}" #"{academy_id}</h1>
            <a class="academy-page__back" href="/">
                "Volver al inicio"
            </a>
        </section>
    }
}

/// Administrator-only academy directory.
#[component]
pub fn AcademyDirectoryPage() -> impl IntoView {
    view! {
        <section class="academy-directory">
            <h1>"Academias inscritas"</h1>
            <p>"Selecciona una academia para revisar sus equipos, delegados y jugadores."</p>
        </section>
    }
}
