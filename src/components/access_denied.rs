//! Static view rendered for a `Deny` decision.

use leptos::prelude::*;

#[component]
pub fn AccessDenied(#[prop(into)] home_path: String) -> impl IntoView {
    view! {
        <section class="access-denied">
            <h1>"Acceso denegado"</h1>
            <p>"No tienes permisos para ver esta sección."</p>
            <a class="access-denied__link" href=home_path>
                "Volver al inicio"
            </a>
        </section>
    }
}
