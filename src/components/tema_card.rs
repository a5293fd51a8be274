//! Card for a single tema with edit and delete links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Tema;

#[component]
pub fn TemaCard(tema: Tema) -> impl IntoView {
    let id = tema.id.unwrap_or_default();
    view! {
        <div class="card">
            <header class="card__header">"Tema"</header>
            <p class="card__body">{tema.descricao}</p>
            <div class="card__actions">
                <A href=format!("/editartema/{id}") attr:class="btn btn--primary">"Editar"</A>
                <A href=format!("/deletartema/{id}") attr:class="btn btn--danger">"Deletar"</A>
            </div>
        </div>
    }
}
