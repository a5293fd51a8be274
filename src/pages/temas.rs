//! Tema list page.

use leptos::prelude::*;

use crate::components::tema_list::TemaList;

#[component]
pub fn TemasPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <h1 class="list-page__title">"Temas"</h1>
            <TemaList/>
        </div>
    }
}
