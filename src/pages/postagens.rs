//! Postagem list page.

use leptos::prelude::*;

use crate::components::postagem_list::PostagemList;

#[component]
pub fn PostagensPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <h1 class="list-page__title">"Postagens"</h1>
            <PostagemList/>
        </div>
    }
}
