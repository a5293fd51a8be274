//! `/cadastrarpostagem` and `/editarpostagem/:id` pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::postagem_form::PostagemForm;

#[component]
pub fn PostagemFormPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));
    view! {
        <div class="form-page">
            <PostagemForm id=id/>
        </div>
    }
}
