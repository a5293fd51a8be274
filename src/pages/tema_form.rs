//! `/cadastrartema` and `/editartema/:id` pages.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Tema;
use crate::state::form_flow::FormFlow;
use crate::util::auth::install_session_guard;
use crate::util::commands::CommandRunner;

#[component]
pub fn TemaFormPage() -> impl IntoView {
    let params = use_params_map();
    let runner = CommandRunner::new(use_navigate());
    let session = runner.session();
    let flow = RwSignal::new(FormFlow::<Tema>::new());
    let descricao = RwSignal::new(String::new());

    install_session_guard(runner.clone(), flow, move |f, token| {
        let id = params.with_untracked(|p| p.get("id"));
        f.mount(token, id.as_deref())
    });

    Effect::new(move || {
        descricao.set(flow.with(|f| f.draft().descricao.clone()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = Tema { id: flow.with_untracked(|f| f.draft().id), descricao: descricao.get_untracked() };
        let usuario = session.with_untracked(|s| s.usuario.clone());
        runner.drive(flow, |f| f.submit(draft, &usuario));
    };

    view! {
        <div class="form-page">
            <form class="form" on:submit=on_submit>
                <h1 class="form__title">
                    {move || if flow.with(|f| f.is_edit()) { "Editar tema" } else { "Cadastrar tema" }}
                </h1>
                <label class="form__label">
                    "Descrição do tema"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Descreva aqui seu tema"
                        prop:value=move || descricao.get()
                        on:input=move |ev| descricao.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary form__submit" type="submit" disabled=move || flow.with(|f| f.is_busy())>
                    {move || {
                        if flow.with(|f| f.is_busy()) {
                            "Aguarde..."
                        } else if flow.with(|f| f.is_edit()) {
                            "Atualizar"
                        } else {
                            "Cadastrar"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
