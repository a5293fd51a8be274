//! Create/edit form for postagens, used by its own route and by the home
//! page modal.

#[cfg(test)]
#[path = "postagem_form_test.rs"]
mod postagem_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Postagem, Tema};
use crate::state::command;
use crate::state::form_flow::FormFlow;
use crate::state::list_flow::ListFlow;
use crate::util::auth::install_session_guard;
use crate::util::commands::CommandRunner;

#[component]
pub fn PostagemForm(#[prop(optional_no_strip)] id: Option<String>) -> impl IntoView {
    let runner = CommandRunner::new(use_navigate());
    let session = runner.session();
    let flow = RwSignal::new(FormFlow::<Postagem>::new());
    let temas = RwSignal::new(ListFlow::<Tema>::default());

    let titulo = RwSignal::new(String::new());
    let texto = RwSignal::new(String::new());
    let tema_id = RwSignal::new(None::<i64>);

    let temas_runner = runner.clone();
    install_session_guard(runner.clone(), flow, move |f, token| {
        if command::has_token(token) {
            temas_runner.drive(temas, |t| t.mount(token));
        }
        f.mount(token, id.as_deref())
    });

    // Prefill the inputs once the edited postagem arrives.
    Effect::new(move || {
        let draft = flow.with(|f| f.draft().clone());
        titulo.set(draft.titulo);
        texto.set(draft.texto);
        tema_id.set(draft.tema.and_then(|t| t.id));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let tema = tema_id
            .get_untracked()
            .and_then(|id| temas.with_untracked(|t| t.find(id).cloned()));
        let draft = Postagem {
            id: flow.with_untracked(|f| f.draft().id),
            titulo: titulo.get_untracked(),
            texto: texto.get_untracked(),
            data: None,
            tema,
            usuario: None,
        };
        let usuario = session.with_untracked(|s| s.usuario.clone());
        runner.drive(flow, |f| f.submit(draft, &usuario));
    };

    view! {
        <form class="form" on:submit=on_submit>
            <h1 class="form__title">
                {move || if flow.with(|f| f.is_edit()) { "Editar postagem" } else { "Cadastrar postagem" }}
            </h1>
            <label class="form__label">
                "Título da postagem"
                <input
                    class="form__input"
                    type="text"
                    placeholder="Título"
                    required
                    prop:value=move || titulo.get()
                    on:input=move |ev| titulo.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Texto da postagem"
                <textarea
                    class="form__input form__input--text"
                    placeholder="Texto"
                    required
                    prop:value=move || texto.get()
                    on:input=move |ev| texto.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="form__label">
                "Tema da postagem"
                <select
                    class="form__input"
                    prop:value=move || tema_id.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| tema_id.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="" disabled>"Selecione um tema"</option>
                    <For
                        each=move || temas.with(|t| t.items.clone())
                        key=|tema| tema.id
                        children=|tema| {
                            let value = tema.id.map(|id| id.to_string()).unwrap_or_default();
                            view! { <option value=value>{tema.descricao}</option> }
                        }
                    />
                </select>
            </label>
            <button
                class="btn btn--primary form__submit"
                type="submit"
                disabled=move || flow.with(|f| f.is_busy()) || temas.with(|t| t.loading)
            >
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
    }
}
