//! Grid of temas loaded from `GET /temas`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::tema_card::TemaCard;
use crate::net::types::Tema;
use crate::state::list_flow::ListFlow;
use crate::util::auth::install_session_guard;
use crate::util::commands::CommandRunner;

#[component]
pub fn TemaList() -> impl IntoView {
    let runner = CommandRunner::new(use_navigate());
    let flow = RwSignal::new(ListFlow::<Tema>::default());
    install_session_guard(runner, flow, |f, token| f.mount(token));

    view! {
        <div class="list">
            <Show when=move || flow.with(|f| f.error.is_some())>
                <p class="list__error">{move || flow.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !flow.with(|f| f.loading)
                fallback=|| view! { <p class="list__loading">"Carregando temas..."</p> }
            >
                <Show when=move || flow.with(|f| f.items.is_empty() && f.error.is_none())>
                    <p class="list__empty">"Nenhum tema cadastrado."</p>
                </Show>
                <div class="list__grid">
                    <For
                        each=move || flow.with(|f| f.items.clone())
                        key=|tema| tema.id
                        children=|tema| view! { <TemaCard tema=tema/> }
                    />
                </div>
            </Show>
        </div>
    }
}
