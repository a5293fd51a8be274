//! Delete-confirmation panel shared by the tema and postagem delete pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the entity id from the `:id` route segment and drives a
//! [`DeleteFlow`]. The "Sim" button is disabled, and shows a spinner, for as
//! long as the flow is loading.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::delete_flow::DeleteFlow;
use crate::state::resource::Resource;
use crate::util::auth::install_session_guard;
use crate::util::commands::CommandRunner;

/// Static text for one entity's delete page.
#[derive(Clone, Copy, Debug)]
pub struct DeleteLabels {
    pub title: &'static str,
    pub question: &'static str,
    pub header: &'static str,
}

pub fn delete_confirm_view<R: Resource>(labels: DeleteLabels) -> impl IntoView {
    let params = use_params_map();
    let runner = CommandRunner::new(use_navigate());
    let flow = RwSignal::new(DeleteFlow::<R>::new());

    install_session_guard(runner.clone(), flow, move |f, token| {
        let id = params.with_untracked(|p| p.get("id"));
        f.mount(token, id.as_deref())
    });

    let on_cancel = {
        let runner = runner.clone();
        move |_| runner.run(flow, flow.with_untracked(|f| f.cancel()))
    };
    let on_confirm = move |_| runner.drive(flow, |f| f.confirm());

    view! {
        <div class="delete-page">
            <h1 class="delete-page__title">{labels.title}</h1>
            <p class="delete-page__question">{labels.question}</p>
            <div class="delete-card">
                <header class="delete-card__header">{labels.header}</header>
                <p class="delete-card__body">{move || flow.with(|f| f.display_text())}</p>
                <div class="delete-card__actions">
                    <button class="btn btn--danger" on:click=on_cancel>
                        "Não"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=on_confirm
                        disabled=move || !flow.with(|f| f.confirm_enabled())
                    >
                        <Show
                            when=move || flow.with(|f| f.is_loading())
                            fallback=|| view! { <span>"Sim"</span> }
                        >
                            <span class="spinner" role="status" aria-label="Carregando"></span>
                        </Show>
                    </button>
                </div>
            </div>
        </div>
    }
}
