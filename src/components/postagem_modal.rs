//! Modal wrapper around [`PostagemForm`] for the home page.

use leptos::prelude::*;

use crate::components::postagem_form::PostagemForm;

#[component]
pub fn PostagemModal() -> impl IntoView {
    let open = RwSignal::new(false);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            open.set(false);
        }
    };

    view! {
        <button class="btn btn--outline" on:click=move |_| open.set(true)>
            "Nova postagem"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div
                    class="dialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <PostagemForm/>
                </div>
            </div>
        </Show>
    }
}
