//! Login page (`/` and `/login`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::command::HOME_ROUTE;
use crate::state::login_flow::LoginFlow;
use crate::util::commands::CommandRunner;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let runner = CommandRunner::new(navigate.clone());
    let session = runner.session();
    let flow = RwSignal::new(LoginFlow::default());
    let usuario = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());

    // Already logged in: skip the form.
    Effect::new(move || {
        if session.with(|s| s.is_authenticated()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (u, s) = (usuario.get_untracked(), senha.get_untracked());
        runner.drive(flow, |f| f.submit(&u, &s));
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2 class="login-card__title">"Entrar"</h2>
                <label class="login-card__label">
                    "Usuário"
                    <input
                        class="login-input"
                        type="email"
                        placeholder="usuario@email.com"
                        prop:value=move || usuario.get()
                        on:input=move |ev| usuario.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-card__label">
                    "Senha"
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                </label>
                <button class="login-button" type="submit" disabled=move || flow.with(|f| f.busy)>
                    {move || if flow.with(|f| f.busy) { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
