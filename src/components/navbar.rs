//! Top navigation bar with the logout action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::command;
use crate::util::commands::CommandRunner;

#[component]
pub fn Navbar() -> impl IntoView {
    let runner = CommandRunner::new(use_navigate());
    let session = runner.session();

    let on_logout = move |_| runner.run_local(command::logout());

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            <nav class="navbar">
                <A href="/home" attr:class="navbar__brand">"Blog Pessoal"</A>
                <span class="navbar__spacer"></span>
                <A href="/postagens" attr:class="navbar__link">"Postagens"</A>
                <A href="/temas" attr:class="navbar__link">"Temas"</A>
                <A href="/cadastrartema" attr:class="navbar__link">"Cadastrar tema"</A>
                <span class="navbar__user">{move || session.with(|s| s.usuario.nome.clone())}</span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>"Sair"</button>
            </nav>
        </Show>
    }
}
