//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::config::ApiConfig;
use crate::pages::{
    delete_postagem::DeletePostagemPage, delete_tema::DeleteTemaPage, home::HomePage, login::LoginPage,
    postagem_form::PostagemFormPage, postagens::PostagensPage, tema_form::TemaFormPage, temas::TemasPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API config and session contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    let session = RwSignal::new(SessionState::pending());
    provide_context(session);
    // localStorage is browser-only; reading it after mount keeps hydration
    // in step with the server render.
    Effect::new(move || session.set(SessionState::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/blogpessoal.css"/>
        <Title text="Blog Pessoal"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("temas") view=TemasPage/>
                    <Route path=StaticSegment("cadastrartema") view=TemaFormPage/>
                    <Route path=(StaticSegment("editartema"), ParamSegment("id")) view=TemaFormPage/>
                    <Route path=(StaticSegment("deletartema"), ParamSegment("id")) view=DeleteTemaPage/>
                    <Route path=StaticSegment("postagens") view=PostagensPage/>
                    <Route path=StaticSegment("cadastrarpostagem") view=PostagemFormPage/>
                    <Route path=(StaticSegment("editarpostagem"), ParamSegment("id")) view=PostagemFormPage/>
                    <Route path=(StaticSegment("deletarpostagem"), ParamSegment("id")) view=DeletePostagemPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
