//! Home page: welcome hero, new-post modal and the post list.

use leptos::prelude::*;

use crate::components::postagem_list::PostagemList;
use crate::components::postagem_modal::PostagemModal;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <div class="home-page__welcome">
                    <h2 class="home-page__title">"Seja bem vindo!"</h2>
                    <p class="home-page__subtitle">"Sinta-se livre para se expressar"</p>
                    <div class="home-page__actions">
                        <PostagemModal/>
                    </div>
                </div>
                <div class="home-page__image">
                    <img src="/fotohome.png" alt="Imagem Página Home"/>
                </div>
            </section>
            <PostagemList/>
        </div>
    }
}
