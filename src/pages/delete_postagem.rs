//! `/deletarpostagem/:id` confirmation page.

use leptos::prelude::*;

use crate::components::delete_confirm::{DeleteLabels, delete_confirm_view};
use crate::net::types::Postagem;

#[component]
pub fn DeletePostagemPage() -> impl IntoView {
    delete_confirm_view::<Postagem>(DeleteLabels {
        title: "Deletar postagem",
        question: "Você tem certeza de que deseja apagar a postagem a seguir?",
        header: "Postagem",
    })
}
