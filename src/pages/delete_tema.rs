//! `/deletartema/:id` confirmation page.

use leptos::prelude::*;

use crate::components::delete_confirm::{DeleteLabels, delete_confirm_view};
use crate::net::types::Tema;

#[component]
pub fn DeleteTemaPage() -> impl IntoView {
    delete_confirm_view::<Tema>(DeleteLabels {
        title: "Deletar tema",
        question: "Você tem certeza de que deseja apagar o tema a seguir?",
        header: "Tema",
    })
}
