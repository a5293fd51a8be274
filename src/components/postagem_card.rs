//! Card for a single postagem with author, tema and actions.

#[cfg(test)]
#[path = "postagem_card_test.rs"]
mod postagem_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Postagem;

/// Render an API timestamp (`YYYY-MM-DDTHH:MM[:SS...]`) as
/// `DD/MM/YYYY às HH:MM`. Anything else is returned unchanged.
pub fn format_data(raw: &str) -> String {
    let (date, time) = raw.split_once('T').unwrap_or((raw, ""));
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let all_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(year, 4) && all_digits(month, 2) && all_digits(day, 2)) {
        return raw.to_owned();
    }
    match time.get(..5) {
        Some(hm) if hm.as_bytes()[2] == b':' => format!("{day}/{month}/{year} às {hm}"),
        _ => format!("{day}/{month}/{year}"),
    }
}

#[component]
pub fn PostagemCard(postagem: Postagem) -> impl IntoView {
    let id = postagem.id.unwrap_or_default();
    let autor = postagem.usuario.as_ref().map(|u| u.nome.clone()).unwrap_or_default();
    let foto = postagem.usuario.as_ref().map(|u| u.foto.clone()).filter(|f| !f.is_empty());
    let tema = postagem.tema.as_ref().map(|t| t.descricao.clone()).unwrap_or_default();
    let data = postagem.data.as_deref().map(format_data).unwrap_or_default();

    view! {
        <div class="card card--postagem">
            <header class="card__author">
                {foto.map(|src| view! { <img class="card__avatar" src=src alt="Foto do autor"/> })}
                <span class="card__author-name">{autor}</span>
            </header>
            <div class="card__content">
                <h4 class="card__title">{postagem.titulo}</h4>
                <p class="card__text">{postagem.texto}</p>
                <p class="card__meta">"Tema: " {tema}</p>
                <p class="card__meta">"Data: " {data}</p>
            </div>
            <div class="card__actions">
                <A href=format!("/editarpostagem/{id}") attr:class="btn btn--primary">"Editar"</A>
                <A href=format!("/deletarpostagem/{id}") attr:class="btn btn--danger">"Deletar"</A>
            </div>
        </div>
    }
}
