//! Site footer, shown only to logged-in users.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::browser;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "https://www.linkedin.com/in/eduarda-valmor/"),
    ("GitHub", "https://github.com/dudavalmor"),
    ("Instagram", "https://www.instagram.com/dudavalmor/"),
    ("Facebook", "https://www.facebook.com/eduarda.serranobuenovalmor/"),
];

pub fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("Blog Pessoal | Eduarda Valmor | Copyright: {year}"),
        None => "Blog Pessoal | Eduarda Valmor".to_owned(),
    }
}

/// Rendered only after the session is restored in the browser, so the year
/// never differs between server and client.
#[component]
pub fn Footer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            <footer class="footer">
                <p class="footer__brand">{copyright_line(browser::current_year())}</p>
                <p class="footer__social-title">"Minhas redes sociais"</p>
                <div class="footer__social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a class="footer__link" href=*href target="_blank" rel="noopener">
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </footer>
        </Show>
    }
}
