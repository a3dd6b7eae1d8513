//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div class="footer-brand">
                <span class="logo-mark small">"🤖"</span>
                <span class="footer-name">{APP_NAME}</span>
            </div>
            <div class="footer-copy">
                {format!("© {} {}. Todos os direitos reservados.", year, APP_NAME)}
            </div>
        </footer>
    }
}
