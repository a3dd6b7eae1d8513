//! Hero section component

use leptos::*;
use leptos_router::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <span class="badge badge-secondary">"⚡ Powered by AI"</span>
            <h1>
                "Revolucione seu"
                <span class="hero-highlight">"Processamento de Boletos"</span>
            </h1>
            <p class="subtitle">
                "Transforme documentos em dados estruturados com nossa plataforma de IA. "
                "Automatize a leitura de boletos bancários com precisão e velocidade sem precedentes."
            </p>
            <div class="hero-actions">
                <A href="/login" class="btn btn-primary btn-lg">"Começar Gratuitamente →"</A>
                <A href="/login" class="btn btn-outline btn-lg">"Ver Demonstração"</A>
            </div>
        </section>
    }
}
