//! Landing page: static marketing content, no state.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::{Footer, Hero, SiteHeader};
use crate::config::APP_NAME;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📄",
        title: "Leitura de Boletos",
        description: "Extração automática de dados de boletos bancários com precisão e velocidade.",
    },
    Feature {
        icon: "🤖",
        title: "IA Avançada",
        description: "Tecnologia de ponta em inteligência artificial para processamento de documentos.",
    },
    Feature {
        icon: "⚡",
        title: "Processamento Rápido",
        description: "Resultados em segundos, otimizando seu fluxo de trabalho.",
    },
    Feature {
        icon: "🛡️",
        title: "Segurança Total",
        description: "Seus dados protegidos com criptografia de última geração.",
    },
];

/// Marketing figures (label, value)
const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Boletos Processados", "100K+"),
    ("Precisão", "99.8%"),
    ("Clientes Ativos", "500+"),
    ("Tempo Médio", "2s"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=APP_NAME/>
        <SiteHeader/>

        <div class="container">
            <Hero/>

            <section class="highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|(label, value)| view! {
                        <div class="highlight">
                            <div class="highlight-value">{*value}</div>
                            <div class="highlight-label">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="features">
                <h2>{format!("Por que escolher a {}?", APP_NAME)}</h2>
                <p class="subtitle">
                    "Nossa plataforma oferece as ferramentas mais avançadas para automatizar "
                    "seu processamento de documentos financeiros."
                </p>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="card feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p class="muted">{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card cta">
                <h2>"Pronto para começar?"</h2>
                <p class="subtitle">
                    {format!(
                        "Junte-se a centenas de empresas que já automatizaram seu processamento de boletos com a {}.",
                        APP_NAME
                    )}
                </p>
                <div class="cta-actions">
                    <A href="/login" class="btn btn-primary btn-lg">"Começar Agora →"</A>
                    <span class="muted">"⏱️ Setup em menos de 2 minutos"</span>
                </div>
            </section>
        </div>

        <Footer/>
    }
}
