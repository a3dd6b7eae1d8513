//! Simulated sign-in form.
//!
//! Any well-formed email/password pair is accepted after the configured
//! delay; the user is then sent to the dashboard.

use googlia::{sign_in, Credentials};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, A};

use crate::config::{pipeline_config, APP_NAME};
use crate::services::{use_toaster, BrowserTimer};
use crate::types::auth_error_message;

#[component]
pub fn LoginPage() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();
    let delay = pipeline_config().login_delay;

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (is_loading, set_is_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        if let Err(e) = credentials.validate() {
            set_error.set(Some(auth_error_message(&e)));
            return;
        }

        set_error.set(None);
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match sign_in(&credentials, &BrowserTimer, &toaster, delay).await {
                Ok(route) => navigate(route.path(), Default::default()),
                Err(e) => set_error.set(Some(auth_error_message(&e))),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Title text=format!("Entrar - {}", APP_NAME)/>

        <div class="login-page">
            <div class="login-top">
                <A href="/" class="btn btn-ghost btn-sm">"← Voltar"</A>
                <div class="logo-row">
                    <span class="logo-mark">"🤖"</span>
                    <span class="logo">{APP_NAME}</span>
                </div>
                <p class="muted">"Acesse sua conta para continuar"</p>
            </div>

            <form class="card login-card" on:submit=on_submit>
                <h2>"Entrar na sua conta"</h2>
                <p class="muted">"Digite suas credenciais para acessar o painel"</p>

                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="seu@email.com"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="password">"Senha"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="Sua senha"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="btn btn-primary btn-block" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                </button>

                <p class="muted small">
                    "Não tem uma conta? "
                    <A href="/login" class="link">"Criar conta"</A>
                </p>
            </form>

            <div class="card demo-notice">
                <strong>"Demonstração:"</strong>
                " Use qualquer email e senha para acessar o sistema."
            </div>
        </div>
    }
}
