use googlia::sign_out;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::config::APP_NAME;
use crate::services::use_toaster;

/// Brand block shared by both headers.
#[component]
fn Brand(#[prop(optional)] badge: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="header-left">
            <span class="logo-mark">"🤖"</span>
            <A href="/" class="logo">{APP_NAME}</A>
            {badge.map(|text| view! { <span class="badge badge-secondary">{text}</span> })}
        </div>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header>
            <Brand/>
            <div class="header-right">
                <A href="/login" class="btn btn-ghost">"Entrar"</A>
                <A href="/login" class="btn btn-primary">"Começar Agora"</A>
            </div>
        </header>
    }
}

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();

    // Logout: toast, then back to the landing page
    let on_logout = move |_| {
        let route = sign_out(&toaster);
        navigate(route.path(), Default::default());
    };

    view! {
        <header>
            <Brand badge="Dashboard"/>
            <div class="header-right">
                <button class="btn btn-ghost btn-sm">"👤 Perfil"</button>
                <button class="btn btn-ghost btn-sm" on:click=on_logout>"↪ Sair"</button>
            </div>
        </header>
    }
}
