//! On-screen notifications.
//!
//! Renders the app-wide [`crate::services::Toaster`] queue. Toasts dismiss
//! themselves after a while or when clicked.

use leptos::*;

use crate::services::use_toaster;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.css_class() on:click=move |_| toaster.dismiss(id)>
                            <div class="toast-title">{toast.notification.title.clone()}</div>
                            <div class="toast-description">{toast.notification.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
