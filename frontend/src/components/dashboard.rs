//! Dashboard page: owns the session and wires the upload panel to the
//! mock pipeline.

use googlia::{FileCandidate, MockSource, NotificationLog, Session};
use leptos::*;
use leptos_meta::Title;

use super::{DashboardHeader, RecentResults, ResultsView, StatsGrid, UploadPanel};
use crate::config::{pipeline_config, APP_NAME};
use crate::services::{use_toaster, BrowserTimer};
use crate::types::dashboard_welcome;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toaster = use_toaster();
    let config = pipeline_config();
    let (heading, tagline) = dashboard_welcome();
    let session = create_rw_signal(Session::<MockSource>::mock(&config));

    let recent = create_memo(move |_| {
        session.with(|s| s.pipeline().recent().cloned().collect::<Vec<_>>())
    });
    let completed = create_memo(move |_| {
        session.with(|s| s.pipeline().completed().cloned().collect::<Vec<_>>())
    });
    let counts = create_memo(move |_| session.with(|s| s.pipeline().counts()));
    let selected = create_memo(move |_| session.with(|s| s.selection().files().to_vec()));

    // Notifications are collected while the session is borrowed, then shown
    let on_select = Callback::new(move |files: Vec<FileCandidate>| {
        let log = NotificationLog::new();
        session.update(|s| {
            s.select(files, &log);
        });
        toaster.forward(&log);
    });

    let on_remove = Callback::new(move |index: usize| {
        session.update(|s| {
            s.deselect(index);
        });
    });

    let on_process = Callback::new(move |_: ()| {
        let log = NotificationLog::new();
        let mut tasks = Vec::new();
        session.update(|s| tasks = s.process(&log));
        toaster.forward(&log);

        for task in tasks {
            let done = task.complete_after(&BrowserTimer);
            spawn_local(async move {
                let id = done.await;
                session.update(|s| {
                    if let Err(e) = s.complete(&id) {
                        log::warn!("Ignoring completion for {}: {}", id, e);
                    }
                });
            });
        }
    });

    view! {
        <Title text=format!("Painel - {}", APP_NAME)/>
        <DashboardHeader/>

        <div class="container dashboard">
            <div class="welcome">
                <h1>{heading}</h1>
                <p class="muted">{tagline}</p>
            </div>

            <StatsGrid counts=counts/>

            <div class="dashboard-grid">
                <UploadPanel
                    files=selected
                    max_file_size=config.max_file_size
                    on_select=on_select
                    on_remove=on_remove
                    on_process=on_process
                />
                <RecentResults records=recent/>
            </div>

            <Show when=move || { counts.get().completed > 0 } fallback=|| ()>
                <ResultsView completed=completed counts=counts/>
            </Show>
        </div>
    }
}
