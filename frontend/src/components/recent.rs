use googlia::ProcessingRecord;
use leptos::*;

use crate::types::{recent_row_lines, status_badge};

/// Records newest first, each with its status badge.
#[component]
pub fn RecentResults(
    /// Already in newest-first order
    #[prop(into)]
    records: Signal<Vec<ProcessingRecord>>,
) -> impl IntoView {
    view! {
        <div class="card recent-card">
            <h3>"📄 Resultados Recentes"</h3>
            <p class="muted">"Boletos processados recentemente"</p>

            <Show
                when=move || records.with(|r| !r.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-icon">"📄"</div>
                        <p class="muted">"Nenhum boleto processado ainda"</p>
                        <p class="muted small">"Faça upload de alguns boletos para começar"</p>
                    </div>
                }
            >
                <div class="recent-list">
                    <For
                        each=move || records.get()
                        key=|record| (record.id.clone(), record.status)
                        children=|record| {
                            let (label, class) = status_badge(record.status);
                            let (heading, [value, due]) = recent_row_lines(&record);
                            view! {
                                <div class="recent-row">
                                    <div>
                                        <p class="file-name">{heading}</p>
                                        <p class="muted small">{value}</p>
                                        <p class="muted small">{due}</p>
                                        <p class="muted small">
                                            {format!("{} · {}", record.file_name, record.created_at_display())}
                                        </p>
                                    </div>
                                    <span class=class>{label}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
