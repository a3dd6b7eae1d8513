//! Detail cards for completed records and the simulated export.

use googlia::{download_notice, export_all, Notifier, ProcessingRecord, StatusCounts};
use leptos::*;

use crate::config::pipeline_config;
use crate::services::{use_toaster, BrowserTimer};

#[component]
pub fn ResultsView(
    /// Completed records in submission order
    #[prop(into)]
    completed: Signal<Vec<ProcessingRecord>>,
    #[prop(into)] counts: Signal<StatusCounts>,
) -> impl IntoView {
    let toaster = use_toaster();
    let export_delay = pipeline_config().export_delay;
    let (is_exporting, set_is_exporting) = create_signal(false);

    let on_export = move |_| {
        if is_exporting.get_untracked() {
            return;
        }
        set_is_exporting.set(true);

        let snapshot = completed.get_untracked();
        spawn_local(async move {
            match export_all(&snapshot, &BrowserTimer, &toaster, export_delay).await {
                Ok(summary) => log::info!("📦 Exported {} record(s)", summary.exported),
                Err(e) => log::warn!("Export skipped: {}", e),
            }
            set_is_exporting.set(false);
        });
    };

    view! {
        <section class="results">
            <div class="results-header">
                <div>
                    <h2>"Resultados do Processamento"</h2>
                    <p class="muted">
                        {move || format!("{} boleto(s) processado(s) com sucesso", completed.with(|c| c.len()))}
                    </p>
                </div>
                <button class="btn btn-primary" disabled=move || is_exporting.get() on:click=on_export>
                    {move || if is_exporting.get() { "Exportando..." } else { "📥 Exportar Excel" }}
                </button>
            </div>

            <div class="results-grid">
                <For
                    each=move || completed.get()
                    key=|record| record.id.clone()
                    children=move |record| view! { <RecordCard record=record/> }
                />
            </div>

            <div class="card summary-card">
                <h3>"Resumo"</h3>
                <div class="summary-row">
                    <span class="muted">"Total enviado"</span>
                    <strong>{move || counts.get().total}</strong>
                </div>
                <div class="summary-row">
                    <span class="muted">"Concluídos"</span>
                    <strong>{move || counts.get().completed}</strong>
                </div>
                <div class="summary-row">
                    <span class="muted">"Em processamento"</span>
                    <strong>{move || counts.get().pending}</strong>
                </div>
                <button class="btn btn-outline btn-block" disabled=move || is_exporting.get() on:click=on_export>
                    "📥 Baixar Relatório Completo"
                </button>
            </div>
        </section>
    }
}

/// One completed record with every extracted field.
#[component]
fn RecordCard(record: ProcessingRecord) -> impl IntoView {
    let toaster = use_toaster();
    let notice = download_notice(&record);
    let on_download = move |_| toaster.notify(notice.clone());

    let fields = [
        ("TIPO", record.kind.clone()),
        ("NÚMERO", record.number.clone()),
        ("VALOR FACE", record.face_value.clone()),
        ("VENCIMENTO", record.due_date.clone()),
        ("NOME SACADO", record.payer_name.clone()),
        ("SACADO (CNPJ)", record.payer_tax_id.clone()),
    ];

    view! {
        <div class="card record-card">
            <div class="record-head">
                <span class="file-name">{record.file_name.clone()}</span>
                <span class="badge badge-default">"Concluído"</span>
            </div>

            <dl class="record-fields">
                {fields
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="record-field">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>

            <div class="record-field digitable">
                <dt>"LINHA DIGITÁVEL"</dt>
                <dd class="mono">{record.digitable_line.clone()}</dd>
            </div>

            <div class="record-foot">
                <span class="muted small">{format!("Processado em {}", record.created_at_display())}</span>
                <button class="btn btn-outline btn-sm" on:click=on_download>"⬇ Download"</button>
            </div>
        </div>
    }
}
