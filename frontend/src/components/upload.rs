//! File selection with drag & drop support.
//!
//! The panel only reports what was picked; validation and the pending
//! list live in the dashboard session.

use googlia::{format_file_size, FileCandidate, MediaType};
use leptos::*;
use web_sys::HtmlInputElement;

use crate::services::candidates_from_list;
use crate::types::{file_icon, upload_hint};

#[component]
pub fn UploadPanel(
    #[prop(into)] files: Signal<Vec<FileCandidate>>,
    /// Limit enforced by the session, shown next to the drop zone
    max_file_size: Option<u64>,
    on_select: Callback<Vec<FileCandidate>>,
    on_remove: Callback<usize>,
    on_process: Callback<()>,
) -> impl IntoView {
    let (is_drag_over, set_is_drag_over) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(true);
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);

        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_select.call(candidates_from_list(&list));
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_select.call(candidates_from_list(&list));
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let count = move || files.with(|f| f.len());

    view! {
        <div class="card upload-card">
            <h3>"⬆️ Upload de Boletos"</h3>
            <p class="muted">"Faça upload de boletos em PDF ou imagem (JPG, PNG)"</p>

            <div
                class="drop-zone"
                class:drag-over=move || is_drag_over.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="drop-icon">"☁️"</div>
                <h4>"Arraste arquivos aqui"</h4>
                <p class="muted">"ou clique para selecionar"</p>
                <p class="muted small">{upload_hint(max_file_size)}</p>
                <input
                    type="file"
                    multiple
                    accept=MediaType::accept_attribute()
                    class="hidden"
                    node_ref=input_ref
                    on:change=on_file_change
                />
                <button class="btn btn-outline" on:click=open_picker>"Selecionar Arquivos"</button>
            </div>

            <Show when=move || { count() > 0 } fallback=|| ()>
                <div class="selected-files">
                    <h4>{move || format!("Arquivos Selecionados ({})", count())}</h4>
                    {move || {
                        files
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| view! {
                                <div class="selected-file">
                                    <span class="file-icon">{file_icon(&file.media_type)}</span>
                                    <div class="file-meta">
                                        <p class="file-name">{file.name.clone()}</p>
                                        <p class="muted small">{format_file_size(file.size)}</p>
                                    </div>
                                    <button
                                        class="btn btn-ghost btn-sm"
                                        title="Remover"
                                        on:click=move |_| on_remove.call(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <button
                class="btn btn-primary btn-block"
                disabled=move || count() == 0
                on:click=move |_| on_process.call(())
            >
                {move || format!("Processar {} arquivo(s)", count())}
            </button>
        </div>
    }
}
