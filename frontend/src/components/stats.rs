use googlia::StatusCounts;
use leptos::*;

use crate::types::stat_tiles;

/// Four counters above the upload panel.
#[component]
pub fn StatsGrid(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {move || {
                stat_tiles(counts.get())
                    .into_iter()
                    .map(|tile| view! {
                        <div class="card stat-card">
                            <div>
                                <p class="stat-label">{tile.label}</p>
                                <p class="stat-value">{tile.value}</p>
                            </div>
                            <div class=format!("stat-icon {}", tile.class)>{tile.icon}</div>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
