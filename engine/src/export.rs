//! Simulated export of processed records.
//!
//! Nothing is written or serialized: the user sees a "preparing" toast,
//! then a "done" toast after a fixed pause.

use std::time::Duration;

use crate::error::{ExportError, ExportResult};
use crate::models::ProcessingRecord;
use crate::notify::{Notification, Notifier};
use crate::task::Timer;

/// What the export covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
}

/// Export every completed record in `records`.
pub async fn export_all<T, N>(
    records: &[ProcessingRecord],
    timer: &T,
    notifier: &N,
    delay: Duration,
) -> ExportResult<ExportSummary>
where
    T: Timer + ?Sized,
    N: Notifier + ?Sized,
{
    let exported = records.iter().filter(|r| r.is_completed()).count();
    if exported == 0 {
        return Err(ExportError::NothingToExport);
    }

    log::info!("📦 Exporting {} record(s)", exported);
    notifier.notify(Notification::info(
        "Preparando download",
        "O arquivo Excel será baixado em breve.",
    ));

    timer.sleep(delay).await;

    notifier.notify(Notification::info(
        "Download concluído!",
        "Os dados dos boletos foram exportados com sucesso.",
    ));

    Ok(ExportSummary { exported })
}

/// Toast for the per-record download button.
pub fn download_notice(record: &ProcessingRecord) -> Notification {
    Notification::info(
        "Download iniciado",
        format!("Baixando dados do boleto {}...", record.number),
    )
}
