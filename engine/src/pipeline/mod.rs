//! Mock processing pipeline.
//!
//! [`Pipeline`] owns the session's record list and is the only place where
//! a record changes state.
//!
//! ```text
//!  submit(batch) ──▶ one Pending record per file ──▶ CompletionTask per record
//!                                                          │ (delay elapses)
//!  complete(id)  ◀─────────────────────────────────────────┘
//!        │
//!        └──▶ Pending ──▶ Completed   (exactly once, never back)
//! ```

use crate::error::{PipelineError, PipelineResult};
use crate::intake::FileCandidate;
use crate::models::{ProcessingRecord, RecordId, RecordStatus, StatusCounts};
use crate::notify::Notification;
use crate::source::RecordSource;
use crate::task::CompletionTask;

/// Result of a batch submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// One task per created record, in submission order
    pub tasks: Vec<CompletionTask>,
    /// Toast announcing the upload
    pub notification: Notification,
}

/// A status change applied to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: RecordStatus,
    pub to: RecordStatus,
}

/// Owner of the record list.
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    source: S,
    records: Vec<ProcessingRecord>,
}

impl<S: RecordSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: Vec::new(),
        }
    }

    /// Create a pending record per file and schedule its completion.
    pub fn submit(&mut self, batch: Vec<FileCandidate>) -> PipelineResult<Submission> {
        if batch.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }

        let count = batch.len();
        let mut tasks = Vec::with_capacity(count);

        for file in batch {
            let draft = self.source.draft(&file);
            let record = ProcessingRecord::from_draft(file.name, draft);
            let delay = self.source.processing_delay();

            log::debug!(
                "📄 Record {} created for {} (completes in {} ms)",
                record.id,
                record.file_name,
                delay.as_millis()
            );

            tasks.push(CompletionTask::new(record.id.clone(), delay));
            self.records.push(record);
        }

        log::info!("📤 {} file(s) submitted for processing", count);

        Ok(Submission {
            tasks,
            notification: Notification::info(
                "Upload realizado com sucesso!",
                format!("{} arquivo(s) enviado(s) para processamento.", count),
            ),
        })
    }

    /// Move a pending record to `Completed`.
    pub fn complete(&mut self, id: &RecordId) -> PipelineResult<Transition> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| PipelineError::UnknownRecord(id.clone()))?;

        let from = record.status;
        if !from.can_transition_to(RecordStatus::Completed) {
            return Err(PipelineError::AlreadySettled {
                id: id.clone(),
                status: from,
            });
        }

        record.status = RecordStatus::Completed;
        log::info!("✅ Record {} ({}) completed", record.id, record.file_name);

        Ok(Transition {
            from,
            to: RecordStatus::Completed,
        })
    }

    /// All records in submission order.
    pub fn records(&self) -> &[ProcessingRecord] {
        &self.records
    }

    /// Newest first, as shown in the recent results list.
    pub fn recent(&self) -> impl Iterator<Item = &ProcessingRecord> {
        self.records.iter().rev()
    }

    /// Completed records in submission order.
    pub fn completed(&self) -> impl Iterator<Item = &ProcessingRecord> {
        self.records.iter().filter(|r| r.is_completed())
    }

    pub fn get(&self, id: &RecordId) -> Option<&ProcessingRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_records(&self.records)
    }
}
