//! Domain models for the boleto processing demo.
//!
//! - [`ProcessingRecord`] - One record per accepted file
//! - [`RecordId`] - Opaque unique token
//! - [`RecordStatus`] - `pending`, `completed` or `failed`
//! - [`StatusCounts`] - Aggregate counts shown on the dashboard
//! - [`RecordDraft`] - Display fields produced by a record source

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Record Id
// =============================================================================

/// Opaque unique token identifying a record for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Record Status
// =============================================================================

/// Processing status of a record.
///
/// `Failed` is counted on the dashboard but nothing produces it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Waiting for the completion task to fire.
    Pending,
    /// Data is available.
    Completed,
    /// Extraction failed.
    Failed,
}

impl RecordStatus {
    /// The only allowed move is `Pending -> Completed`.
    pub fn can_transition_to(self, next: RecordStatus) -> bool {
        matches!((self, next), (RecordStatus::Pending, RecordStatus::Completed))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Completed => "completed",
            RecordStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record Draft
// =============================================================================

/// Display fields for a record, as produced by a [`crate::source::RecordSource`].
///
/// All values are display strings; none is parsed as a date or an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub kind: String,
    pub number: String,
    pub payer_tax_id: String,
    pub payer_name: String,
    pub due_date: String,
    pub face_value: String,
    pub digitable_line: String,
}

// =============================================================================
// Processing Record
// =============================================================================

/// A per-file processing entity tracked for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRecord {
    pub id: RecordId,
    /// Name of the uploaded file
    pub file_name: String,
    pub kind: String,
    pub number: String,
    pub payer_tax_id: String,
    pub payer_name: String,
    pub due_date: String,
    pub face_value: String,
    pub digitable_line: String,
    pub created_at: DateTime<Utc>,
    pub status: RecordStatus,
}

impl ProcessingRecord {
    /// Stamp a draft into a new `Pending` record.
    pub fn from_draft(file_name: impl Into<String>, draft: RecordDraft) -> Self {
        Self {
            id: RecordId::generate(),
            file_name: file_name.into(),
            kind: draft.kind,
            number: draft.number,
            payer_tax_id: draft.payer_tax_id,
            payer_name: draft.payer_name,
            due_date: draft.due_date,
            face_value: draft.face_value,
            digitable_line: draft.digitable_line,
            created_at: Utc::now(),
            status: RecordStatus::Pending,
        }
    }

    /// Creation time as `dd/mm/yyyy HH:MM` in local time.
    pub fn created_at_display(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string()
    }

    pub fn is_completed(&self) -> bool {
        self.status == RecordStatus::Completed
    }
}

// =============================================================================
// Status Counts
// =============================================================================

/// Aggregate counts for the dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn from_records(records: &[ProcessingRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            counts.total += 1;
            match record.status {
                RecordStatus::Pending => counts.pending += 1,
                RecordStatus::Completed => counts.completed += 1,
                RecordStatus::Failed => counts.failed += 1,
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecordDraft {
        RecordDraft {
            kind: "Cobrança".into(),
            number: "1234567890".into(),
            payer_tax_id: "12.345.678/0001-90".into(),
            payer_name: "Empresa Exemplo LTDA".into(),
            due_date: "15/01/2025".into(),
            face_value: "R$ 1.250,00".into(),
            digitable_line: "34191.09008".into(),
        }
    }

    #[test]
    fn test_only_pending_to_completed() {
        use RecordStatus::*;
        assert!(Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Failed));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Completed));
        assert!(!Failed.can_transition_to(Completed));
    }

    #[test]
    fn test_from_draft_starts_pending() {
        let record = ProcessingRecord::from_draft("a.pdf", draft());
        assert_eq!(record.status, RecordStatus::Pending);
        assert_eq!(record.file_name, "a.pdf");
        assert_eq!(record.number, "1234567890");
        assert!(!record.id.as_str().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ProcessingRecord::from_draft("a.pdf", draft());
        let b = ProcessingRecord::from_draft("a.pdf", draft());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&RecordStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_counts() {
        let mut records = vec![
            ProcessingRecord::from_draft("a.pdf", draft()),
            ProcessingRecord::from_draft("b.png", draft()),
            ProcessingRecord::from_draft("c.jpg", draft()),
        ];
        records[1].status = RecordStatus::Completed;

        let counts = StatusCounts::from_records(&records);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.failed, 0);
    }

    #[test]
    fn test_created_at_display_shape() {
        let record = ProcessingRecord::from_draft("a.pdf", draft());
        let shown = record.created_at_display();
        // dd/mm/yyyy HH:MM
        assert_eq!(shown.len(), 16);
        assert_eq!(&shown[2..3], "/");
        assert_eq!(&shown[13..14], ":");
    }
}
