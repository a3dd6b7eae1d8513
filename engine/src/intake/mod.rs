//! File intake validation and the pending selection.
//!
//! A picked file is accepted when its *declared* media type is PDF, JPEG or
//! PNG and it fits under the size limit. Content is never inspected, so a
//! renamed file with a spoofed type passes.
//!
//! ```text
//! picker / drop ──▶ IntakePolicy::check ──▶ Selection ──take()──▶ Pipeline
//!                          │
//!                          └──▶ IntakeReport::warning() (one toast)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{PipelineConfig, DEFAULT_MAX_FILE_SIZE};
use crate::error::IntakeError;
use crate::notify::Notification;

// =============================================================================
// Media Types
// =============================================================================

/// Media types accepted for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    Jpeg,
    Png,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Pdf, MediaType::Jpeg, MediaType::Png];

    /// Match a declared MIME type exactly.
    pub fn parse(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "image/jpeg" => Some(MediaType::Jpeg),
            "image/png" => Some(MediaType::Png),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }

    /// File extensions offered by the picker.
    pub fn extensions(self) -> &'static str {
        match self {
            MediaType::Pdf => ".pdf",
            MediaType::Jpeg => ".jpg,.jpeg",
            MediaType::Png => ".png",
        }
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .map(|m| m.extensions())
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// File Candidate
// =============================================================================

/// Declared metadata of a file handed over by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    pub name: String,
    /// MIME type as declared by the browser (may be empty)
    pub media_type: String,
    pub size: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    pub fn kind(&self) -> Option<MediaType> {
        MediaType::parse(&self.media_type)
    }

    /// Build a candidate from a file on disk.
    ///
    /// The media type is guessed from the extension, the way a browser
    /// fills `File.type`.
    #[cfg(feature = "native")]
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            media_type,
            size: metadata.len(),
        })
    }
}

// =============================================================================
// Policy
// =============================================================================

/// Why a file was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Rejection {
    UnsupportedType { media_type: String },
    TooLarge { size: u64, limit: u64 },
}

/// A rejected file and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejected {
    pub name: String,
    pub rejection: Rejection,
}

/// Acceptance rules for picked files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    pub max_file_size: Option<u64>,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }
}

impl From<&PipelineConfig> for IntakePolicy {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
        }
    }
}

impl IntakePolicy {
    /// Accept everything with an allowed media type, whatever its size.
    pub fn unlimited() -> Self {
        Self { max_file_size: None }
    }

    pub fn check(&self, file: &FileCandidate) -> Result<(), Rejection> {
        if file.kind().is_none() {
            return Err(Rejection::UnsupportedType {
                media_type: file.media_type.clone(),
            });
        }

        if let Some(limit) = self.max_file_size {
            if file.size > limit {
                return Err(Rejection::TooLarge {
                    size: file.size,
                    limit,
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Report
// =============================================================================

/// Outcome of adding a batch of picked files to the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReport {
    pub accepted: usize,
    pub rejected: Vec<Rejected>,
}

impl IntakeReport {
    pub fn rejected_names(&self) -> Vec<&str> {
        self.rejected.iter().map(|r| r.name.as_str()).collect()
    }

    /// A single warning listing every rejected file, if any.
    pub fn warning(&self) -> Option<Notification> {
        if self.rejected.is_empty() {
            return None;
        }

        let unsupported: Vec<&str> = self
            .rejected
            .iter()
            .filter(|r| matches!(r.rejection, Rejection::UnsupportedType { .. }))
            .map(|r| r.name.as_str())
            .collect();
        let oversized: Vec<&str> = self
            .rejected
            .iter()
            .filter(|r| matches!(r.rejection, Rejection::TooLarge { .. }))
            .map(|r| r.name.as_str())
            .collect();

        let mut parts = Vec::new();
        if !unsupported.is_empty() {
            parts.push(format!(
                "Os seguintes arquivos não são suportados: {}",
                unsupported.join(", ")
            ));
        }
        if !oversized.is_empty() {
            parts.push(format!(
                "Os seguintes arquivos excedem o limite de tamanho: {}",
                oversized.join(", ")
            ));
        }

        Some(Notification::warning("Arquivos inválidos", parts.join(". ")))
    }
}

impl IntakeError {
    /// Toast shown when processing is requested with nothing selected.
    pub fn notification(&self) -> Notification {
        match self {
            IntakeError::EmptySelection => Notification::warning(
                "Nenhum arquivo selecionado",
                "Selecione pelo menos um arquivo para processar.",
            ),
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Files waiting for the user to press "process".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    files: Vec<FileCandidate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every acceptable file, in order.
    pub fn add(
        &mut self,
        files: impl IntoIterator<Item = FileCandidate>,
        policy: &IntakePolicy,
    ) -> IntakeReport {
        let mut report = IntakeReport::default();

        for file in files {
            match policy.check(&file) {
                Ok(()) => {
                    report.accepted += 1;
                    self.files.push(file);
                }
                Err(rejection) => {
                    log::debug!("Rejected {}: {:?}", file.name, rejection);
                    report.rejected.push(Rejected {
                        name: file.name,
                        rejection,
                    });
                }
            }
        }

        report
    }

    pub fn remove(&mut self, index: usize) -> Option<FileCandidate> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    /// Hand the whole selection over and clear it.
    pub fn take(&mut self) -> Result<Vec<FileCandidate>, IntakeError> {
        if self.files.is_empty() {
            return Err(IntakeError::EmptySelection);
        }
        Ok(std::mem::take(&mut self.files))
    }

    pub fn files(&self) -> &[FileCandidate] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate::new(name, "application/pdf", 1_000)
    }

    #[test]
    fn test_media_type_allow_set() {
        assert_eq!(MediaType::parse("application/pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::parse("image/jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::parse("image/png"), Some(MediaType::Png));
        assert_eq!(MediaType::parse("text/plain"), None);
        assert_eq!(MediaType::parse("image/gif"), None);
        assert_eq!(MediaType::parse(""), None);
        assert_eq!(MediaType::parse("APPLICATION/PDF"), None);
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(MediaType::accept_attribute(), ".pdf,.jpg,.jpeg,.png");
    }

    #[test]
    fn test_spoofed_type_passes() {
        // Only the declared type counts
        let file = FileCandidate::new("notes.txt", "application/pdf", 10);
        assert!(IntakePolicy::default().check(&file).is_ok());
    }

    #[test]
    fn test_check_outcomes() {
        let policy = IntakePolicy::default();
        assert_eq!(policy.check(&FileCandidate::new("a.png", "image/png", 10)), Ok(()));
        assert_eq!(
            policy.check(&FileCandidate::new("b.txt", "text/plain", 10)),
            Err(Rejection::UnsupportedType {
                media_type: "text/plain".into()
            })
        );
    }

    #[test]
    fn test_size_limit() {
        let policy = IntakePolicy::default();
        let at_limit = FileCandidate::new("a.pdf", "application/pdf", DEFAULT_MAX_FILE_SIZE);
        let over = FileCandidate::new("b.pdf", "application/pdf", DEFAULT_MAX_FILE_SIZE + 1);

        assert!(policy.check(&at_limit).is_ok());
        assert_eq!(
            policy.check(&over),
            Err(Rejection::TooLarge {
                size: DEFAULT_MAX_FILE_SIZE + 1,
                limit: DEFAULT_MAX_FILE_SIZE
            })
        );
        assert!(IntakePolicy::unlimited().check(&over).is_ok());
    }

    #[test]
    fn test_mixed_batch() {
        let mut selection = Selection::new();
        let report = selection.add(
            vec![pdf("a.pdf"), FileCandidate::new("b.txt", "text/plain", 5)],
            &IntakePolicy::default(),
        );

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected_names(), vec!["b.txt"]);
        assert_eq!(selection.len(), 1);

        let warning = report.warning().unwrap();
        assert!(warning.is_warning());
        assert!(warning.description.contains("b.txt"));
        assert!(!warning.description.contains("a.pdf"));
    }

    #[test]
    fn test_single_warning_for_both_reasons() {
        let mut selection = Selection::new();
        let report = selection.add(
            vec![
                FileCandidate::new("b.txt", "text/plain", 5),
                FileCandidate::new("huge.png", "image/png", DEFAULT_MAX_FILE_SIZE * 2),
            ],
            &IntakePolicy::default(),
        );

        let warning = report.warning().unwrap();
        assert!(warning.description.contains("b.txt"));
        assert!(warning.description.contains("huge.png"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_no_warning_when_all_valid() {
        let mut selection = Selection::new();
        let report = selection.add(vec![pdf("a.pdf")], &IntakePolicy::default());
        assert!(report.warning().is_none());
    }

    #[test]
    fn test_selection_accumulates_and_removes() {
        let policy = IntakePolicy::default();
        let mut selection = Selection::new();
        selection.add(vec![pdf("a.pdf")], &policy);
        selection.add(vec![pdf("b.pdf"), pdf("c.pdf")], &policy);
        assert_eq!(selection.len(), 3);

        let removed = selection.remove(1).unwrap();
        assert_eq!(removed.name, "b.pdf");
        assert!(selection.remove(5).is_none());

        let names: Vec<_> = selection.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_take_clears() {
        let mut selection = Selection::new();
        assert_eq!(selection.take(), Err(IntakeError::EmptySelection));

        selection.add(vec![pdf("a.pdf")], &IntakePolicy::default());
        let batch = selection.take().unwrap();
        assert_eq!(batch.len(), 1);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }
}
