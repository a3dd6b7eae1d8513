//! Record sources: where the fields of a record come from.
//!
//! The dashboard only talks to [`RecordSource`]. [`MockSource`] fabricates
//! the fields of a typical boleto; a real extraction backend would plug in
//! here without touching the views or the state machine.

use rand::Rng;
use std::time::Duration;

use crate::config::PipelineConfig;
use crate::intake::FileCandidate;
use crate::models::RecordDraft;

/// Provides record fields and the processing delay for a file.
pub trait RecordSource {
    /// Fields for the record created from `file`.
    fn draft(&self, file: &FileCandidate) -> RecordDraft;

    /// Time until the record completes.
    fn processing_delay(&self) -> Duration;
}

// =============================================================================
// Mock Source
// =============================================================================

pub const MOCK_KIND: &str = "Cobrança";
pub const MOCK_PAYER_TAX_ID: &str = "12.345.678/0001-90";
pub const MOCK_PAYER_NAME: &str = "Empresa Exemplo LTDA";
pub const MOCK_DUE_DATE: &str = "15/01/2025";
pub const MOCK_FACE_VALUE: &str = "R$ 1.250,00";
pub const MOCK_DIGITABLE_LINE: &str = "34191.09008 61207.954112 95000.063305 8 95000000125000";

/// Fabricates a fixed boleto with a random number.
#[derive(Debug, Clone)]
pub struct MockSource {
    min_delay: Duration,
    max_delay: Duration,
}

impl MockSource {
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self { min_delay, max_delay }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.min_delay, config.max_delay)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

impl RecordSource for MockSource {
    fn draft(&self, _file: &FileCandidate) -> RecordDraft {
        let mut rng = rand::thread_rng();
        let number: String = (0..10)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        RecordDraft {
            kind: MOCK_KIND.to_string(),
            number,
            payer_tax_id: MOCK_PAYER_TAX_ID.to_string(),
            payer_name: MOCK_PAYER_NAME.to_string(),
            due_date: MOCK_DUE_DATE.to_string(),
            face_value: MOCK_FACE_VALUE.to_string(),
            digitable_line: MOCK_DIGITABLE_LINE.to_string(),
        }
    }

    fn processing_delay(&self) -> Duration {
        if self.min_delay >= self.max_delay {
            return self.min_delay;
        }
        rand::thread_rng().gen_range(self.min_delay..self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fields() {
        let source = MockSource::default();
        let draft = source.draft(&FileCandidate::new("a.pdf", "application/pdf", 1));

        assert_eq!(draft.kind, "Cobrança");
        assert_eq!(draft.payer_name, MOCK_PAYER_NAME);
        assert_eq!(draft.face_value, MOCK_FACE_VALUE);
        assert_eq!(draft.number.len(), 10);
        assert!(draft.number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_delay_within_range() {
        let source = MockSource::default();
        for _ in 0..200 {
            let delay = source.processing_delay();
            assert!(delay >= Duration::from_secs(2));
            assert!(delay < Duration::from_secs(5));
        }
    }

    #[test]
    fn test_empty_range_uses_min() {
        let source = MockSource::new(Duration::from_millis(30), Duration::from_millis(30));
        assert_eq!(source.processing_delay(), Duration::from_millis(30));
    }
}
