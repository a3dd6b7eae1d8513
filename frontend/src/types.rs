//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - Notifications queued for display
//! - **Badge Types** - Status badge labels and styles
//! - **Stat Types** - Dashboard counter tiles
//! - **Dashboard Text** - Greeting and recent-row lines
//! - **Form Messages** - Login validation text and upload hint

use googlia::{
    format_file_size, AuthError, Notification, ProcessingRecord, RecordStatus, StatusCounts, Variant,
};

// =============================================================================
// Toast Types
// =============================================================================

/// A notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique per page load, used as list key and for dismissal
    pub id: u64,
    pub notification: Notification,
}

impl Toast {
    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self.notification.variant {
            Variant::Default => "toast",
            Variant::Destructive => "toast toast-destructive",
        }
    }
}

// =============================================================================
// Badge Types
// =============================================================================

/// Status badge text and CSS class.
pub fn status_badge(status: RecordStatus) -> (&'static str, &'static str) {
    match status {
        RecordStatus::Pending => ("Processando...", "badge badge-secondary"),
        RecordStatus::Completed => ("Concluído", "badge badge-default"),
        RecordStatus::Failed => ("Erro", "badge badge-destructive"),
    }
}

/// Emoji icon for a declared media type.
pub fn file_icon(media_type: &str) -> &'static str {
    if media_type == "application/pdf" {
        "📄"
    } else {
        "🖼️"
    }
}

// =============================================================================
// Stat Types
// =============================================================================

/// One dashboard counter tile.
#[derive(Clone, Debug, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: usize,
    pub icon: &'static str,
    pub class: &'static str,
}

/// The four dashboard tiles, in display order.
pub fn stat_tiles(counts: StatusCounts) -> Vec<StatTile> {
    vec![
        StatTile { label: "Boletos Processados", value: counts.total, icon: "📄", class: "stat-blue" },
        StatTile { label: "Processando", value: counts.pending, icon: "⏱️", class: "stat-amber" },
        StatTile { label: "Concluídos", value: counts.completed, icon: "✅", class: "stat-green" },
        StatTile { label: "Erros", value: counts.failed, icon: "⚠️", class: "stat-red" },
    ]
}

// =============================================================================
// Dashboard Text
// =============================================================================

/// Dashboard greeting: heading and tagline.
pub fn dashboard_welcome() -> (String, &'static str) {
    (
        format!("Bem-vindo ao {}", crate::config::APP_NAME),
        "Processe seus boletos bancários com inteligência artificial de última geração.",
    )
}

/// Heading and detail lines of a recent-results row.
pub fn recent_row_lines(record: &ProcessingRecord) -> (String, [String; 2]) {
    (
        format!("Boleto #{}", record.number),
        [
            format!("Valor: {}", record.face_value),
            format!("Vencimento: {}", record.due_date),
        ],
    )
}

// =============================================================================
// Form Messages
// =============================================================================

/// Inline message under the login form.
pub fn auth_error_message(error: &AuthError) -> String {
    match error {
        AuthError::MissingEmail => "Informe seu email.".to_string(),
        AuthError::InvalidEmail(email) => format!("\"{}\" não é um email válido.", email),
        AuthError::MissingPassword => "Informe sua senha.".to_string(),
    }
}

/// Supported formats line of the upload panel, with the enforced size limit.
pub fn upload_hint(max_file_size: Option<u64>) -> String {
    match max_file_size {
        Some(limit) => format!(
            "Suporte para PDF, JPEG e PNG (máx. {} por arquivo)",
            format_file_size(limit)
        ),
        None => "Suporte para PDF, JPEG e PNG".to_string(),
    }
}
