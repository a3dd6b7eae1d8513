//! # GOOGLIA engine - boleto demo logic
//!
//! Everything behind the GOOGLIA demo screens that is not markup: file
//! intake, the mock processing pipeline and the simulated login/export
//! flows. The crate is platform neutral; the Leptos frontend uses it with
//! `default-features = false`, the `googlia` CLI drives it natively.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  File pick  │────▶│   Intake    │────▶│  Pipeline   │────▶│   Results   │
//! │ (drop/input)│     │ (type/size) │     │ (pending →  │     │ (export sim)│
//! └─────────────┘     └─────────────┘     │  completed) │     └─────────────┘
//!                                         └──────▲──────┘
//!                                                │ CompletionTask + Timer
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use googlia::{drive_completions, FileCandidate, NotificationLog, PipelineConfig, Session, TokioTimer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let log = NotificationLog::new();
//!     let mut session = Session::mock(&PipelineConfig::default());
//!     session.select(vec![FileCandidate::new("a.pdf", "application/pdf", 1024)], &log);
//!     let tasks = session.process(&log);
//!     drive_completions(&mut session, tasks, &TokioTimer, |_, _, _| {}).await;
//!     println!("{:?}", session.pipeline().counts());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`config`] - Timings and limits
//! - [`models`] - Records, statuses, counts
//! - [`intake`] - File validation and pending selection
//! - [`source`] - Pluggable record sources (mock)
//! - [`task`] - Timers and completion tasks
//! - [`pipeline`] - Record state machine
//! - [`session`] - Dashboard state owner
//! - [`export`] - Simulated export
//! - [`auth`] - Simulated login
//! - [`notify`] - Toast notifications
//! - [`routes`] - Navigation targets

// Core modules
pub mod error;
pub mod config;
pub mod models;

// Intake and processing
pub mod intake;
pub mod source;
pub mod task;
pub mod pipeline;
pub mod session;

// Simulated flows
pub mod export;
pub mod auth;

// Presentation contracts
pub mod notify;
pub mod routes;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    AuthError, ConfigError, ExportError, IntakeError, PipelineError,
};

// =============================================================================
// Re-exports - Models and config
// =============================================================================

pub use config::{PipelineConfig, DEFAULT_MAX_FILE_SIZE};
pub use models::{ProcessingRecord, RecordDraft, RecordId, RecordStatus, StatusCounts};

// =============================================================================
// Re-exports - Intake and processing
// =============================================================================

pub use intake::{
    format_file_size, FileCandidate, IntakePolicy, IntakeReport, MediaType, Rejected, Rejection,
    Selection,
};
pub use pipeline::{Pipeline, Submission, Transition};
pub use session::{drive_completions, Session};
pub use source::{MockSource, RecordSource};
pub use task::{CompletionTask, Timer};

#[cfg(feature = "native")]
pub use task::TokioTimer;

// =============================================================================
// Re-exports - Flows
// =============================================================================

pub use auth::{sign_in, sign_out, Credentials};
pub use export::{download_notice, export_all, ExportSummary};
pub use notify::{Notification, NotificationLog, Notifier, Variant};
pub use routes::Route;

#[cfg(feature = "native")]
pub use notify::ConsoleNotifier;
