//! Application configuration.
//!
//! Compile-time settings for the GOOGLIA frontend. Flow timings come from
//! the engine defaults so the browser and the CLI behave the same.

use googlia::PipelineConfig;

/// Product name shown in headers and page titles.
pub const APP_NAME: &str = "GOOGLIA";

/// How long a toast stays on screen (milliseconds).
pub const TOAST_DURATION_MS: u64 = 5000;

/// Maximum toasts shown at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;

/// Timings and limits used by the dashboard and the login form.
pub fn pipeline_config() -> PipelineConfig {
    PipelineConfig::default()
}
