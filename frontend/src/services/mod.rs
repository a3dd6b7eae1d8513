//! Browser-side services.
//!
//! # Services
//!
//! - [`timer`] - gloo-timers implementation of the engine timer
//! - [`files`] - `web_sys::File` to intake candidates
//! - [`toaster`] - Toast queue, the browser notifier

pub mod timer;
pub mod files;
pub mod toaster;

pub use timer::*;
pub use files::*;
pub use toaster::*;
