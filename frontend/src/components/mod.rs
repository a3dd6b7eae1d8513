//! UI Components for the GOOGLIA application.
//!
//! # Layout Components
//! - [`SiteHeader`] - Landing navigation bar
//! - [`DashboardHeader`] - Dashboard bar with logout
//! - [`Hero`] - Landing title and call to action
//! - [`Footer`] - Page footer
//! - [`ToastStack`] - On-screen notifications
//!
//! # Pages
//! - [`LandingPage`] - Static marketing content
//! - [`LoginPage`] - Simulated sign-in form
//! - [`DashboardPage`] - Upload, mock processing and results
//!
//! # Dashboard Components
//! - [`StatsGrid`] - Record counters
//! - [`UploadPanel`] - File selection with drag & drop
//! - [`RecentResults`] - Newest-first record list with status badges
//! - [`ResultsView`] - Detail cards and simulated export

mod header;
mod hero;
mod footer;
mod toasts;
mod landing;
mod login;
mod dashboard;
mod stats;
mod upload;
mod recent;
mod results;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use toasts::*;
pub use landing::*;
pub use login::*;
pub use dashboard::*;
pub use stats::*;
pub use upload::*;
pub use recent::*;
pub use results::*;
