//! GOOGLIA - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the GOOGLIA boleto demo: a landing page, a
//! simulated login and a dashboard where uploaded boletos go through a
//! mock extraction pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /           LandingPage (SiteHeader, Hero, features)        │
//! │  /login      LoginPage   (simulated sign-in)                 │
//! │  /dashboard  DashboardPage                                   │
//! │              ├── StatsGrid                                   │
//! │              ├── UploadPanel + RecentResults                 │
//! │              └── ResultsView (once a record completed)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (every page)                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - View helpers (toasts, badges, stat tiles)
//! - [`components`] - UI components and pages
//! - [`services`] - Browser timer, file conversion, toast queue

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{
    auth_error_message, dashboard_welcome, file_icon, recent_row_lines, stat_tiles, status_badge,
    upload_hint, StatTile, Toast,
};
pub use components::*;
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toaster::new());

    let landing = googlia::Route::Landing.path();
    let login = googlia::Route::Login.path();
    let dashboard = googlia::Route::Dashboard.path();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path=landing view=LandingPage/>
                    <Route path=login view=LoginPage/>
                    <Route path=dashboard view=DashboardPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
