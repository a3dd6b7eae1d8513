//! Toast queue shared through context.
//!
//! [`Toaster`] is the browser's [`Notifier`]: it queues a [`Toast`] and
//! schedules its dismissal.

use googlia::{Notification, NotificationLog, Notifier, Timer};
use leptos::*;
use std::time::Duration;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::services::BrowserTimer;
use crate::types::Toast;

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Replay notifications collected while another signal was borrowed.
    pub fn forward(&self, log: &NotificationLog) {
        for notification in log.entries() {
            self.notify(notification);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::info!("🔔 {}: {}", notification.title, notification.description);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, notification });
            // Keep max toasts on screen
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let toaster = *self;
        spawn_local(async move {
            BrowserTimer.sleep(Duration::from_millis(TOAST_DURATION_MS)).await;
            toaster.dismiss(id);
        });
    }
}

/// The app-wide toaster provided by [`crate::App`].
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        log::warn!("Toaster context missing, using a detached queue");
        Toaster::new()
    })
}
