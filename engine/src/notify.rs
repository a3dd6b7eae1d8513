//! User-visible notifications (toasts).
//!
//! Every flow reports to the user through a [`Notifier`]. The browser
//! renders notifications as toasts, the CLI prints them, tests collect them
//! in a [`NotificationLog`].

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    /// Warnings and rejected input
    Destructive,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Collects notifications in memory.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<Notification> {
        self.entries
            .borrow()
            .iter()
            .filter(|n| n.is_warning())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

/// Prints notifications to stdout and mirrors them to `log`.
#[cfg(feature = "native")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[cfg(feature = "native")]
impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let prefix = match notification.variant {
            Variant::Default => "🔔",
            Variant::Destructive => "⚠️ ",
        };
        println!("{} {} - {}", prefix, notification.title, notification.description);

        match notification.variant {
            Variant::Default => log::info!("{}: {}", notification.title, notification.description),
            Variant::Destructive => log::warn!("{}: {}", notification.title, notification.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_collects_in_order() {
        let log = NotificationLog::new();
        log.notify(Notification::info("first", ""));
        log.notify(Notification::warning("second", "bad"));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "first");
        assert_eq!(log.warnings().len(), 1);
        assert_eq!(log.warnings()[0].description, "bad");
    }

    #[test]
    fn test_notifier_by_reference() {
        fn emit(n: impl Notifier) {
            n.notify(Notification::info("hi", ""));
        }
        let log = NotificationLog::new();
        emit(&log);
        assert_eq!(log.len(), 1);
    }
}
