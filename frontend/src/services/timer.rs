//! Browser timer backed by `setTimeout`.

use futures::future::LocalBoxFuture;
use googlia::Timer;
use std::time::Duration;

/// Timer for completion tasks and simulated delays in the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
