//! Simulated login.
//!
//! Credentials are only checked for shape (what an HTML form with
//! `required` and `type="email"` enforces). Any well-formed pair signs in
//! after a fake network delay.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

use crate::error::{AuthError, AuthResult};
use crate::notify::{Notification, Notifier};
use crate::routes::Route;
use crate::task::Timer;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$")
        .expect("valid email regex")
});

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> AuthResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(())
    }
}

/// Validate, wait `delay`, announce success and point at the dashboard.
pub async fn sign_in<T, N>(
    credentials: &Credentials,
    timer: &T,
    notifier: &N,
    delay: Duration,
) -> AuthResult<Route>
where
    T: Timer + ?Sized,
    N: Notifier + ?Sized,
{
    credentials.validate()?;

    log::info!("🔑 Signing in {}", credentials.email.trim());
    timer.sleep(delay).await;

    notifier.notify(Notification::info(
        "Login realizado com sucesso!",
        "Redirecionando para o painel...",
    ));
    Ok(Route::Dashboard)
}

/// Announce the logout and point back at the landing page.
pub fn sign_out<N: Notifier + ?Sized>(notifier: &N) -> Route {
    log::info!("👋 Signing out");
    notifier.notify(Notification::info("Logout realizado", "Até logo!"));
    Route::Landing
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;
    use crate::task::TokioTimer;

    #[test]
    fn test_validate() {
        assert!(Credentials::new("ana@empresa.com.br", "x").validate().is_ok());
        assert_eq!(
            Credentials::new("  ", "x").validate(),
            Err(AuthError::MissingEmail)
        );
        assert_eq!(
            Credentials::new("ana.empresa.com", "x").validate(),
            Err(AuthError::InvalidEmail("ana.empresa.com".into()))
        );
        assert_eq!(
            Credentials::new("ana@empresa.com", "").validate(),
            Err(AuthError::MissingPassword)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_waits_then_redirects() {
        let log = NotificationLog::new();
        let start = tokio::time::Instant::now();

        let route = sign_in(
            &Credentials::new("demo@googlia.com", "secret"),
            &TokioTimer,
            &log,
            Duration::from_millis(1500),
        )
        .await
        .unwrap();

        assert_eq!(route, Route::Dashboard);
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(log.entries()[0].title, "Login realizado com sucesso!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_rejects_without_waiting() {
        let log = NotificationLog::new();
        let start = tokio::time::Instant::now();

        let err = sign_in(&Credentials::default(), &TokioTimer, &log, Duration::from_secs(5))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::MissingEmail);
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(log.is_empty());
    }

    #[test]
    fn test_sign_out() {
        let log = NotificationLog::new();
        assert_eq!(sign_out(&log), Route::Landing);
        assert_eq!(log.entries()[0].title, "Logout realizado");
    }
}
