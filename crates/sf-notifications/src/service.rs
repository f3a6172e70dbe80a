//! Notification service
//!
//! Wraps an injected dispatch function; owns no global state.

use std::fmt;
use std::sync::Arc;

use sf_core::config::NotificationConfig;
use tracing::debug;

use crate::notification::{Level, Notification};

/// Function that receives every notification raised through a service
pub type Dispatch = Arc<dyn Fn(Notification) + Send + Sync>;

#[derive(Clone)]
pub struct NotificationService {
    dispatch: Dispatch,
    duration_ms: u64,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("duration_ms", &self.duration_ms)
            .finish_non_exhaustive()
    }
}

impl NotificationService {
    pub fn new<F>(dispatch: F, config: &NotificationConfig) -> Self
    where
        F: Fn(Notification) + Send + Sync + 'static,
    {
        Self {
            dispatch: Arc::new(dispatch),
            duration_ms: config.duration_ms,
        }
    }

    /// A service that drops everything; for callers with nowhere to show toasts
    pub fn silent() -> Self {
        Self::new(|_| {}, &NotificationConfig::default())
    }

    pub fn notify(&self, level: Level, title: &str, description: &str) {
        debug!(level = level.as_str(), title, description, "notification");
        (self.dispatch)(Notification::new(
            level,
            title,
            description,
            self.duration_ms,
        ));
    }

    pub fn success(&self, title: &str, description: &str) {
        self.notify(Level::Success, title, description);
    }

    pub fn warning(&self, title: &str, description: &str) {
        self.notify(Level::Warning, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.notify(Level::Error, title, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_dispatch_receives_notifications() {
        let seen: Arc<Mutex<Vec<Notification>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let service = NotificationService::new(
            move |n| sink.lock().push(n),
            &NotificationConfig { duration_ms: 9000 },
        );

        service.success("Success", "Article added");
        service.warning("Existing detail", "Edit it instead");

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].level, Level::Success);
        assert_eq!(seen[0].duration_ms, 9000);
        assert_eq!(seen[1].title, "Existing detail");
        assert_eq!(seen[1].level, Level::Warning);
    }

    #[test]
    fn test_silent_service_does_not_panic() {
        NotificationService::silent().error("Error", "ignored");
    }
}
