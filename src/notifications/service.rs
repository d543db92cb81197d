//! Central toast dispatcher.

use std::sync::Arc;

use super::log_sink::LogSink;
use super::queue::ToastQueue;
use super::sink::ToastSink;
use super::Toast;
use crate::config::Config;

/// Dispatches each toast to all enabled sinks.
#[derive(Clone)]
pub struct Notifier {
    sinks: Vec<Arc<dyn ToastSink>>,
    enabled: bool,
}

impl Notifier {
    /// Build the notifier used by the screen: on-screen queue plus the log.
    pub fn from_config(config: &Config, queue: Arc<ToastQueue>) -> Self {
        let mut sinks: Vec<Arc<dyn ToastSink>> = vec![queue];
        if config.notifications.log_toasts {
            sinks.push(Arc::new(LogSink::new(true)));
        }
        Self {
            sinks,
            enabled: config.notifications.enabled,
        }
    }

    /// A notifier with no sinks
    pub fn disabled() -> Self {
        Self {
            sinks: Vec::new(),
            enabled: false,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ToastSink>) -> Self {
        self.sinks.push(sink);
        self.enabled = true;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn notify(&self, toast: Toast) {
        if !self.enabled {
            tracing::debug!(message = %toast.message, "toast dropped, notifications disabled");
            return;
        }
        for sink in &self.sinks {
            if sink.is_enabled() {
                sink.push(&toast);
            }
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Toast::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;
    use chrono::Duration;

    #[test]
    fn test_disabled_notifier_drops_toasts() {
        let notifier = Notifier::disabled();
        notifier.error("ignored");
        assert!(!notifier.is_enabled());
        assert_eq!(notifier.sink_count(), 0);
    }

    #[test]
    fn test_with_sink_delivers() {
        let queue = Arc::new(ToastQueue::new(8, Duration::seconds(5)));
        let notifier = Notifier::disabled().with_sink(queue.clone());

        notifier.error("Invalid product type");
        notifier.notify(Toast::new(ToastLevel::Success, "Saved"));

        let toasts = queue.snapshot();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].level, ToastLevel::Error);
        assert_eq!(toasts[1].level, ToastLevel::Success);
    }

    #[test]
    fn test_from_config_respects_flags() {
        let queue = Arc::new(ToastQueue::new(8, Duration::seconds(5)));
        let mut config = Config::default();
        config.notifications.log_toasts = false;

        let notifier = Notifier::from_config(&config, queue.clone());
        assert_eq!(notifier.sink_count(), 1);

        config.notifications.enabled = false;
        let notifier = Notifier::from_config(&config, queue.clone());
        notifier.error("hidden");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_disabled_sink_is_skipped() {
        let queue = Arc::new(ToastQueue::new(8, Duration::seconds(5)));
        let notifier = Notifier::disabled()
            .with_sink(Arc::new(LogSink::new(false)))
            .with_sink(queue.clone());

        notifier.error("hello");
        assert_eq!(queue.len(), 1);
    }
}
