//! Sink that mirrors toasts into the tracing log.

use super::sink::ToastSink;
use super::{Toast, ToastLevel};

pub struct LogSink {
    enabled: bool,
}

impl LogSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl ToastSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn push(&self, toast: &Toast) {
        match toast.level {
            ToastLevel::Error => tracing::warn!(message = %toast.message, "toast"),
            ToastLevel::Warning => tracing::info!(message = %toast.message, "toast"),
            ToastLevel::Info | ToastLevel::Success => {
                tracing::debug!(level = toast.level.label(), message = %toast.message, "toast");
            }
        }
    }
}
