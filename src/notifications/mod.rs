//! Toast notifications for the person at the counter.
//!
//! Wizard code raises toasts through a [`Notifier`], which fans each toast out
//! to every enabled [`ToastSink`] (the on-screen queue, the log).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod log_sink;
mod queue;
mod service;
mod sink;

pub use log_sink::LogSink;
pub use queue::ToastQueue;
pub use service::Notifier;
pub use sink::ToastSink;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

/// A short message shown on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}
